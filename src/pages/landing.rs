use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::coverage_list::CoverageList;
use crate::components::pricing_insurance::PricingInsurance;
use crate::config::SiteConfig;
use crate::map::service_map::ServiceMap;

fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view(),
        None => warn!("No section with id '{}' to scroll to", id),
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: Rc<SiteConfig>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let site = &props.site;

    let coverage = use_memo(|site| site.coverage.clone(), site.clone());
    let stats = use_memo(|site| site.area_stats.clone(), site.clone());
    let tiers = use_memo(|site| site.pricing.clone(), site.clone());
    let providers = use_memo(|site| site.insurance_providers.clone(), site.clone());

    let hovered_city = use_state(|| None::<String>);
    let selected_city = use_state(|| None::<String>);
    let center = use_state(|| site.map.center);

    let on_hover = {
        let hovered_city = hovered_city.clone();
        Callback::from(move |city: Option<String>| hovered_city.set(city))
    };

    let on_select_city = {
        let site = site.clone();
        let selected_city = selected_city.clone();
        let center = center.clone();
        Callback::from(move |city: String| match site.find_area(&city) {
            Some(area) => {
                info!("Centering map on {}", city);
                center.set(area.coordinates);
                selected_city.set(Some(city));
            }
            None => warn!("Selected unknown coverage area '{}'", city),
        })
    };

    let show_full_area = {
        let default_center = site.map.center;
        let selected_city = selected_city.clone();
        let center = center.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            center.set(default_center);
            selected_city.set(None);
        })
    };

    let on_join_area = Callback::from(|area: String| {
        info!("Area waitlist requested for {}", area);
    });

    let on_select_tier = Callback::from(|tier: String| {
        info!("Waitlist requested for the {} plan", tier);
    });

    let on_verify_coverage = Callback::from(|_: ()| {
        info!("Coverage verification requested");
    });

    let on_join_waitlist = Callback::from(|_: ()| {
        info!("Waitlist requested from call to action");
    });

    let on_learn_more = Callback::from(|_: ()| {
        info!("Learn more requested");
        scroll_to_section("pricing");
    });

    let on_contact = Callback::from(|_: ()| {
        info!("Contact requested");
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>
            <section id="coverage" class="coverage-section">
                <div class="section-container">
                    <div class="section-header">
                        <h2>{"Where We Care"}</h2>
                        <p>{"Registered nurses visiting homes across the Twin Cities metro."}</p>
                    </div>
                    <div class="coverage-layout">
                        <div class="coverage-sidebar">
                            <CoverageList
                                areas={coverage.clone()}
                                stats={stats.clone()}
                                hovered={(*hovered_city).clone()}
                                selected={(*selected_city).clone()}
                                {on_hover}
                                on_select={on_select_city}
                            />
                            <button class="show-all-button" onclick={show_full_area}>
                                {"Show full area"}
                            </button>
                        </div>
                        <div class="coverage-map">
                            <ServiceMap
                                center={*center}
                                coverage={coverage.clone()}
                                hovered_city={(*hovered_city).clone()}
                                stats={stats.clone()}
                                radius={site.service_radius.clone()}
                                settings={site.map.clone()}
                                on_join_waitlist={on_join_area}
                            />
                        </div>
                    </div>
                </div>
            </section>

            <PricingInsurance
                tiers={tiers.clone()}
                providers={providers.clone()}
                {on_select_tier}
                {on_verify_coverage}
            />

            <CallToAction
                copy={site.call_to_action.clone()}
                {on_join_waitlist}
                {on_learn_more}
                {on_contact}
            />

            <footer class="landing-footer">
                <p>{format!("© {}", site.brand)}</p>
            </footer>
        </div>
    }
}

const LANDING_STYLES: &str = r#"
    .landing-page {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #2D3748;
    }
    .coverage-section {
        padding: 96px 0 64px;
        background: #fff;
    }
    .coverage-section .section-header p {
        color: #4a5568;
    }
    .coverage-layout {
        display: flex;
        gap: 32px;
        align-items: flex-start;
    }
    .coverage-sidebar {
        flex: 0 0 240px;
    }
    .coverage-map {
        flex: 1;
        min-width: 0;
    }
    .coverage-list {
        list-style: none;
        padding: 0;
        margin: 0 0 16px;
    }
    .coverage-item {
        display: flex;
        justify-content: space-between;
        padding: 10px 12px;
        border-radius: 6px;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .coverage-item.hovered {
        background: #E6F3FF;
    }
    .coverage-item.selected .coverage-name {
        color: #0A5C99;
        font-weight: 600;
    }
    .coverage-waitlist {
        font-size: 12px;
        color: #718096;
    }
    .show-all-button {
        border: none;
        background: none;
        color: #0A5C99;
        cursor: pointer;
        padding: 0 12px;
        text-decoration: underline;
    }
    .landing-footer {
        text-align: center;
        padding: 24px 0;
        color: #718096;
        font-size: 14px;
    }
    @media (max-width: 900px) {
        .coverage-layout {
            flex-direction: column;
        }
        .coverage-sidebar {
            flex: none;
            width: 100%;
        }
    }
"#;
