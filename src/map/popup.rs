use yew::prelude::*;

use crate::map::geo::Point;
use crate::models::{AreaStatistics, ServiceRadius};

/// Turns the map's waitlist callback into one bound to a single area.
pub fn join_request(on_join: &Callback<String>, area: &str) -> Callback<()> {
    let area = area.to_string();
    on_join.reform(move |_| area.clone())
}

fn anchor_style(position: Point) -> String {
    format!("left: {:.1}px; top: {:.1}px;", position.x, position.y)
}

fn close_button(pinned: bool, on_close: &Callback<()>) -> Html {
    if !pinned {
        return html! {};
    }
    let onclick = on_close.reform(|e: MouseEvent| e.stop_propagation());
    html! {
        <button class="overlay-close" aria-label="Close" {onclick}>{"×"}</button>
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaPopupProps {
    pub name: String,
    pub stats: Option<AreaStatistics>,
    pub position: Point,
    #[prop_or_default]
    pub pinned: bool,
    #[prop_or_default]
    pub on_join: Callback<String>,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(AreaPopup)]
pub fn area_popup(props: &AreaPopupProps) -> Html {
    let join = join_request(&props.on_join, &props.name);
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        join.emit(());
    });

    html! {
        <div
            class={classes!("map-popup", props.pinned.then(|| "pinned"))}
            style={anchor_style(props.position)}
            onmousedown={Callback::from(|e: MouseEvent| e.stop_propagation())}
        >
            { close_button(props.pinned, &props.on_close) }
            <h3 class="popup-title">{&props.name}</h3>
            {
                match &props.stats {
                    Some(stats) => html! {
                        <div class="popup-stats">
                            <p>{format!("Population: {}", stats.population)}</p>
                            <p>{format!("Available RNs: {}", stats.nurse_count)}</p>
                            <p>{format!("Current Waitlist: {}", stats.waitlist_count)}</p>
                        </div>
                    },
                    None => html! {},
                }
            }
            <button class="popup-join" {onclick}>{"Join Area Waitlist"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RadiusTooltipProps {
    pub radius: ServiceRadius,
    pub position: Point,
    #[prop_or_default]
    pub pinned: bool,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(RadiusTooltip)]
pub fn radius_tooltip(props: &RadiusTooltipProps) -> Html {
    let radius = &props.radius;
    html! {
        <div
            class={classes!("radius-tooltip", props.pinned.then(|| "pinned"))}
            style={anchor_style(props.position)}
            onmousedown={Callback::from(|e: MouseEvent| e.stop_propagation())}
        >
            { close_button(props.pinned, &props.on_close) }
            <p class="tooltip-title">{&radius.label}</p>
            <p>{format!("Coverage Population: {}", radius.population)}</p>
            <p>{format!("Available RNs: {}", radius.nurse_count)}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::ServerRenderer;

    use super::*;
    use crate::map::geo::LatLng;
    use crate::map::overlay::{OverlayAction, OverlayEvent, OverlayTarget, Overlays};

    fn minneapolis() -> AreaStatistics {
        AreaStatistics {
            population: "429,954".to_string(),
            nurse_count: 12,
            waitlist_count: 156,
        }
    }

    async fn render_popup(name: &'static str, stats: Option<AreaStatistics>, pinned: bool) -> String {
        ServerRenderer::<AreaPopup>::with_props(move || AreaPopupProps {
            name: name.to_string(),
            stats,
            position: Point { x: 10.0, y: 20.0 },
            pinned,
            on_join: Callback::default(),
            on_close: Callback::default(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn popup_shows_the_area_statistics() {
        let html = render_popup("Minneapolis", Some(minneapolis()), false).await;
        assert!(html.contains("Minneapolis"));
        assert!(html.contains("Population: 429,954"));
        assert!(html.contains("Available RNs: 12"));
        assert!(html.contains("Current Waitlist: 156"));
        assert!(html.contains("Join Area Waitlist"));
        assert!(!html.contains("311,527"));
        assert!(!html.contains("overlay-close"));
    }

    #[tokio::test]
    async fn popup_without_statistics_omits_the_block() {
        let html = render_popup("Edina", None, false).await;
        assert!(html.contains("Edina"));
        assert!(html.contains("Join Area Waitlist"));
        assert!(!html.contains("popup-stats"));
        assert!(!html.contains("Population:"));
    }

    #[tokio::test]
    async fn pinned_popup_offers_close() {
        let html = render_popup("Minneapolis", Some(minneapolis()), true).await;
        assert!(html.contains("overlay-close"));
        assert!(html.contains("map-popup pinned"));
    }

    #[tokio::test]
    async fn radius_tooltip_lists_coverage() {
        let html = ServerRenderer::<RadiusTooltip>::with_props(|| RadiusTooltipProps {
            radius: ServiceRadius {
                center: LatLng::new(44.9778, -93.2650),
                radius_m: 24_140.0,
                label: "15-mile Service Radius".to_string(),
                population: "~2.5M".to_string(),
                nurse_count: 34,
            },
            position: Point { x: 0.0, y: 0.0 },
            pinned: false,
            on_close: Callback::default(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(html.contains("15-mile Service Radius"));
        assert!(html.contains("Coverage Population: ~2.5M"));
        assert!(html.contains("Available RNs: 34"));
    }

    #[test]
    fn join_request_emits_the_area_once_without_touching_overlays() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let on_join = {
            let calls = calls.clone();
            Callback::from(move |area: String| calls.borrow_mut().push(area))
        };

        let mut overlays = Overlays::default();
        overlays.apply(OverlayAction::new(
            OverlayTarget::Area("Minneapolis".to_string()),
            OverlayEvent::Click,
        ));
        let before = overlays.clone();

        join_request(&on_join, "Minneapolis").emit(());

        assert_eq!(*calls.borrow(), vec!["Minneapolis".to_string()]);
        assert_eq!(overlays, before);
    }
}
