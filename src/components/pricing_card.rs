use yew::prelude::*;

use crate::components::appear::{stagger_delay, Appear};
use crate::models::PricingTier;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: PricingTier,
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub on_select: Callback<String>,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = &props.tier;

    let onclick = {
        let on_select = props.on_select.clone();
        let title = tier.title.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(title.clone());
        })
    };

    html! {
        <Appear delay_ms={stagger_delay(props.index)} class="pricing-card-wrapper">
            <article class={classes!("pricing-card", tier.popular.then(|| "popular"))}>
                {
                    if tier.popular {
                        html! { <div class="popular-tag">{"Most Popular"}</div> }
                    } else {
                        html! {}
                    }
                }
                <span class="prelaunch-ribbon">{"✨ Pre-Launch Price"}</span>
                <div class="card-header">
                    <h3>{&tier.title}</h3>
                    <div class="price">
                        <span class="amount">{format!("${}", tier.price)}</span>
                        <span class="period">{"/visit"}</span>
                    </div>
                    <div class="duration">{format!("🕒 {}", tier.duration)}</div>
                </div>
                <ul class="feature-list">
                    { for tier.features.iter().map(|feature| html! {
                        <li>
                            <span class="feature-check">{"✓"}</span>
                            <span>{feature}</span>
                        </li>
                    }) }
                </ul>
                <button class="waitlist-button" {onclick}>
                    {format!("Join Waitlist - ${}", tier.price)}
                </button>
            </article>
        </Appear>
    }
}
