use std::rc::Rc;

use yew::prelude::*;

use crate::components::pricing_card::PricingCard;
use crate::models::{InsuranceProvider, PricingTier};

#[derive(Properties, PartialEq)]
pub struct PricingInsuranceProps {
    pub tiers: Rc<Vec<PricingTier>>,
    pub providers: Rc<Vec<InsuranceProvider>>,
    #[prop_or_default]
    pub on_select_tier: Callback<String>,
    #[prop_or_default]
    pub on_verify_coverage: Callback<()>,
}

#[function_component(PricingInsurance)]
pub fn pricing_insurance(props: &PricingInsuranceProps) -> Html {
    let verify = props.on_verify_coverage.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <section id="pricing" class="pricing-section">
            <style>{PRICING_STYLES}</style>
            <div class="section-container">
                <div class="section-header">
                    <span class="pill">{"Pre-Launch Pricing"}</span>
                    <h2>{"Simple, Transparent Pricing"}</h2>
                    <div class="header-rule"></div>
                </div>

                <div class="pricing-grid">
                    { for props.tiers.iter().enumerate().map(|(index, tier)| html! {
                        <PricingCard
                            key={tier.title.clone()}
                            tier={tier.clone()}
                            {index}
                            on_select={props.on_select_tier.clone()}
                        />
                    }) }
                </div>

                <div class="early-access">
                    <span class="pill">{"Limited Early Access Available"}</span>
                </div>

                <h3 class="insurance-heading">{"Insurance Coverage"}</h3>
                <div class="insurance-panel">
                    <div>
                        <h4>{"Accepted Insurance"}</h4>
                        <ul class="provider-list">
                            { for props.providers.iter().map(|provider| html! {
                                <li key={provider.name.clone()}>
                                    <span class="provider-shield">{"🛡️"}</span>
                                    <span>{&provider.name}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Coverage Details"}</h4>
                        <p>
                            {"Coverage varies by plan and medical necessity. We'll help verify your benefits and provide necessary documentation for reimbursement."}
                        </p>
                        <button class="outline-button" onclick={verify}>{"Verify Coverage"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

const PRICING_STYLES: &str = r#"
    .pricing-section {
        padding: 64px 0;
        background: #F7F7F7;
    }
    .section-container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 16px;
    }
    .section-header {
        text-align: center;
        margin-bottom: 48px;
    }
    .section-header h2 {
        font-size: 30px;
        color: #0A5C99;
        margin: 16px 0;
    }
    .header-rule {
        height: 4px;
        width: 96px;
        margin: 0 auto;
        background: linear-gradient(to right, #0A5C99, #1E88E5);
    }
    .pill {
        display: inline-block;
        background: #dbeafe;
        color: #0A5C99;
        padding: 4px 16px;
        border-radius: 999px;
        font-size: 14px;
        font-weight: 500;
    }
    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 32px;
        margin-bottom: 64px;
    }
    .pricing-card {
        position: relative;
        height: 100%;
        display: flex;
        flex-direction: column;
        background: #fff;
        border: 1px solid #e2e8f0;
        border-radius: 12px;
        padding: 32px 24px 24px;
        box-sizing: border-box;
        transition: transform 0.3s ease;
    }
    .pricing-card:hover {
        transform: scale(1.02);
    }
    .pricing-card.popular {
        border: 2px solid #0A5C99;
    }
    .popular-tag {
        position: absolute;
        top: -16px;
        left: 50%;
        transform: translateX(-50%);
        background: #0A5C99;
        color: #fff;
        padding: 4px 16px;
        border-radius: 999px;
        font-size: 14px;
        white-space: nowrap;
    }
    .prelaunch-ribbon {
        position: absolute;
        top: 16px;
        right: 16px;
        background: #dbeafe;
        color: #0A5C99;
        padding: 4px 8px;
        border-radius: 999px;
        font-size: 12px;
        font-weight: 500;
    }
    .card-header h3 {
        font-size: 20px;
        font-weight: 600;
        color: #0A5C99;
        margin: 0;
    }
    .price {
        display: flex;
        align-items: baseline;
        margin-top: 16px;
    }
    .price .amount {
        font-size: 30px;
        font-weight: 700;
        color: #2D3748;
    }
    .price .period, .duration {
        margin-left: 8px;
        color: #718096;
    }
    .duration {
        margin: 8px 0 0;
        font-size: 14px;
    }
    .feature-list {
        list-style: none;
        padding: 0;
        margin: 24px 0 0;
        flex: 1;
    }
    .feature-list li {
        display: flex;
        align-items: center;
        margin-bottom: 12px;
        color: #2D3748;
    }
    .feature-check {
        color: #22c55e;
        margin-right: 8px;
        font-weight: 700;
    }
    .waitlist-button {
        width: 100%;
        margin-top: 24px;
        padding: 10px 16px;
        border: none;
        border-radius: 6px;
        color: #fff;
        font-size: 16px;
        cursor: pointer;
        background: linear-gradient(to right, #0A5C99, #1E88E5);
        transition: transform 0.3s ease;
    }
    .waitlist-button:hover {
        background: linear-gradient(to right, #1565C0, #1976D2);
    }
    .early-access {
        text-align: center;
        margin-bottom: 32px;
    }
    .insurance-heading {
        font-size: 24px;
        font-weight: 600;
        color: #0A5C99;
        text-align: center;
        margin-bottom: 32px;
    }
    .insurance-panel {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 32px;
        background: #fff;
        padding: 32px;
        border-radius: 8px;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .insurance-panel h4 {
        font-size: 18px;
        font-weight: 600;
        color: #2D3748;
        margin: 0 0 16px;
    }
    .insurance-panel p {
        color: #4a5568;
        margin-bottom: 16px;
    }
    .provider-list {
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .provider-list li {
        display: flex;
        align-items: center;
        margin-bottom: 8px;
    }
    .provider-shield {
        margin-right: 8px;
    }
    .outline-button {
        border: 1px solid #0A5C99;
        color: #0A5C99;
        background: transparent;
        padding: 8px 16px;
        border-radius: 6px;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .outline-button:hover {
        background: #0A5C99;
        color: #fff;
    }
    @media (max-width: 768px) {
        .pricing-grid, .insurance-panel {
            grid-template-columns: 1fr;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    fn tier(title: &str, price: &str, popular: bool) -> PricingTier {
        PricingTier {
            title: title.to_string(),
            price: price.to_string(),
            duration: "45-60 min".to_string(),
            features: vec!["Health assessment".to_string()],
            popular,
        }
    }

    async fn render() -> String {
        ServerRenderer::<PricingInsurance>::with_props(|| PricingInsuranceProps {
            tiers: Rc::new(vec![
                tier("Basic Care", "85", false),
                tier("Complete Care", "125", true),
                tier("Premium Care", "165", false),
            ]),
            providers: Rc::new(vec![
                InsuranceProvider { name: "Aetna".to_string() },
                InsuranceProvider { name: "UnitedHealthcare".to_string() },
            ]),
            on_select_tier: Callback::default(),
            on_verify_coverage: Callback::default(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn only_the_second_card_is_most_popular() {
        let html = render().await;
        let cards: Vec<&str> = html.split("<article").skip(1).collect();
        assert_eq!(cards.len(), 3);
        assert_eq!(html.matches("Most Popular").count(), 1);
        let flagged: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.contains("Most Popular"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(flagged, vec![1]);
        assert!(cards[1].contains("Complete Care"));
    }

    #[tokio::test]
    async fn cards_keep_configured_order() {
        let html = render().await;
        let basic = html.find("Basic Care").unwrap();
        let complete = html.find("Complete Care").unwrap();
        let premium = html.find("Premium Care").unwrap();
        assert!(basic < complete && complete < premium);
    }

    #[tokio::test]
    async fn lists_insurance_and_verify_action() {
        let html = render().await;
        assert!(html.contains(r#"id="pricing""#));
        assert!(html.contains("Simple, Transparent Pricing"));
        assert!(html.contains("Aetna"));
        assert!(html.contains("UnitedHealthcare"));
        assert!(html.contains("Verify Coverage"));
        assert!(html.contains("Limited Early Access Available"));
    }
}
