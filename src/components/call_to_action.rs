use yew::prelude::*;

use crate::components::appear::Appear;
use crate::models::CallToActionCopy;

pub fn contact_href(email: &str, subject: &str) -> String {
    if subject.is_empty() {
        format!("mailto:{}", email)
    } else {
        format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
    }
}

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub copy: CallToActionCopy,
    #[prop_or_default]
    pub on_join_waitlist: Callback<()>,
    #[prop_or_default]
    pub on_learn_more: Callback<()>,
    #[prop_or_default]
    pub on_contact: Callback<()>,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let copy = &props.copy;
    let join = props.on_join_waitlist.reform(|_: MouseEvent| ());
    let learn_more = props.on_learn_more.reform(|_: MouseEvent| ());
    // the mailto link still opens; this only reports the click
    let contact = props.on_contact.reform(|_: MouseEvent| ());

    html! {
        <section id="waitlist" class="cta-section">
            <style>{CTA_STYLES}</style>
            <Appear duration_ms={600} class="cta-content">
                <span class="cta-badge">{&copy.badge}</span>
                <h2>{&copy.heading}</h2>
                <p class="cta-body">{&copy.body}</p>
                <div class="cta-actions">
                    <button class="cta-button solid" onclick={join}>
                        <span class="cta-icon">{"📅"}</span>
                        {"Join Waitlist"}
                    </button>
                    <button class="cta-button outline" onclick={learn_more}>
                        <span class="cta-icon">{"ℹ️"}</span>
                        {"Learn More"}
                    </button>
                    <a
                        class="cta-button outline"
                        href={contact_href(&copy.contact_email, &copy.contact_subject)}
                        onclick={contact}
                    >
                        <span class="cta-icon">{"✉️"}</span>
                        {"Contact Us"}
                    </a>
                </div>
            </Appear>
        </section>
    }
}

const CTA_STYLES: &str = r#"
    .cta-section {
        padding: 64px 16px;
        background: #0A5C99;
        color: #fff;
    }
    .cta-content {
        text-align: center;
    }
    .cta-badge {
        display: inline-block;
        background: rgba(255, 255, 255, 0.1);
        padding: 4px 16px;
        border-radius: 999px;
        font-size: 14px;
        font-weight: 500;
        margin-bottom: 24px;
    }
    .cta-section h2 {
        font-size: 30px;
        font-weight: 700;
        margin: 0 0 24px;
    }
    .cta-body {
        font-size: 20px;
        max-width: 672px;
        margin: 0 auto 32px;
    }
    .cta-actions {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 16px;
    }
    .cta-button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 192px;
        padding: 10px 16px;
        border-radius: 6px;
        font-size: 16px;
        cursor: pointer;
        text-decoration: none;
        box-sizing: border-box;
        transition: background 0.3s ease, color 0.3s ease;
    }
    .cta-button.solid {
        background: #fff;
        color: #0A5C99;
        border: none;
    }
    .cta-button.solid:hover {
        background: #E6F3FF;
    }
    .cta-button.outline {
        background: transparent;
        color: #fff;
        border: 2px solid #fff;
    }
    .cta-button.outline:hover {
        background: #fff;
        color: #0A5C99;
    }
    .cta-icon {
        margin-right: 8px;
        transition: transform 0.3s ease;
    }
    .cta-button:hover .cta-icon {
        transform: scale(1.1);
    }
    @media (max-width: 640px) {
        .cta-actions {
            flex-direction: column;
        }
    }
"#;
