use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const STAGGER_MS: u32 = 200;

/// Delay for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

#[derive(Properties, PartialEq)]
pub struct AppearProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(600)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children in once, `delay_ms` after mount.
#[function_component(Appear)]
pub fn appear(props: &AppearProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |delay: &u32| {
                let timeout = Timeout::new(*delay, move || visible.set(true));
                move || drop(timeout)
            },
            props.delay_ms,
        );
    }

    let style = format!(
        "transition: opacity {d}ms ease-out, transform {d}ms ease-out;",
        d = props.duration_ms
    );

    html! {
        <div
            class={classes!("appear", (*visible).then(|| "appear-visible"), props.class.clone())}
            {style}
        >
            <style>
                {r#"
                    .appear {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    .appear.appear-visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_index() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 200);
        assert_eq!(stagger_delay(2), 400);
        assert_eq!(stagger_delay(usize::MAX), u32::MAX);
    }
}
