use yew::prelude::*;

use crate::map::geo::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerVariant {
    Default,
    Emphasized,
}

impl MarkerVariant {
    pub fn for_area(area: &str, emphasized: Option<&str>) -> Self {
        match emphasized {
            Some(name) if name == area => MarkerVariant::Emphasized,
            _ => MarkerVariant::Default,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            MarkerVariant::Default => "marker-default",
            MarkerVariant::Emphasized => "marker-emphasized",
        }
    }

    pub fn size_px(self) -> u32 {
        match self {
            MarkerVariant::Default => 24,
            MarkerVariant::Emphasized => 32,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MarkerProps {
    pub name: String,
    pub variant: MarkerVariant,
    pub position: Point,
    #[prop_or_default]
    pub on_enter: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_leave: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_click: Callback<MouseEvent>,
}

#[function_component(Marker)]
pub fn marker(props: &MarkerProps) -> Html {
    let size = props.variant.size_px();
    let style = format!(
        "left: {:.1}px; top: {:.1}px; width: {}px; height: {}px; margin-left: -{}px; margin-top: -{}px;",
        props.position.x,
        props.position.y,
        size,
        size,
        size / 2,
        size / 2,
    );

    // keep marker clicks from starting a map drag
    let stop_drag = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={classes!("map-marker", props.variant.class())}
            {style}
            title={props.name.clone()}
            onmouseenter={props.on_enter.clone()}
            onmouseleave={props.on_leave.clone()}
            onclick={props.on_click.clone()}
            onmousedown={stop_drag}
        >
            <div class="marker-dot"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_named_area_is_emphasized() {
        assert_eq!(
            MarkerVariant::for_area("Minneapolis", Some("Minneapolis")),
            MarkerVariant::Emphasized
        );
        assert_eq!(
            MarkerVariant::for_area("St. Paul", Some("Minneapolis")),
            MarkerVariant::Default
        );
        assert_eq!(MarkerVariant::for_area("Minneapolis", None), MarkerVariant::Default);
    }

    #[test]
    fn emphasized_marker_is_larger() {
        assert!(MarkerVariant::Emphasized.size_px() > MarkerVariant::Default.size_px());
        assert_ne!(MarkerVariant::Emphasized.class(), MarkerVariant::Default.class());
    }
}
