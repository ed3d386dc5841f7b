use std::rc::Rc;

use yew::prelude::*;

use crate::models::{CoverageArea, StatsTable};

#[derive(Properties, PartialEq)]
pub struct CoverageListProps {
    pub areas: Rc<Vec<CoverageArea>>,
    pub stats: Rc<StatsTable>,
    #[prop_or_default]
    pub hovered: Option<String>,
    #[prop_or_default]
    pub selected: Option<String>,
    #[prop_or_default]
    pub on_hover: Callback<Option<String>>,
    #[prop_or_default]
    pub on_select: Callback<String>,
}

/// Area list next to the map. Hovering an entry emphasizes its marker,
/// clicking re-centers the map on it.
#[function_component(CoverageList)]
pub fn coverage_list(props: &CoverageListProps) -> Html {
    html! {
        <ul class="coverage-list">
            { for props.areas.iter().map(|area| {
                let name = area.name.clone();
                let onmouseenter = {
                    let name = name.clone();
                    props.on_hover.reform(move |_: MouseEvent| Some(name.clone()))
                };
                let onmouseleave = props.on_hover.reform(|_: MouseEvent| None);
                let onclick = {
                    let name = name.clone();
                    props.on_select.reform(move |_: MouseEvent| name.clone())
                };
                let active = props.hovered.as_deref() == Some(name.as_str());
                let selected = props.selected.as_deref() == Some(name.as_str());
                let waitlist = props
                    .stats
                    .get(&name)
                    .map(|stats| format!("{} on waitlist", stats.waitlist_count));

                html! {
                    <li
                        key={name.clone()}
                        class={classes!(
                            "coverage-item",
                            active.then(|| "hovered"),
                            selected.then(|| "selected")
                        )}
                        {onmouseenter}
                        {onmouseleave}
                        {onclick}
                    >
                        <span class="coverage-name">{&name}</span>
                        {
                            match waitlist {
                                Some(text) => html! { <span class="coverage-waitlist">{text}</span> },
                                None => html! {},
                            }
                        }
                    </li>
                }
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;
    use crate::map::geo::LatLng;
    use crate::models::AreaStatistics;

    #[tokio::test]
    async fn marks_hovered_and_selected_entries() {
        let html = ServerRenderer::<CoverageList>::with_props(|| CoverageListProps {
            areas: Rc::new(vec![
                CoverageArea {
                    name: "Minneapolis".to_string(),
                    coordinates: LatLng::new(44.9778, -93.2650),
                },
                CoverageArea {
                    name: "Edina".to_string(),
                    coordinates: LatLng::new(44.8897, -93.3499),
                },
            ]),
            stats: Rc::new(
                [(
                    "Minneapolis".to_string(),
                    AreaStatistics {
                        population: "429,954".to_string(),
                        nurse_count: 12,
                        waitlist_count: 156,
                    },
                )]
                .into_iter()
                .collect(),
            ),
            hovered: Some("Minneapolis".to_string()),
            selected: Some("Edina".to_string()),
            on_hover: Callback::default(),
            on_select: Callback::default(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"class="coverage-item hovered""#));
        assert!(html.contains(r#"class="coverage-item selected""#));
        assert!(html.contains("156 on waitlist"));
        assert_eq!(html.matches("coverage-waitlist").count(), 1);
    }
}
