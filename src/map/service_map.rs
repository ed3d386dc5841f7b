use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::map::geo::{LatLng, MapView, ViewAction, Viewport};
use crate::map::marker::{Marker, MarkerVariant};
use crate::map::overlay::{OverlayAction, OverlayEvent, OverlayTarget, Overlays};
use crate::map::popup::{AreaPopup, RadiusTooltip};
use crate::models::{AreaStatistics, CoverageArea, MapSettings, ServiceRadius, StatsTable};

const RADIUS_STROKE: &str = "#0A5C99";
const RADIUS_STROKE_ACTIVE: &str = "#1E88E5";
const RADIUS_FILL: &str = "#1E88E5";

#[derive(Properties, PartialEq)]
pub struct ServiceMapProps {
    pub center: LatLng,
    pub coverage: Rc<Vec<CoverageArea>>,
    #[prop_or_default]
    pub hovered_city: Option<String>,
    pub stats: Rc<StatsTable>,
    pub radius: ServiceRadius,
    pub settings: MapSettings,
    #[prop_or_default]
    pub on_join_waitlist: Callback<String>,
}

/// Pointer drag on the map surface.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct DragState {
    last: Option<(i32, i32)>,
    moved: bool,
}

impl DragState {
    fn start(&mut self, x: i32, y: i32) {
        self.last = Some((x, y));
        self.moved = false;
    }

    /// Pixel delta since the previous pointer position, while a drag is active.
    fn move_to(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        let (last_x, last_y) = self.last?;
        self.last = Some((x, y));
        let delta = (x - last_x, y - last_y);
        if delta == (0, 0) {
            return None;
        }
        self.moved = true;
        Some(delta)
    }

    fn end(&mut self) {
        self.last = None;
    }

    /// False for the click the browser fires at the end of a pan.
    fn take_click(&mut self) -> bool {
        !std::mem::take(&mut self.moved)
    }
}

/// An area overlay that is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPopup {
    pub name: String,
    pub coordinates: LatLng,
    pub stats: Option<AreaStatistics>,
    pub pinned: bool,
}

/// Open area overlays in coverage order, each carrying the statistics
/// stored under its own name.
pub fn open_popups(
    coverage: &[CoverageArea],
    stats: &StatsTable,
    overlays: &Overlays,
) -> Vec<OpenPopup> {
    coverage
        .iter()
        .filter_map(|area| {
            let state = overlays.state(&OverlayTarget::Area(area.name.clone()));
            state.is_open().then(|| OpenPopup {
                name: area.name.clone(),
                coordinates: area.coordinates,
                stats: stats.get(&area.name).cloned(),
                pinned: state.is_pinned(),
            })
        })
        .collect()
}

fn overlay_callback(
    overlays: &UseReducerHandle<Overlays>,
    target: OverlayTarget,
    event: OverlayEvent,
) -> Callback<MouseEvent> {
    let overlays = overlays.clone();
    Callback::from(move |_: MouseEvent| {
        overlays.dispatch(OverlayAction::new(target.clone(), event));
    })
}

fn close_callback(overlays: &UseReducerHandle<Overlays>, target: OverlayTarget) -> Callback<()> {
    let overlays = overlays.clone();
    Callback::from(move |_| {
        overlays.dispatch(OverlayAction::new(target.clone(), OverlayEvent::Close));
    })
}

#[function_component(ServiceMap)]
pub fn service_map(props: &ServiceMapProps) -> Html {
    let viewport = {
        let settings = props.settings.clone();
        let center = props.center;
        use_reducer(move || {
            let mut viewport = Viewport::new(&settings);
            viewport.set_view(center, settings.zoom);
            viewport
        })
    };
    let overlays = use_reducer(Overlays::default);
    let drag: Rc<RefCell<DragState>> = use_mut_ref(DragState::default);

    // Every new center resets the view to the configured zoom, whatever
    // the user did with pan and wheel in between.
    {
        let viewport = viewport.clone();
        let zoom = props.settings.zoom;
        use_effect_with_deps(
            move |center: &LatLng| {
                debug!("Recentering map on {:.4}, {:.4}", center.lat, center.lng);
                viewport.dispatch(ViewAction::SetView { center: *center, zoom });
                || ()
            },
            props.center,
        );
    }

    let on_mouse_down = {
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| {
            drag.borrow_mut().start(e.client_x(), e.client_y());
        })
    };

    let on_mouse_move = {
        let drag = drag.clone();
        let viewport = viewport.clone();
        Callback::from(move |e: MouseEvent| {
            let delta = drag.borrow_mut().move_to(e.client_x(), e.client_y());
            if let Some((dx, dy)) = delta {
                viewport.dispatch(ViewAction::PanBy {
                    dx: f64::from(dx),
                    dy: f64::from(dy),
                });
            }
        })
    };

    let end_drag = {
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().end();
        })
    };

    let on_radius_click = {
        let drag = drag.clone();
        let overlays = overlays.clone();
        Callback::from(move |_: MouseEvent| {
            if drag.borrow_mut().take_click() {
                overlays.dispatch(OverlayAction::new(OverlayTarget::Radius, OverlayEvent::Click));
            }
        })
    };

    let on_wheel = {
        let viewport = viewport.clone();
        Callback::from(move |e: WheelEvent| {
            e.prevent_default();
            let delta = if e.delta_y() < 0.0 { 1 } else { -1 };
            viewport.dispatch(ViewAction::ZoomBy(delta));
        })
    };

    let tiles = viewport.tiles(&props.settings.tile_url);

    let radius = &props.radius;
    let radius_state = overlays.state(&OverlayTarget::Radius);
    let radius_center = viewport.to_screen(radius.center);
    let radius_px = viewport.radius_px(radius.center, radius.radius_m);
    let (stroke, fill_opacity) = if radius_state.is_open() {
        (RADIUS_STROKE_ACTIVE, "0.15")
    } else {
        (RADIUS_STROKE, "0.1")
    };

    let emphasized = props.hovered_city.as_deref();

    let markers = props.coverage.iter().map(|area| {
        let target = OverlayTarget::Area(area.name.clone());
        html! {
            <Marker
                key={area.name.clone()}
                name={area.name.clone()}
                variant={MarkerVariant::for_area(&area.name, emphasized)}
                position={viewport.to_screen(area.coordinates)}
                on_enter={overlay_callback(&overlays, target.clone(), OverlayEvent::Enter)}
                on_leave={overlay_callback(&overlays, target.clone(), OverlayEvent::Leave)}
                on_click={overlay_callback(&overlays, target, OverlayEvent::Click)}
            />
        }
    });

    let popups = open_popups(&props.coverage, &props.stats, &overlays)
        .into_iter()
        .map(|popup| {
            let target = OverlayTarget::Area(popup.name.clone());
            html! {
                <AreaPopup
                    key={popup.name.clone()}
                    name={popup.name.clone()}
                    stats={popup.stats.clone()}
                    position={viewport.to_screen(popup.coordinates)}
                    pinned={popup.pinned}
                    on_join={props.on_join_waitlist.clone()}
                    on_close={close_callback(&overlays, target)}
                />
            }
        });

    let size_style = format!(
        "width: {}px; height: {}px;",
        props.settings.width, props.settings.height
    );

    html! {
        <div class="service-map-wrapper">
            <style>{MAP_STYLES}</style>
            <div
                class="service-map"
                style={size_style}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={end_drag.clone()}
                onmouseleave={end_drag}
                onwheel={on_wheel}
            >
                <div class="map-tiles">
                    { for tiles.iter().map(|tile| html! {
                        <img
                            key={tile.key.clone()}
                            class="map-tile"
                            src={tile.url.clone()}
                            alt=""
                            draggable="false"
                            style={format!("left: {:.1}px; top: {:.1}px;", tile.left, tile.top)}
                        />
                    }) }
                </div>
                <svg
                    class="map-vector-layer"
                    width={props.settings.width.to_string()}
                    height={props.settings.height.to_string()}
                >
                    <circle
                        class="service-radius"
                        cx={format!("{:.1}", radius_center.x)}
                        cy={format!("{:.1}", radius_center.y)}
                        r={format!("{:.1}", radius_px)}
                        stroke={stroke}
                        stroke-width="1"
                        fill={RADIUS_FILL}
                        fill-opacity={fill_opacity}
                        onmouseenter={overlay_callback(&overlays, OverlayTarget::Radius, OverlayEvent::Enter)}
                        onmouseleave={overlay_callback(&overlays, OverlayTarget::Radius, OverlayEvent::Leave)}
                        onclick={on_radius_click}
                    />
                </svg>
                { for markers }
                {
                    if radius_state.is_open() {
                        html! {
                            <RadiusTooltip
                                radius={radius.clone()}
                                position={radius_center}
                                pinned={radius_state.is_pinned()}
                                on_close={close_callback(&overlays, OverlayTarget::Radius)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                { for popups }
                <div class="map-attribution">{&props.settings.attribution}</div>
            </div>
            <div class="map-touch-hint">{"Tap locations to see details"}</div>
        </div>
    }
}

const MAP_STYLES: &str = r#"
    .service-map {
        position: relative;
        overflow: hidden;
        max-width: 100%;
        border-radius: 12px;
        background: #eef2f5;
        cursor: grab;
        user-select: none;
    }
    .service-map:active {
        cursor: grabbing;
    }
    .map-tile {
        position: absolute;
        width: 256px;
        height: 256px;
        pointer-events: none;
    }
    .map-vector-layer {
        position: absolute;
        top: 0;
        left: 0;
        pointer-events: none;
    }
    .service-radius {
        pointer-events: visiblePainted;
        transition: fill-opacity 0.2s ease, stroke 0.2s ease;
        cursor: pointer;
    }
    .map-marker {
        position: absolute;
        box-sizing: border-box;
        background: #fff;
        border-radius: 50%;
        border: 2px solid #0A5C99;
        box-shadow: 0 4px 10px rgba(0, 0, 0, 0.2);
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        z-index: 2;
    }
    .map-marker .marker-dot {
        width: 50%;
        height: 50%;
        border-radius: 50%;
        background: #0A5C99;
    }
    .map-marker.marker-emphasized {
        border-color: #1E88E5;
        z-index: 3;
    }
    .map-marker.marker-emphasized .marker-dot {
        background: #1E88E5;
        animation: marker-pulse 1.5s ease-in-out infinite;
    }
    @keyframes marker-pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    .map-popup, .radius-tooltip {
        position: absolute;
        transform: translate(-50%, calc(-100% - 20px));
        background: #fff;
        border-radius: 8px;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
        padding: 12px 14px;
        min-width: 180px;
        font-size: 14px;
        z-index: 4;
        cursor: default;
    }
    .radius-tooltip {
        transform: translate(-50%, -50%);
    }
    .map-popup p, .radius-tooltip p {
        margin: 2px 0;
        color: #4a5568;
    }
    .popup-title, .tooltip-title {
        margin: 0 0 8px;
        font-weight: 600;
        color: #0A5C99;
    }
    .popup-join {
        margin-top: 12px;
        width: 100%;
        background: #0A5C99;
        color: #fff;
        border: none;
        border-radius: 6px;
        padding: 6px 12px;
        font-size: 14px;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .popup-join:hover {
        background: #1E88E5;
    }
    .overlay-close {
        position: absolute;
        top: 4px;
        right: 6px;
        border: none;
        background: none;
        font-size: 18px;
        line-height: 1;
        color: #718096;
        cursor: pointer;
    }
    .map-attribution {
        position: absolute;
        right: 0;
        bottom: 0;
        padding: 2px 6px;
        font-size: 11px;
        background: rgba(255, 255, 255, 0.8);
        color: #4a5568;
        z-index: 5;
    }
    .map-touch-hint {
        display: none;
        text-align: center;
        font-size: 14px;
        color: #718096;
        margin-top: 8px;
    }
    @media (max-width: 768px) {
        .map-touch-hint {
            display: block;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    fn props(coverage: Vec<CoverageArea>, hovered: Option<&'static str>) -> ServiceMapProps {
        let stats: StatsTable = [(
            "Minneapolis".to_string(),
            AreaStatistics {
                population: "429,954".to_string(),
                nurse_count: 12,
                waitlist_count: 156,
            },
        )]
        .into_iter()
        .collect();

        ServiceMapProps {
            center: LatLng::new(44.9778, -93.2650),
            coverage: Rc::new(coverage),
            hovered_city: hovered.map(str::to_string),
            stats: Rc::new(stats),
            radius: ServiceRadius {
                center: LatLng::new(44.9778, -93.2650),
                radius_m: 24_140.0,
                label: "15-mile Service Radius".to_string(),
                population: "~2.5M".to_string(),
                nurse_count: 34,
            },
            settings: MapSettings {
                center: LatLng::new(44.9778, -93.2650),
                zoom: 11,
                min_zoom: 3,
                max_zoom: 18,
                width: 800,
                height: 480,
                tile_url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"
                    .to_string(),
                attribution: "© OpenStreetMap contributors © CARTO".to_string(),
            },
            on_join_waitlist: Callback::default(),
        }
    }

    fn area(name: &str, lat: f64, lng: f64) -> CoverageArea {
        CoverageArea {
            name: name.to_string(),
            coordinates: LatLng::new(lat, lng),
        }
    }

    fn twin_cities() -> Vec<CoverageArea> {
        vec![
            area("Minneapolis", 44.9778, -93.2650),
            area("St. Paul", 44.9537, -93.0900),
            area("Bloomington", 44.8408, -93.2983),
        ]
    }

    async fn render(coverage: Vec<CoverageArea>, hovered: Option<&'static str>) -> String {
        ServerRenderer::<ServiceMap>::with_props(move || props(coverage, hovered))
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn hovered_city_is_the_only_emphasized_marker() {
        let html = render(twin_cities(), Some("Minneapolis")).await;
        assert_eq!(html.matches(r#"class="map-marker marker-emphasized""#).count(), 1);
        assert_eq!(html.matches(r#"class="map-marker marker-default""#).count(), 2);
        assert!(html.contains(r#"title="Minneapolis""#));
    }

    #[tokio::test]
    async fn no_marker_is_emphasized_without_a_selection() {
        let html = render(twin_cities(), None).await;
        assert_eq!(html.matches("marker-emphasized\"").count(), 0);
        assert_eq!(html.matches(r#"class="map-marker marker-default""#).count(), 3);
    }

    #[tokio::test]
    async fn unknown_selection_emphasizes_nothing() {
        let html = render(twin_cities(), Some("Duluth")).await;
        assert_eq!(html.matches(r#"class="map-marker marker-emphasized""#).count(), 0);
    }

    #[tokio::test]
    async fn areas_without_statistics_still_render() {
        let html = render(vec![area("Edina", 44.8897, -93.3499)], None).await;
        assert!(html.contains(r#"title="Edina""#));
        assert!(html.contains("service-radius"));
    }

    fn opened(events: &[(&str, OverlayEvent)]) -> Overlays {
        let mut overlays = Overlays::default();
        for (name, event) in events {
            overlays.apply(OverlayAction::new(
                OverlayTarget::Area(name.to_string()),
                *event,
            ));
        }
        overlays
    }

    #[test]
    fn open_popup_carries_only_its_own_statistics() {
        let stats = props(vec![], None).stats;
        let overlays = opened(&[("Minneapolis", OverlayEvent::Enter)]);

        let popups = open_popups(&twin_cities(), &stats, &overlays);
        assert_eq!(popups.len(), 1);
        assert_eq!(popups[0].name, "Minneapolis");
        assert!(!popups[0].pinned);
        let shown = popups[0].stats.as_ref().unwrap();
        assert_eq!(shown.population, "429,954");
        assert_eq!(shown.nurse_count, 12);
        assert_eq!(shown.waitlist_count, 156);
    }

    #[test]
    fn open_popup_without_statistics_has_none() {
        let stats = props(vec![], None).stats;
        let mut coverage = twin_cities();
        coverage.push(area("Edina", 44.8897, -93.3499));
        let overlays = opened(&[("Edina", OverlayEvent::Click)]);

        let popups = open_popups(&coverage, &stats, &overlays);
        assert_eq!(popups.len(), 1);
        assert_eq!(popups[0].name, "Edina");
        assert_eq!(popups[0].stats, None);
        assert!(popups[0].pinned);
    }

    #[test]
    fn hidden_areas_produce_no_popup() {
        let stats = props(vec![], None).stats;
        let overlays = opened(&[
            ("St. Paul", OverlayEvent::Click),
            ("Bloomington", OverlayEvent::Enter),
            ("Bloomington", OverlayEvent::Leave),
        ]);

        let popups = open_popups(&twin_cities(), &stats, &overlays);
        let names: Vec<&str> = popups.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["St. Paul"]);
        assert!(popups[0].pinned);
        assert_eq!(popups[0].stats, None);
    }

    #[test]
    fn click_ending_a_pan_is_swallowed() {
        let mut drag = DragState::default();
        drag.start(400, 240);
        assert_eq!(drag.move_to(380, 250), Some((-20, 10)));
        drag.end();
        assert!(!drag.take_click());
        assert_eq!(drag.move_to(300, 200), None);
    }

    #[test]
    fn click_without_movement_goes_through() {
        let mut drag = DragState::default();
        drag.start(400, 240);
        assert_eq!(drag.move_to(400, 240), None);
        drag.end();
        assert!(drag.take_click());

        drag.start(10, 10);
        drag.move_to(40, 10);
        drag.end();
        assert!(!drag.take_click());
        assert!(drag.take_click());
    }

    #[tokio::test]
    async fn overlays_start_closed() {
        let html = render(twin_cities(), Some("Minneapolis")).await;
        assert!(!html.contains("Join Area Waitlist"));
        assert!(!html.contains("Coverage Population"));
        assert!(html.contains(r#"class="map-tile""#));
        assert!(html.contains("Tap locations to see details"));
    }
}
