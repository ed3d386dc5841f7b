use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod models;
mod map {
    pub mod geo;
    pub mod marker;
    pub mod overlay;
    pub mod popup;
    pub mod service_map;
}
mod components {
    pub mod appear;
    pub mod call_to_action;
    pub mod coverage_list;
    pub mod pricing_card;
    pub mod pricing_insurance;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use config::SiteConfig;
use pages::{landing::Landing, not_found::NotFound};

const SCROLLED_THRESHOLD_PX: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, site: &Rc<SiteConfig>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing site={site.clone()} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > SCROLLED_THRESHOLD_PX);
                    }) as Box<dyn FnMut()>);
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        error!("Failed to register scroll listener");
                    }
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_STYLES}</style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {&props.brand}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#coverage" class="nav-link" onclick={close_menu.clone()}>{"Coverage"}</a>
                    <a href="#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="#waitlist" class="nav-cta" onclick={close_menu}>{"Join Waitlist"}</a>
                </div>
            </div>
        </nav>
    }
}

const NAV_STYLES: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.95);
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 16px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 22px;
        font-weight: 700;
        color: #0A5C99;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 24px;
    }
    .nav-link {
        color: #2D3748;
        text-decoration: none;
    }
    .nav-cta {
        background: #0A5C99;
        color: #fff;
        padding: 8px 16px;
        border-radius: 6px;
        text-decoration: none;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #2D3748;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
        }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 60px;
            left: 0;
            right: 0;
            background: #fff;
            padding: 16px;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let render = {
        let site = props.site.clone();
        Callback::from(move |route: Route| switch(route, &site))
    };

    html! {
        <BrowserRouter>
            <Nav brand={props.site.brand.clone()} />
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

#[function_component]
fn SiteUnavailable() -> Html {
    html! {
        <div style="text-align: center; padding: 120px 16px;">
            <h1>{"We'll be right back"}</h1>
            <p>{"The site is temporarily unavailable. Please try again shortly."}</p>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    match config::load() {
        Ok(site) => {
            yew::Renderer::<App>::with_props(AppProps { site: Rc::new(site) }).render();
        }
        Err(e) => {
            error!("{}", e);
            yew::Renderer::<SiteUnavailable>::new().render();
        }
    }
}
