use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page" style="text-align: center; padding: 120px 16px;">
            <h1 style="color: #0A5C99;">{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
