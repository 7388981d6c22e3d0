use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <div class="container">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </main>
    }
}
