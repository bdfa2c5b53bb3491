use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod contact;
mod content;
mod motion;
mod nav;
mod scroll;
mod components {
    pub mod app_preview;
    pub mod contact;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod pricing;
    pub mod reveal;
    pub mod scroll_to_top;
    pub mod section_header;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use components::toast::Toaster;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Toaster>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </Toaster>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
