use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod content;
mod sparks;
mod components {
    pub mod nav;
    pub mod spark_canvas;
}
mod pages {
    pub mod home;
}

use components::{
    nav::{BrandBar, Nav},
    spark_canvas::SparkCanvas,
};
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
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SparkCanvas />
            <BrandBar />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
