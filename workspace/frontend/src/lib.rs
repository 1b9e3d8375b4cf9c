use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod hooks;
pub mod session;
pub mod settings;

use components::toast::ToastProvider;
use components::guard::{RequireAuth, RequireSentimentCheck};
use pages::home::Home;
use pages::login::Login;
use pages::prediction::Prediction;
use pages::register::Register;
use pages::sentiment::SentimentAnalysis;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/sentiment")]
    Sentiment,
    #[at("/prediction")]
    Prediction,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <RequireAuth><Home /></RequireAuth> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Register => {
            log::trace!("Rendering Register page");
            html! { <Register /> }
        }
        Route::Sentiment => {
            log::trace!("Rendering Sentiment page");
            html! { <SentimentAnalysis /> }
        }
        Route::Prediction => {
            log::trace!("Rendering Prediction page");
            html! {
                <RequireAuth>
                    <RequireSentimentCheck>
                        <Prediction />
                    </RequireSentimentCheck>
                </RequireAuth>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1 class="text-center mt-12">{"404 Not Found"}</h1> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== StockSense Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
