use yew::prelude::*;
use yew_router::prelude::*;

use crate::session;
use crate::Route;

/// Landing page for a logged-in user: entry points into the sentiment
/// check and the prediction view.
#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().expect("navigator not available");

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("User logged out");
            session::clear_session_token();
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-md">
                <div class="flex-1">
                    <span class="text-xl font-bold px-4">
                        <i class="fas fa-chart-line text-primary mr-2"></i>
                        {"StockSense"}
                    </span>
                </div>
                <div class="flex-none px-4">
                    <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                        <i class="fas fa-sign-out-alt mr-1"></i>
                        {"Logout"}
                    </button>
                </div>
            </div>

            <div class="hero py-16">
                <div class="hero-content text-center">
                    <div class="max-w-lg">
                        <h1 class="text-4xl font-bold mb-4">{"Welcome to StockSense"}</h1>
                        <p class="text-gray-600 mb-8">
                            {"Check your market mindset, then explore 7-day price \
                              projections for 25 listed stocks."}
                        </p>
                    </div>
                </div>
            </div>

            <div class="grid md:grid-cols-2 gap-6 max-w-3xl mx-auto px-6 pb-16">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <i class="fas fa-brain text-4xl text-primary mb-2"></i>
                        <h2 class="card-title">{"Sentiment Check"}</h2>
                        <p class="text-gray-600">
                            {"Describe how you feel about the market today and get \
                              an instant read on your mindset."}
                        </p>
                        <div class="card-actions mt-4">
                            <Link<Route> to={Route::Sentiment} classes="btn btn-primary">
                                {"Check Sentiment"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <i class="fas fa-chart-area text-4xl text-secondary mb-2"></i>
                        <h2 class="card-title">{"Price Projections"}</h2>
                        <p class="text-gray-600">
                            {"Browse the stock catalog and view a 7-day projected \
                              price path for any listed company."}
                        </p>
                        <div class="card-actions mt-4">
                            <Link<Route> to={Route::Prediction} classes="btn btn-secondary">
                                {"View Predictions"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
