//! Route gating.
//!
//! `RequireAuth` wraps routes that need a logged-in user: no stored token
//! means an immediate redirect to the login page, and a stored token is
//! re-validated against the backend when the route mounts so a stale or
//! forged token is thrown out instead of being trusted.
//! `RequireSentimentCheck` additionally gates the prediction view behind a
//! passed sentiment check.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::hooks::FetchState;
use crate::session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    let validation = use_state(FetchState::<()>::default);

    {
        let validation = validation.clone();
        use_effect_with((), move |_| {
            let Some(token) = session::session_token() else {
                // The synchronous redirect below handles this case
                return;
            };

            validation.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match api_client::auth::validate_session(&token).await {
                    Ok(response) => {
                        log::debug!("Session valid for {}", response.data.email);
                        validation.set(FetchState::Success(()));
                    }
                    Err(err) => {
                        log::warn!("Stored session token rejected: {}", err);
                        session::clear_session_token();
                        validation.set(FetchState::Error(err));
                    }
                }
            });
        });
    }

    if session::session_token().is_none() {
        log::debug!("No session token, redirecting to login");
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    match &*validation {
        FetchState::Error(_) => html! { <Redirect<Route> to={Route::Login} /> },
        // Render optimistically while the round-trip is in flight
        _ => html! { <>{props.children.clone()}</> },
    }
}

#[function_component(RequireSentimentCheck)]
pub fn require_sentiment_check(props: &GuardProps) -> Html {
    if session::has_sentiment_check() {
        return html! { <>{props.children.clone()}</> };
    }

    log::debug!("Sentiment check not passed, showing interstitial");
    html! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-8">
            <div class="card bg-base-100 shadow-xl p-8 max-w-md w-full text-center">
                <i class="fas fa-brain text-4xl text-primary mb-4"></i>
                <h2 class="text-2xl font-bold mb-4">{"Mindset Check Required"}</h2>
                <p class="text-gray-600 mb-6">
                    {"Before viewing predictions, you need to check your market sentiment. \
                      This helps ensure you're in the right mindset for trading."}
                </p>
                <Link<Route> to={Route::Sentiment} classes="btn btn-primary">
                    {"Check Your Mindset"}
                </Link<Route>>
            </div>
        </div>
    }
}
