use common::{Sentiment, SentimentDto};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::loading::LoadingSpinner;
use crate::session;
use crate::Route;

const NEGATIVE_REDIRECT_MS: u32 = 3_000;

fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Free-text mindset check. A positive or neutral result unlocks the
/// prediction view for this session; a negative result is recorded and
/// sends the user back home after a short pause.
#[function_component(SentimentAnalysis)]
pub fn sentiment_analysis() -> Html {
    let textarea_ref = use_node_ref();
    let is_analyzing = use_state(|| false);
    let result = use_state(|| None::<SentimentDto>);
    let navigator = use_navigator().expect("navigator not available");

    let on_analyze = {
        let textarea_ref = textarea_ref.clone();
        let is_analyzing = is_analyzing.clone();
        let result = result.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() else {
                log::error!("Sentiment textarea not found");
                return;
            };

            let text = textarea.value();
            if text.trim().is_empty() {
                blocking_alert("Please enter some text to analyze");
                return;
            }

            log::debug!("Analyzing sentiment for {} characters", text.len());
            is_analyzing.set(true);
            result.set(None);

            let is_analyzing = is_analyzing.clone();
            let result = result.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client::sentiment::analyze(&text).await {
                    Ok(response) => {
                        let dto = response.data;
                        log::info!(
                            "Sentiment result: {} (polarity {:.3})",
                            dto.sentiment.label(),
                            dto.polarity
                        );

                        if dto.sentiment.grants_prediction_access() {
                            session::set_sentiment_check();
                        } else {
                            session::record_negative_result();
                            let navigator = navigator.clone();
                            gloo_timers::callback::Timeout::new(NEGATIVE_REDIRECT_MS, move || {
                                navigator.push(&Route::Home);
                            })
                            .forget();
                        }
                        result.set(Some(dto));
                    }
                    Err(err) => {
                        log::error!("Sentiment analysis failed: {}", err);
                        blocking_alert("Sentiment analysis is unavailable right now. Please try again later.");
                    }
                }
                is_analyzing.set(false);
            });
        })
    };

    let result_card = result.as_ref().map(|dto| match dto.sentiment {
        Sentiment::Positive => html! {
            <div class="alert alert-success mt-6 flex-col items-start">
                <div>
                    <i class="fas fa-smile text-2xl mr-2"></i>
                    <span class="font-bold">{"You're in a positive mindset!"}</span>
                </div>
                <p>{"Great - you're cleared to explore the predictions."}</p>
                <Link<Route> to={Route::Prediction} classes="btn btn-success btn-sm mt-2">
                    {"View Predictions"}
                </Link<Route>>
            </div>
        },
        Sentiment::Neutral => html! {
            <div class="alert alert-info mt-6 flex-col items-start">
                <div>
                    <i class="fas fa-meh text-2xl mr-2"></i>
                    <span class="font-bold">{"You're feeling neutral."}</span>
                </div>
                <p>{"That's fine - you can continue, or take a break first."}</p>
                <div class="flex gap-2 mt-2">
                    <Link<Route> to={Route::Prediction} classes="btn btn-info btn-sm">
                        {"Continue to Predictions"}
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="btn btn-ghost btn-sm">
                        {"Back Home"}
                    </Link<Route>>
                </div>
            </div>
        },
        Sentiment::Negative => html! {
            <div class="alert alert-warning mt-6 flex-col items-start">
                <div>
                    <i class="fas fa-frown text-2xl mr-2"></i>
                    <span class="font-bold">{"You seem to be in a negative mindset."}</span>
                </div>
                <p>
                    {"Trading with a negative mindset is risky. Take a break - \
                      we'll send you back to the home page in a few seconds."}
                </p>
            </div>
        },
    });

    html! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-8">
            <div class="card bg-base-100 shadow-xl w-full max-w-xl">
                <div class="card-body">
                    <h2 class="card-title text-2xl mb-2">
                        <i class="fas fa-brain text-primary mr-2"></i>
                        {"Market Sentiment Check"}
                    </h2>
                    <p class="text-gray-600 mb-4">
                        {"How do you feel about the market today? Describe your \
                          outlook in a few sentences."}
                    </p>

                    <textarea
                        ref={textarea_ref}
                        class="textarea textarea-bordered w-full h-32"
                        placeholder="e.g. I'm feeling optimistic about tech stocks this week..."
                    />

                    <button
                        class="btn btn-primary mt-4"
                        onclick={on_analyze}
                        disabled={*is_analyzing}
                    >
                        if *is_analyzing {
                            <span class="loading loading-spinner loading-sm"></span>
                            {"Analyzing..."}
                        } else {
                            {"Analyze Sentiment"}
                        }
                    </button>

                    if *is_analyzing {
                        <LoadingSpinner />
                    } else {
                        {result_card}
                    }
                </div>
            </div>
        </div>
    }
}
