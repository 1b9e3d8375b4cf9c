use common::LoginRequest;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::toast::ToastContext;
use crate::session;
use crate::Route;

fn form_value(form_data: &FormData, field: &str) -> String {
    form_data
        .get(field)
        .as_string()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[function_component(Login)]
pub fn login() -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let navigator = use_navigator().expect("navigator not available");
    let toast = use_context::<ToastContext>();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Login form element not found");
                return;
            };
            let Ok(form_data) = FormData::new_with_form(&form) else {
                log::error!("Failed to read login form data");
                return;
            };

            let request = LoginRequest {
                email: form_value(&form_data, "email"),
                password: form_data.get("password").as_string().unwrap_or_default(),
            };

            if request.email.is_empty() || request.password.is_empty() {
                error_message.set(Some("Email and password are required".to_string()));
                return;
            }

            log::debug!("Submitting login for {}", request.email);
            is_submitting.set(true);
            error_message.set(None);

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client::auth::login(&request).await {
                    Ok(response) => {
                        log::info!("Login succeeded for user {}", response.data.user.email);
                        session::set_session_token(&response.data.token);
                        if let Some(toast) = &toast {
                            toast.show_success(response.message);
                        }
                        navigator.push(&Route::Home);
                    }
                    Err(err) => {
                        log::warn!("Login failed: {}", err);
                        error_message.set(Some(err));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-8">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body">
                    <h2 class="card-title justify-center text-2xl mb-4">
                        <i class="fas fa-sign-in-alt text-primary mr-2"></i>
                        {"Login"}
                    </h2>

                    if let Some(error) = &*error_message {
                        <div class="alert alert-error mb-4">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{error}</span>
                        </div>
                    }

                    <form ref={form_ref} onsubmit={on_submit}>
                        <div class="form-control mb-3">
                            <label class="label"><span class="label-text">{"Email"}</span></label>
                            <input
                                type="email"
                                name="email"
                                class="input input-bordered"
                                placeholder="you@example.com"
                                required=true
                            />
                        </div>
                        <div class="form-control mb-6">
                            <label class="label"><span class="label-text">{"Password"}</span></label>
                            <input
                                type="password"
                                name="password"
                                class="input input-bordered"
                                placeholder="********"
                                required=true
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled={*is_submitting}
                        >
                            if *is_submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                                {"Logging in..."}
                            } else {
                                {"Login"}
                            }
                        </button>
                    </form>

                    <p class="text-center text-sm mt-4">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Register} classes="link link-primary">
                            {"Register"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
