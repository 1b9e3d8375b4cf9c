use common::RegisterRequest;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::Route;

fn form_value(form_data: &FormData, field: &str) -> String {
    form_data
        .get(field)
        .as_string()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Registration form. Validation runs client-side first; a form that
/// fails any rule never reaches the network.
#[function_component(Register)]
pub fn register() -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Register form element not found");
                return;
            };
            let Ok(form_data) = FormData::new_with_form(&form) else {
                log::error!("Failed to read register form data");
                return;
            };

            let request = RegisterRequest {
                name: form_value(&form_data, "name"),
                mobile_number: form_value(&form_data, "mobile_number"),
                age: form_value(&form_data, "age"),
                email: form_value(&form_data, "email"),
                password: form_data.get("password").as_string().unwrap_or_default(),
                confirm_password: form_data
                    .get("confirm_password")
                    .as_string()
                    .unwrap_or_default(),
            };

            if let Some(validation_error) = request.first_validation_error() {
                log::debug!("Registration blocked client-side: {}", validation_error);
                error_message.set(Some(validation_error));
                return;
            }

            log::debug!("Submitting registration for {}", request.email);
            is_submitting.set(true);
            error_message.set(None);
            success_message.set(None);

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client::auth::register(&request).await {
                    Ok(response) => {
                        log::info!("Registered user {}", response.data.email);
                        form.reset();
                        success_message.set(Some(response.message));
                    }
                    Err(err) => {
                        log::warn!("Registration failed: {}", err);
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
                        <i class="fas fa-user-plus text-primary mr-2"></i>
                        {"Create Account"}
                    </h2>

                    if let Some(error) = &*error_message {
                        <div class="alert alert-error mb-4">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{error}</span>
                        </div>
                    }
                    if let Some(message) = &*success_message {
                        <div class="alert alert-success mb-4">
                            <i class="fas fa-check-circle"></i>
                            <span>
                                {message}{" "}
                                <Link<Route> to={Route::Login} classes="link">
                                    {"Login now"}
                                </Link<Route>>
                            </span>
                        </div>
                    }

                    <form ref={form_ref} onsubmit={on_submit}>
                        <div class="form-control mb-3">
                            <label class="label"><span class="label-text">{"Name"}</span></label>
                            <input type="text" name="name" class="input input-bordered" />
                        </div>
                        <div class="form-control mb-3">
                            <label class="label"><span class="label-text">{"Mobile Number"}</span></label>
                            <input type="tel" name="mobile_number" class="input input-bordered" />
                        </div>
                        <div class="form-control mb-3">
                            <label class="label"><span class="label-text">{"Age"}</span></label>
                            <input type="text" name="age" class="input input-bordered" />
                        </div>
                        <div class="form-control mb-3">
                            <label class="label"><span class="label-text">{"Email"}</span></label>
                            <input type="text" name="email" class="input input-bordered" />
                        </div>
                        <div class="form-control mb-3">
                            <label class="label"><span class="label-text">{"Password"}</span></label>
                            <input type="password" name="password" class="input input-bordered" />
                        </div>
                        <div class="form-control mb-6">
                            <label class="label"><span class="label-text">{"Confirm Password"}</span></label>
                            <input type="password" name="confirm_password" class="input input-bordered" />
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled={*is_submitting}
                        >
                            if *is_submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                                {"Registering..."}
                            } else {
                                {"Register"}
                            }
                        </button>
                    </form>

                    <p class="text-center text-sm mt-4">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login} classes="link link-primary">
                            {"Login"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
