pub mod auth;
pub mod sentiment;

use common::{ApiResponse, ErrorResponse};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

async fn read_error(response: gloo_net::http::Response, endpoint: &str) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(err) => {
            log::error!("POST {} - API error: {}", endpoint, err.error);
            err.error
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", status);
            log::error!("{} - {}", endpoint, error_msg);
            error_msg
        }
    }
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<ApiResponse<T>, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        return Err(read_error(response, endpoint).await);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(api_response)
}

/// Common GET request handler with a bearer token attached
pub async fn get_authorized<T>(endpoint: &str, token: &str) -> Result<ApiResponse<T>, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        return Err(read_error(response, endpoint).await);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response)
}
