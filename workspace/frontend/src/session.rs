//! Per-tab session state.
//!
//! All sessionStorage access goes through this module so the rest of the
//! app never touches raw storage keys. The authenticated state is the
//! presence of the signed token from the login endpoint; the backend
//! re-verifies it whenever a protected route mounts.

use web_sys::Storage;

const TOKEN_KEY: &str = "stocksense_session_token";
const SENTIMENT_CHECK_KEY: &str = "stocksense_sentiment_check";
const LAST_NEGATIVE_KEY: &str = "stocksense_last_negative";

fn storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// The signed session token, if the user has logged in this tab.
pub fn session_token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn set_session_token(token: &str) {
    if let Some(storage) = storage() {
        if let Err(e) = storage.set_item(TOKEN_KEY, token) {
            log::error!("Failed to store session token: {:?}", e);
        }
    }
}

/// Drop the token, e.g. after the backend rejects it as expired.
pub fn clear_session_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    log::debug!("Session token cleared");
}

/// Whether a positive/neutral sentiment check has been passed this session.
pub fn has_sentiment_check() -> bool {
    storage()
        .and_then(|s| s.get_item(SENTIMENT_CHECK_KEY).ok().flatten())
        .as_deref()
        == Some("true")
}

pub fn set_sentiment_check() {
    if let Some(storage) = storage() {
        if let Err(e) = storage.set_item(SENTIMENT_CHECK_KEY, "true") {
            log::error!("Failed to store sentiment flag: {:?}", e);
        }
    }
    log::info!("Sentiment check passed for this session");
}

/// Record when a negative sentiment result was last seen.
pub fn record_negative_result() {
    let now_ms = js_sys::Date::now();
    if let Some(storage) = storage() {
        let _ = storage.set_item(LAST_NEGATIVE_KEY, &format!("{}", now_ms as u64));
    }
    log::info!("Negative sentiment recorded at {} ms", now_ms as u64);
}
