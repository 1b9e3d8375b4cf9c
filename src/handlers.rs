pub mod auth;
pub mod health;
pub mod sentiment;
pub mod session;
