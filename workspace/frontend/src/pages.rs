pub mod home;
pub mod login;
pub mod prediction;
pub mod register;
pub mod sentiment;
