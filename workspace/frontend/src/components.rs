pub mod chart;
pub mod guard;
pub mod loading;
pub mod toast;
