pub mod app;
pub mod slider;
pub mod theme;
