pub mod loader;
pub mod runtime;
pub mod server;
