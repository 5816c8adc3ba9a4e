pub mod content;
mod macros;
pub mod proto;
