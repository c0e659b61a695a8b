pub mod config;
pub mod core;
pub mod http;
pub mod relay;
pub mod util;
