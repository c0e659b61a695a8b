pub mod encoding;
pub mod pages;
pub mod server;
