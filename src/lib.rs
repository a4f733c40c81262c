pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod session;
pub mod source;
// cmd and reports belong to the binary (main.rs).
