pub mod app;
pub mod error;
pub mod paths;
pub mod prettify;
