pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod page;
pub mod screen;
pub mod shell;

pub use error::{Error, Result};
