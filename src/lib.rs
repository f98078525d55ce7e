//! Brand-design studio engine: prompt a generative image model with brand
//! parameters, letterbox the result onto an exact canvas, and keep a small
//! local history of generated designs.

pub mod aspect;
pub mod catalog;
pub mod client;
pub mod compositor;
pub mod config;
pub mod credentials;
pub mod error;
pub mod export;
pub mod history;
pub mod image_handler;
pub mod params;
pub mod prompt;
pub mod store;
pub mod studio;
pub mod utils;

pub use error::{GenGraphicError, Result};
