//! Backend and browser services.
//!
//! # Services
//!
//! - [`upload`] - multipart spreadsheet upload to `/upload`
//! - [`validate`] - JSON parameter check against `/validate`
//! - [`clipboard`] - plain-text clipboard writes

pub mod clipboard;
pub mod upload;
pub mod validate;

pub use clipboard::*;
pub use upload::*;
pub use validate::*;
