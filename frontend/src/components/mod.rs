//! UI components mounted into the server-rendered pages.
//!
//! # Components
//! - [`AlertRegion`] - Alert banners with close buttons
//! - [`UploadForm`] - Spreadsheet picker, project name and submit button
//! - [`FileInfoPanel`] - Name and size of the accepted file
//! - [`ProgressIndicator`] - Busy bar shown while the upload is in flight
//! - [`ParameterPanel`] - Bridge parameter inputs with live validation

mod alerts;
mod parameters;
mod progress;
mod upload;

pub use alerts::*;
pub use parameters::*;
pub use progress::*;
pub use upload::*;
