//! Components for driving a [`boxsculpt`] editor from the command line.
//!
//! This is primarily used by the `boxsculpt` binary target in this package; it exists as a
//! library so that its pieces can be tested individually. Documentation is lacking.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

mod box_source;
pub use box_source::BoxSource;
mod config_files;
pub use config_files::{ConfigArgs, read_json_file};
pub mod logging;
pub mod script;
mod session;
pub use session::{ScriptSession, Summary};
