//! # rwa-cli
//!
//! Non-interactive surfaces of the shell: scripted navigation runs, the
//! catalogue listing, shell completion and styled console output.

pub mod catalogue;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod script;
pub mod ui;

pub use presenter::ReportPresenter;
pub use script::{parse_script, run_script, ScriptReport, Step};
