//! CLI command implementations.
//!
//! Each command is in its own submodule and takes an options struct built
//! by `main` from the parsed arguments.

pub mod export;
pub mod init;
pub mod list;
pub mod show;

pub use export::{execute_export, ExportCommandOptions};
pub use init::{execute_init, InitOptions};
pub use list::{execute_list, ListOptions};
pub use show::{execute_show, ShowOptions};
