//! Library components of the `zoonosis` command line tool.

pub mod cli;
pub mod logging;
pub mod progress;
pub mod summary;
