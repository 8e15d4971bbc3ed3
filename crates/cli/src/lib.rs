//! Interactive terminal front end for the inventory ledger.
//!
//! Everything here is I/O: prompting, parsing what the user typed, and
//! printing results. All bookkeeping happens in `stockledger-inventory`.

pub mod config;
pub mod prompt;
pub mod render;
pub mod session;

pub use config::CliConfig;
pub use session::{MenuChoice, Session};
