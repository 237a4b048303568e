// Application layer - the per-session ledger store and the commands it accepts.
// Frontends (the terminal session, tests, anything embedding the crate) own a
// LedgerStore and pass it by reference; there is no shared global state.

mod command;
pub mod error;
pub mod reporting;
mod store;

pub use command::*;
pub use error::*;
pub use reporting::*;
pub use store::*;
