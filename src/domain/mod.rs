mod agent;
mod entry;
mod ledger;
mod money;

pub use agent::*;
pub use entry::*;
pub use ledger::*;
pub use money::*;
