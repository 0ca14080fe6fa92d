mod ledger;
mod money;

pub use ledger::*;
pub use money::*;
