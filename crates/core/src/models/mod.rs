pub mod deposit;
pub mod fund;
pub mod ledger;
pub mod summary;
pub mod user;
