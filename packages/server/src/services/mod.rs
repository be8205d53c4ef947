pub mod generate;
pub mod icon_store;
pub mod ledger;
