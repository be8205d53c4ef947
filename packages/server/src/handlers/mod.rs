pub mod auth;
pub mod credits;
pub mod generate;
pub mod icons;
pub mod page;
