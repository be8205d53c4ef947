pub mod auth;
pub mod generate;
pub mod icon;
pub mod shared;
