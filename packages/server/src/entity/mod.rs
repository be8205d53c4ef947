pub mod icon;
pub mod user;
