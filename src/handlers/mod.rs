pub mod contacts;
pub mod health;
pub mod mobile;
pub mod tracking;
