pub mod carriers;
pub mod directory;
pub mod tracking;
