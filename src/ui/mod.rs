pub mod brands;
pub mod panels;
pub mod plot;
pub mod table;
