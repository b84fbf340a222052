pub mod catalog;
pub mod content;
