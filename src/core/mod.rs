pub mod badge;
pub mod data;
pub mod format;
