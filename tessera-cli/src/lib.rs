pub mod args;
pub mod loader;
pub mod report;
