pub mod artifacts;
pub mod commands;
pub mod output;
pub mod scan;
pub mod types;
