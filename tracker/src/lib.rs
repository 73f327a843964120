pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod menu;
pub mod report;
pub mod student;
pub mod tracker;
