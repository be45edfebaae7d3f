pub mod assets;
pub mod config;
pub mod dialogue;
pub mod directive;
pub mod message;
pub mod staging;
