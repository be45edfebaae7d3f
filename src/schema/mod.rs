pub mod dialogue;
pub mod scene;
pub mod staging;
