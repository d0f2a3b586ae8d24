// Public API
pub mod cli;
pub mod commands;

// Core domain types
mod comm_path;
mod config;
mod environment;
pub mod notify;
mod session;
mod tools;

// Re-export main types
pub use comm_path::CommPathError;
pub use config::Config;
pub use environment::Environment;
pub use session::ClientSession;
pub use tools::{SearchPath, ToolLocator};
