//! Integration layer
//!
//! Connects the pure core to the outside world:
//! - Runtime: message queues, update cycle, command execution
//! - Renderer: draws state through a terminal
//! - AppRunner: event loop tying terminal, runtime and ballot service together

pub mod app_runner;
pub mod renderer;
pub mod runtime;
