//! TUI presentation layer
//!
//! This module provides the terminal user interface for the console.
//! It is organized into focused submodules:
//!
//! - `runner`: Main entry point and event loop
//! - `event`: Terminal event handling
//! - `layout`: Layout calculation
//! - `render`: Frame rendering
//! - `terminal`: Panic hook for terminal restoration
//! - `widgets`: Reusable UI components

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
