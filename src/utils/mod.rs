//! # Utility Modules
//!
//! Supporting utilities shared across the crate.
//!
//! ## Components
//! - **Logging**: subscriber setup driven by the server configuration
//! - **Hexdump**: payload dumps for trace-level packet logging

pub mod hexdump;
pub mod logging;
