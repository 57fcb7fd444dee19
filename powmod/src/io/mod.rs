//! I/O helpers for powmod commands.

pub mod config;
pub mod render;
