// src/commands/mod.rs
//! Command handlers for the pxrem CLI

mod convert;

pub use convert::{ConvertOptions, cmd_convert};
