//! ddlayouts core
//!
//! Shared collections, logging bootstrap and math types for the drag and drop
//! layout crates.

pub mod alloc;
pub mod logging;
pub mod math;
