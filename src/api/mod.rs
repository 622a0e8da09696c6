//! REST API module.
//!
//! Contains all API routes and handlers following the editor contract.

mod forms;

pub use forms::*;
