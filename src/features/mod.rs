//! Surface-specific feature sets built on top of the page controllers

mod admin;
mod site;

pub use admin::*;
pub use site::*;
