//! folio-ui - behaviour layer of a portfolio site
//!
//! Headless page controllers for toasts, form validation, scroll-driven
//! animation and theming, plus the admin and public-site features built on
//! them. The `folio-ui` binary previews a page in the terminal.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod features;
pub mod page;
pub mod platform;
pub mod state;
pub mod storage;

pub use error::{FolioError, Result};
pub use page::{Collaborators, Page};
