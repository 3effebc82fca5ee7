//! HTTP endpoints of the portfolio backend

mod client;
mod traits;

pub use client::{HttpPortfolioApi, API_URL_ENV, DEFAULT_BASE_URL};
pub use traits::{FeaturedReply, FormReply, PortfolioApi, ProjectSummary};

#[cfg(test)]
pub use traits::MockPortfolioApi;
