//! serp: rank results merged from several search engines.
//!
//! This crate is the host around the [`serp_rank`] core. It loads TOML
//! configuration, reads candidate records as JSON, assigns engine
//! priorities, and writes the ranked records back out.
//!
//! # Pipeline
//!
//! - **Config**: `[ranker] min_token_length` and `[priorities]` overrides
//! - **Collect**: records stamped with their engine's priority
//! - **Clean**: per-engine cleanup (Naver ads and internal links)
//! - **Rank**: priority tiers, then title/body match buckets

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::AppConfig;
pub use error::{AppError, Result};
