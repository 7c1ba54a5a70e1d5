//! valcount - validator participation census
//!
//! Queries each configured cluster for its vote accounts, one endpoint at a
//! time, and reports how many validators are active and how many are
//! delinquent. An endpoint that keeps failing is reported as `Error` without
//! affecting the others.

pub mod config;
pub mod fetcher;
pub mod logging;
pub mod render;
pub mod report;
pub mod run;

pub use fetcher::{fetch, FetchResult, RetryPolicy};
pub use render::OutputFormat;
pub use report::{build_report, Cell, ReportRow};
