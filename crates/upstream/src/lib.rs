mod baseline;
mod client;
pub mod literal;
mod verification;

pub use baseline::parse_baseline_version;
pub use client::{DEFAULT_BASELINE_URL, DEFAULT_REPORT_URL, UpstreamClient};
pub use literal::{LiteralError, from_literal, parse_literal};
pub use verification::{ReportSource, verify_in_order};
