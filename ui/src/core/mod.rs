//! Platform-agnostic report logic: data model, derived metrics, lookup flow
//! and the small amount of platform glue they need.

pub mod error;
pub mod fetch;
pub mod format;
pub mod lookup;
pub mod metrics;
pub mod platform;
pub mod report;
pub mod storage;
pub mod timing;
