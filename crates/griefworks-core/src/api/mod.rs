//! Remote service interface.
//!
//! - `result`: the uniform `{ data, error }` outcome of one call
//! - `client`: the `GriefApi` trait and its fixed endpoints

mod client;
mod result;

pub use client::{Endpoint, GriefApi};
pub use result::{ApiResult, GENERIC_FAILURE_MESSAGE};
