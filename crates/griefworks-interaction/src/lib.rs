//! Remote call client for the grief support backend.

pub mod http_api;

pub use http_api::HttpGriefApi;
