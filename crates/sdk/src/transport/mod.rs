//! Transport layer for the Infomaniak SDK.

pub mod http;

pub use http::HttpTransport;
