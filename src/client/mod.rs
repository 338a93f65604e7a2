//! Outbound submission client

mod http;
mod traits;

pub use http::HttpTransport;
pub use traits::SubmitTransport;

#[cfg(test)]
pub use traits::{ApiResponse, MockSubmitTransport, TransportError};
