//! Request construction and the send lifecycle for the endpoint debugger.

pub mod client;
pub mod error;
pub mod url;

pub use client::{send_debug_request, DebugReport, RequestOutcome, STATUS_TRANSPORT_FAILURE};
pub use error::RequestError;
pub use url::build_path;
