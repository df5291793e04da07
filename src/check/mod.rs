//! Endpoint checking core: request assembly, dispatch, classification, and
//! the per-endpoint status map.

pub mod board;
pub mod checker;
pub mod transport;
pub mod types;

pub use board::StatusBoard;
pub use checker::{merge_target_url, run_check};
pub use transport::{EffectiveRequest, HttpTransport, Transport, TransportError};
pub use types::{CheckResult, CheckStatus, EndpointDescriptor, HttpMethod, OverridePayload};
