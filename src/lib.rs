pub mod catalog;
pub mod check;
pub mod config;
pub mod curl;
pub mod error;
pub mod infra;
pub mod routes;
pub mod state;

pub use catalog::EndpointCatalog;
pub use check::{run_check, CheckResult, EndpointDescriptor, HttpTransport, OverridePayload};
pub use config::Config;
pub use routes::router;
pub use state::AppState;
