use crate::catalog::EndpointCatalog;
use crate::check::{StatusBoard, Transport};
use std::sync::Arc;

/// Shared application state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<EndpointCatalog>,
    pub board: StatusBoard,
    pub transport: Arc<dyn Transport>,
}

impl AppState {
    pub fn new(catalog: EndpointCatalog, transport: Arc<dyn Transport>) -> Self {
        let ids: Vec<String> = catalog.ids().map(str::to_string).collect();
        Self {
            catalog: Arc::new(catalog),
            board: StatusBoard::new(ids),
            transport,
        }
    }
}
