//! Endpoint catalog: the ordered, read-only set of endpoints the dashboard
//! probes.
//!
//! Loaded once at startup from a JSON file when `ENDPOINTS_FILE` is set,
//! otherwise falling back to the built-in demo set of regional price-check
//! endpoints pointed at the local mock price API.

use crate::check::types::{EndpointDescriptor, HttpMethod};
use serde_json::json;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read endpoints file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse endpoints file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate endpoint id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    endpoints: Vec<EndpointDescriptor>,
}

impl EndpointCatalog {
    /// Loads the catalog from `path`, or builds the default set when no
    /// path is configured.
    pub fn load(path: Option<&str>, local_base: &str) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new(default_endpoints(local_base))),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let endpoints: Vec<EndpointDescriptor> = serde_json::from_str(&text)?;
        Self::from_endpoints(endpoints)
    }

    fn new(endpoints: Vec<EndpointDescriptor>) -> Self {
        Self { endpoints }
    }

    pub fn from_endpoints(endpoints: Vec<EndpointDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for endpoint in &endpoints {
            if !seen.insert(endpoint.id.as_str()) {
                return Err(CatalogError::DuplicateId(endpoint.id.clone()));
            }
        }
        Ok(Self::new(endpoints))
    }

    pub fn get(&self, id: &str) -> Option<&EndpointDescriptor> {
        self.endpoints.iter().find(|endpoint| endpoint.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        self.endpoints.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(|endpoint| endpoint.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

const REGIONS: [&str; 10] = [
    "east",
    "south",
    "west",
    "north",
    "central",
    "northeast",
    "northwest",
    "southeast",
    "southwest",
    "midwest",
];

/// One price-check endpoint per region, all hitting the local mock API.
fn default_endpoints(local_base: &str) -> Vec<EndpointDescriptor> {
    let base = local_base.trim_end_matches('/');

    REGIONS
        .iter()
        .map(|region| {
            let mut title: Vec<char> = region.chars().collect();
            title[0] = title[0].to_ascii_uppercase();
            let title: String = title.into_iter().collect();

            EndpointDescriptor {
                id: format!("read-prod-{}", region),
                title: format!("Read Prod {}", title),
                url: format!("{}/api/price", base),
                method: HttpMethod::Post,
                headers: Default::default(),
                body: Some(json!({ "request": format!("price-check-{}", region) })),
                expected_status: 200,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog() {
        let catalog = EndpointCatalog::load(None, "http://localhost:3000").unwrap();
        assert_eq!(catalog.len(), 10);

        let east = catalog.get("read-prod-east").unwrap();
        assert_eq!(east.title, "Read Prod East");
        assert_eq!(east.url, "http://localhost:3000/api/price");
        assert_eq!(east.method, HttpMethod::Post);
        assert_eq!(east.expected_status, 200);
        assert_eq!(east.body, Some(json!({"request": "price-check-east"})));

        let ids: HashSet<_> = catalog.ids().collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{
                    "id": "svc-a",
                    "title": "Service A",
                    "url": "https://a.example.com/health",
                    "method": "GET",
                    "expected_status": 204
                }}
            ]"#
        )
        .unwrap();

        let catalog = EndpointCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("svc-a").unwrap().expected_status, 204);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "dup", "title": "A", "url": "https://a/", "method": "GET", "expected_status": 200}},
                {{"id": "dup", "title": "B", "url": "https://b/", "method": "GET", "expected_status": 200}}
            ]"#
        )
        .unwrap();

        assert!(matches!(
            EndpointCatalog::from_file(file.path()),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            EndpointCatalog::from_file(file.path()),
            Err(CatalogError::Parse(_))
        ));
    }
}
