use std::env;

pub struct Config {
    pub port: u16,
    pub endpoints_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            endpoints_path: env::var("ENDPOINTS_FILE").ok(),
        }
    }

    /// Base URL of this process, used by the default catalog so the demo
    /// endpoints target the built-in mock price API.
    pub fn local_base(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
