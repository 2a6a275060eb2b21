use serde::Deserialize;

pub const DEFAULT_BACKEND_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ControlConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ControlConfig {
    /// Backend base address, e.g. `http://localhost:5000`. Never ends in `/`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

fn default_scheme() -> String {
    "http".into()
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    DEFAULT_BACKEND_PORT
}
