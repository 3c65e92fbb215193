//! Configuration for the generation endpoint client.

/// Where and how the UI reaches the generation endpoint.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Full URL of the generate route.
    pub endpoint: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/email/generate".to_string(),
        }
    }
}

impl GenerationConfig {
    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
