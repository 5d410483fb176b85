//! Client configuration

/// Configuration for connecting to the remote persistence service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g., "https://project.supabase.co")
    pub base_url: String,

    /// Project API key, sent as `apikey` header and bearer token
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Collection receiving célula records
    pub table: String,

    /// Storage bucket receiving leader photos
    pub bucket: String,
}

impl ClientConfig {
    /// Create a new configuration with the default table and bucket
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: 30,
            table: "celulas".to_string(),
            bucket: "lideres".to_string(),
        }
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the target collection
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the photo storage bucket
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("https://project.supabase.co", "anon-key");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.table, "celulas");
        assert_eq!(config.bucket, "lideres");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://project.supabase.co", "anon-key")
            .with_timeout(5)
            .with_table("celulas_staging")
            .with_bucket("fotos");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.table, "celulas_staging");
        assert_eq!(config.bucket, "fotos");
    }
}
