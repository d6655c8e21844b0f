//! Configuration for the identifier registry.

/// Configuration for `IdRegistry`
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Prefix for generated identifiers; must stay within `[A-Z0-9-]`
    pub prefix: String,
    /// How many candidates `generate_unique` tries before giving up
    pub max_generate_attempts: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            prefix: "EMP".to_string(),
            max_generate_attempts: 100,
        }
    }
}
