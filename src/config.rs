//! Discovery configuration.

use serde::{Deserialize, Serialize};

/// Configuration for accessor pair discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Ordered getter name prefixes; a method qualifies under the first
    /// prefix it matches.
    #[serde(default = "default_getter_prefixes")]
    pub getter_prefixes: Vec<String>,

    /// Ordered setter name prefixes probed for each getter base name.
    #[serde(default = "default_setter_prefixes")]
    pub setter_prefixes: Vec<String>,

    /// Setter prefixes that aggregate single elements into a collection the
    /// getter returns as a whole. A pair matched through one of these is
    /// multi-valued even when its parameter is not variadic.
    #[serde(default = "default_aggregating_prefixes")]
    pub aggregating_prefixes: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            getter_prefixes: default_getter_prefixes(),
            setter_prefixes: default_setter_prefixes(),
            aggregating_prefixes: default_aggregating_prefixes(),
        }
    }
}

impl DiscoveryConfig {
    pub fn is_aggregating_prefix(&self, prefix: &str) -> bool {
        self.aggregating_prefixes.iter().any(|p| p == prefix)
    }
}

fn default_getter_prefixes() -> Vec<String> {
    vec!["get".to_string(), "is".to_string(), "has".to_string()]
}

fn default_setter_prefixes() -> Vec<String> {
    vec!["set".to_string(), "add".to_string()]
}

fn default_aggregating_prefixes() -> Vec<String> {
    vec!["add".to_string()]
}
