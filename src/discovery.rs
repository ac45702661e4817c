//! Accessor pair discovery.
//!
//! Inspects a class through its metadata capability and pairs getter methods
//! with their `set`/`add` counterparts by shared base name. Every candidate
//! goes through the `PairValidator`; only accepted pairs are returned, in
//! method enumeration order.

use crate::config::DiscoveryConfig;
use crate::errors::Error;
use crate::metadata::ClassMetadata;
use crate::pair::AccessorPair;
use crate::resolver::DeclaredTypeResolver;
use crate::validation::PairValidator;
use log::{debug, trace};

/// Discovers validated accessor pairs on a class.
#[derive(Debug, Clone, Default)]
pub struct AccessorPairProvider {
    config: DiscoveryConfig,
}

impl AccessorPairProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Inspect the class and pair all get/set methods together.
    ///
    /// Loops over the public methods and, for each getter, probes the
    /// configured setter prefixes for a public counterpart sharing the base
    /// name. A getter may pair with both a `set` and an `add` method; each
    /// candidate is validated separately. Getters without a counterpart are
    /// skipped silently. A resolution failure aborts with an error.
    pub fn discover<'c>(
        &self,
        class: &'c dyn ClassMetadata,
        resolver: &dyn DeclaredTypeResolver,
    ) -> Result<Vec<AccessorPair<'c>>, Error> {
        let validator = PairValidator::new(resolver);
        let mut pairs = Vec::new();

        for method in class.methods() {
            if !method.is_public() {
                continue;
            }

            // A method qualifies as a getter under the first prefix that
            // matches; the remainder of the name is the base name.
            let method_name = method.name();
            let Some(base_name) = self
                .config
                .getter_prefixes
                .iter()
                .find_map(|prefix| method_name.strip_prefix(prefix.as_str()))
            else {
                continue;
            };

            for setter_prefix in &self.config.setter_prefixes {
                let setter_name = format!("{setter_prefix}{base_name}");
                let Some(setter) = class.find_method(&setter_name) else {
                    continue;
                };
                if !setter.is_public() {
                    trace!(
                        "{}::{setter_name} is not public, skipping candidate",
                        class.name()
                    );
                    continue;
                }

                let aggregating = self.config.is_aggregating_prefix(setter_prefix);
                let pair = AccessorPair::new(class.name(), method, setter, aggregating);
                if validator.is_valid(&pair)? {
                    pairs.push(pair);
                }
            }
        }

        debug!(
            "{}: {} validated accessor pair(s)",
            class.name(),
            pairs.len()
        );
        Ok(pairs)
    }
}
