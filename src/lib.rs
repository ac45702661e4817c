// Export modules for library usage
pub mod config;
pub mod discovery;
pub mod errors;
pub mod metadata;
pub mod pair;
pub mod resolver;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use crate::config::DiscoveryConfig;
pub use crate::discovery::AccessorPairProvider;
pub use crate::errors::Error;
pub use crate::metadata::{
    ClassMetadata, ClassModel, MethodMetadata, MethodModel, Parameter, Visibility,
};
pub use crate::pair::{AccessorPair, PairDescriptor};
pub use crate::resolver::{DeclaredTypeResolver, ResolveError, SignatureResolver};
pub use crate::types::DeclaredType;
pub use crate::validation::PairValidator;
