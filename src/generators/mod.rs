// src/generators/mod.rs
pub mod entropy;
pub mod password;
pub mod strength;

pub use entropy::{EntropySource, FallbackEntropy, SecureEntropy};
pub use password::{GenerationRequest, GeneratorError, Password, PasswordGenerator};
pub use strength::{StrengthScore, StrengthTier};
