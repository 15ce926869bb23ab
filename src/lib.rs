//! The Metal backend module exposes this backend's identity to a host graphics layer:
//! the device name the registration mechanism lists, and the preprocessor dialect tag
//! selected when preprocessing shader source for this backend.

pub mod backend;

pub mod registry;

pub mod preprocessor;

pub use crate::backend::*;

pub use crate::registry::{BackendRegistry, RegistryOptions, RegisterError};

pub fn create() -> backend::MetalBackend {
	backend::MetalBackend::new()
}
