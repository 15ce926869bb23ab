//! Host-side registration of rendering backends. A host builds a registry at startup
//! and queries it to list which backends can drive the device.

use crate::backend::GraphicsBackend;

#[cfg(not(test))]
use log::{warn, debug};

#[cfg(test)]
use std::{println as warn, println as debug};

/// Registration behavior knobs.
pub struct RegistryOptions {
	replace_duplicates: bool,
}

impl RegistryOptions {
	pub fn new() -> RegistryOptions {
		RegistryOptions {
			replace_duplicates: false,
		}
	}

	/// Makes registering a backend under an already registered name replace the existing
	/// backend instead of failing.
	pub fn replace_duplicates(mut self, replace_duplicates: bool) -> RegistryOptions {
		self.replace_duplicates = replace_duplicates;
		self
	}
}

pub struct BackendRegistry {
	backends: Vec<Box<dyn GraphicsBackend>>,
	options: RegistryOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterError {
	DuplicateName {
		name: String,
	},
}

impl BackendRegistry {
	pub fn new() -> BackendRegistry {
		BackendRegistry::new_with_options(RegistryOptions::new())
	}

	pub fn new_with_options(options: RegistryOptions) -> BackendRegistry {
		BackendRegistry {
			backends: Vec::new(),
			options,
		}
	}

	/// Registers a backend under its device name. Names are unique within a registry.
	pub fn register(&mut self, backend: Box<dyn GraphicsBackend>) -> Result<(), RegisterError> {
		if let Some(existing) = self.backends.iter().position(|b| b.name() == backend.name()) {
			if self.options.replace_duplicates {
				debug!("Replacing '{}' backend", backend.name());

				self.backends[existing] = backend;

				return Ok(());
			}

			warn!("Rejected duplicate registration of '{}' backend", backend.name());

			return Err(RegisterError::DuplicateName { name: backend.name().to_string() });
		}

		debug!("Registered '{}' backend", backend.name());

		self.backends.push(backend);

		Ok(())
	}

	/// Returns the backend registered under `name`, if any.
	pub fn find(&self, name: &str) -> Option<&dyn GraphicsBackend> {
		self.backends.iter().find(|b| b.name() == name).map(|b| b.as_ref())
	}

	/// Returns the registered device names, in registration order.
	pub fn names(&self) -> Vec<&'static str> {
		self.backends.iter().map(|b| b.name()).collect()
	}

	/// Returns the backends which can run on the current platform.
	pub fn available(&self) -> impl Iterator<Item = &dyn GraphicsBackend> {
		self.backends.iter().filter(|b| b.is_available()).map(|b| b.as_ref())
	}
}
