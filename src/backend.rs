//! Backend identity. The two labels here are configuration values consumed by the host:
//! [`DEVICE_NAME`] is what the device-registration mechanism lists, [`PREPROCESSOR_NAME`]
//! is the shader preprocessor dialect tag.

/// Name under which this backend registers with the host.
pub const DEVICE_NAME: &str = "Metal";

/// Dialect tag predefined when preprocessing shader source for this backend.
pub const PREPROCESSOR_NAME: &str = "_Metal";

/// The seam between a host and any rendering backend it may register.
/// It is not tied to any particular backend implementation.
pub trait GraphicsBackend {
	/// Returns the device name the backend registers under.
	fn name(&self) -> &'static str;

	/// Returns the shader preprocessor dialect tag for this backend.
	fn preprocessor_name(&self) -> &'static str;

	/// Returns whether the backend can run on the current platform.
	fn is_available(&self) -> bool;
}

pub struct MetalBackend {}

impl MetalBackend {
	pub fn new() -> MetalBackend {
		MetalBackend {}
	}
}

impl GraphicsBackend for MetalBackend {
	fn name(&self) -> &'static str {
		DEVICE_NAME
	}

	fn preprocessor_name(&self) -> &'static str {
		PREPROCESSOR_NAME
	}

	fn is_available(&self) -> bool {
		cfg!(target_os = "macos")
	}
}
