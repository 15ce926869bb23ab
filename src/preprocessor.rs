//! Selection of the shader preprocessor dialect for a backend. The selected tag is
//! predefined as a macro before shader source is preprocessed, so effect files can
//! branch on the backend, e.g. `#ifdef _Metal`.

use crate::backend::GraphicsBackend;

/// A preprocessor dialect tag selected from a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
	tag: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DialectError {
	EmptyTag,
}

/// Selects the preprocessor dialect for `backend`.
pub fn dialect_for(backend: &dyn GraphicsBackend) -> Result<Dialect, DialectError> {
	let tag = backend.preprocessor_name();

	if tag.is_empty() {
		return Err(DialectError::EmptyTag);
	}

	Ok(Dialect {
		tag,
	})
}

impl Dialect {
	pub fn tag(&self) -> &'static str {
		self.tag
	}

	/// Prepends the dialect's define to `source`. The define is always the first line.
	pub fn predefine(&self, source: &str) -> String {
		format!("#define {} 1\n{}", self.tag, source)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::MetalBackend;

	struct TaglessBackend {}

	impl GraphicsBackend for TaglessBackend {
		fn name(&self) -> &'static str { "Tagless" }
		fn preprocessor_name(&self) -> &'static str { "" }
		fn is_available(&self) -> bool { true }
	}

	#[test]
	fn selects_metal_dialect() {
		let backend = MetalBackend::new();

		let dialect = dialect_for(&backend).expect("Failed to select dialect");

		assert_eq!(dialect.tag(), "_Metal");
	}

	#[test]
	fn empty_tag_is_rejected() {
		let backend = TaglessBackend {};

		assert_eq!(dialect_for(&backend), Err(DialectError::EmptyTag));
	}

	#[test]
	fn predefine_prepends_the_define() {
		let backend = MetalBackend::new();

		let dialect = dialect_for(&backend).expect("Failed to select dialect");

		let source = "uniform float4x4 ViewProj;\n";
		let preprocessed = dialect.predefine(source);

		assert_eq!(preprocessed.lines().next(), Some("#define _Metal 1"));
		assert!(preprocessed.ends_with(source));
	}

	#[test]
	fn predefine_preserves_empty_source() {
		let backend = MetalBackend::new();

		let dialect = dialect_for(&backend).expect("Failed to select dialect");

		assert_eq!(dialect.predefine(""), "#define _Metal 1\n");
	}
}
