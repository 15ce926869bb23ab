use metal_backend::{create, preprocessor, BackendRegistry};

#[test]
fn host_lists_and_selects_the_metal_backend() {
	let _ = simple_logger::SimpleLogger::new().env().init();

	let mut registry = BackendRegistry::new();

	registry.register(Box::new(create())).expect("Failed to register backend");

	assert_eq!(registry.names(), vec!["Metal"]);

	let backend = registry.find("Metal").expect("Backend not found");

	let dialect = preprocessor::dialect_for(backend).expect("Failed to select dialect");

	assert_eq!(dialect.tag(), "_Metal");
	assert_eq!(dialect.predefine("").lines().next(), Some("#define _Metal 1"));
}
