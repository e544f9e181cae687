pub mod calculation_service;
pub mod format_service;
pub mod instance_registry;
