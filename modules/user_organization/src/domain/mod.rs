//! Domain layer - organization manager backends

pub mod in_memory;

pub use in_memory::InMemoryOrganizationManager;
