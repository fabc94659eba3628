//! Built-in registries

pub mod sage;

pub use sage::registry as sage_registry;
