// Adapters layer: concrete implementations of the domain ports.

pub mod gateway;
pub mod memory;

pub use gateway::HttpGateway;
pub use memory::MemoryStore;
