//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory store for the UserRepository port

pub mod memory;

pub use memory::InMemoryUserRepository;
