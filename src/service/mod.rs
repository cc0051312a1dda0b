//! Server-side state: the explicit context handed to connection handlers
//! and the character datastore boundary.

pub mod context;
pub mod store;

pub use context::ServerContext;
pub use store::{CharacterStore, MemoryStore, CHARACTER_SLOTS};
