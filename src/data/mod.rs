//! In-memory datasets
//!
//! - `calls`: the seeded call record store
//! - `agents`: the agent performance roster
//! - `catalog`: static insight, settings and automation content

pub mod calls;
pub mod agents;
pub mod catalog;

pub use calls::*;
pub use agents::*;
