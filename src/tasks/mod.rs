//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: purges expired entries from both caches when enabled

mod sweep;

pub use sweep::spawn_sweep_task;
