//! Type aliases for shared state.
//!
//! The designer keeps the most recently generated pattern in a single slot
//! that readers may inspect from other threads while a new pattern is being
//! computed. `ThreadSafeRw` names that shape.

use parking_lot::RwLock;
use std::sync::Arc;

/// A thread-safe reader-writer lock wrapper for read-heavy workloads.
///
/// Multiple readers can access concurrently, but writes require exclusive
/// access. Uses `parking_lot::RwLock` rather than `std::sync::RwLock`.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// Create a new `ThreadSafeRw<T>` from a value.
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}
