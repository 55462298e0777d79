//! Time-ordered identifier generation.

use std::fmt;
use std::sync::Mutex;

use ulid::{Generator, Ulid};

/// Shared source of ULID identifiers.
///
/// Ids produced by one instance are lexically sortable by creation order
/// and monotonic within a single millisecond, so records created in quick
/// succession still sort correctly.
pub struct IdGenerator {
    inner: Mutex<Generator>,
}

impl IdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Generator::new()),
        }
    }

    /// Produce the next identifier. Never fails.
    pub fn next_id(&self) -> String {
        let mut generator = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // The monotonic counter can overflow within one millisecond; a
        // fresh random ULID keeps generation infallible.
        match generator.generate() {
            Ok(id) => id.to_string(),
            Err(_) => Ulid::new().to_string(),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
