//! Shared value slots for passing data between experiment actions.
//!
//! A [`DataHolder`] is created by whoever assembles the experiment and handed
//! (as a clone) to every action that reads or writes it. All clones observe the
//! same value.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Typed slot that may or may not hold a value.
///
/// Cloning a `DataHolder` produces another handle to the same slot, not a copy
/// of the value. Reads return a clone of the stored value.
///
/// # Example
/// ```rust
/// use continuity_types::DataHolder;
///
/// let link: DataHolder<String> = DataHolder::new();
/// let writer = link.clone();
/// assert!(!link.is_set());
///
/// writer.set("wessbas/model/42".to_string());
/// assert!(link.is_set());
/// assert_eq!(link.get().as_deref(), Some("wessbas/model/42"));
/// ```
pub struct DataHolder<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> DataHolder<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a slot that already holds `value`.
    pub fn with_value(value: T) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(value))),
        }
    }

    /// Returns true if a value has been stored.
    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    /// Store `value`, replacing any previous one.
    pub fn set(&self, value: T) {
        *self.lock() = Some(value);
    }

    /// Remove the stored value, returning it if present.
    pub fn clear(&self) -> Option<T> {
        self.lock().take()
    }

    // A poisoned slot still holds a whole value.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: Clone> DataHolder<T> {
    /// Returns a clone of the stored value, or `None` if the slot is empty.
    pub fn get(&self) -> Option<T> {
        self.lock().clone()
    }
}

impl<T> Clone for DataHolder<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for DataHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DataHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DataHolder").field(&*self.lock()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::DataHolder;

    #[test]
    fn clones_share_the_same_slot() {
        let broken: DataHolder<bool> = DataHolder::new();
        let handle = broken.clone();

        handle.set(true);

        assert!(broken.is_set());
        assert_eq!(broken.get(), Some(true));
    }

    #[test]
    fn clear_empties_every_handle() {
        let link = DataHolder::with_value("abc123".to_string());
        let other = link.clone();

        assert_eq!(other.clear().as_deref(), Some("abc123"));
        assert!(!link.is_set());
        assert_eq!(link.get(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let link = DataHolder::with_value("first".to_string());
        link.set("second".to_string());
        assert_eq!(link.get().as_deref(), Some("second"));
    }

    #[test]
    fn debug_shows_current_value() {
        let empty: DataHolder<u32> = DataHolder::default();
        assert_eq!(format!("{empty:?}"), "DataHolder(None)");
        empty.set(7);
        assert_eq!(format!("{empty:?}"), "DataHolder(Some(7))");
    }
}
