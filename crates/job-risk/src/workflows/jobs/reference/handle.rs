use super::ReferenceData;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Shared, swappable pointer to the active reference tables.
///
/// Scoring passes take a [`snapshot`](Self::snapshot) up front and keep it for
/// the whole batch, so a concurrent [`replace`](Self::replace) is never
/// observed half-way through.
#[derive(Debug, Clone)]
pub struct ReferenceHandle {
    current: Arc<RwLock<Arc<ReferenceData>>>,
}

impl ReferenceHandle {
    pub fn new(data: ReferenceData) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(data))),
        }
    }

    pub fn snapshot(&self) -> Arc<ReferenceData> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Installs `data` as the active tables and returns the previous ones.
    pub fn replace(&self, data: ReferenceData) -> Arc<ReferenceData> {
        let next = Arc::new(data);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!(
            operations = next.operation_count(),
            departments = next.department_count(),
            "reference data replaced"
        );
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for ReferenceHandle {
    fn default() -> Self {
        Self::new(ReferenceData::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_unaffected_by_later_replace() {
        let handle = ReferenceHandle::default();
        let before = handle.snapshot();

        let previous = handle.replace(ReferenceData::empty());

        assert_eq!(before.department_multiplier("0043"), 1.8);
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(handle.snapshot().department_multiplier("0043"), 1.0);
    }

    #[test]
    fn clones_share_the_active_tables() {
        let handle = ReferenceHandle::new(ReferenceData::empty());
        let clone = handle.clone();

        handle.replace(ReferenceData::standard());

        assert_eq!(clone.snapshot().operation_count(), 4);
    }
}
