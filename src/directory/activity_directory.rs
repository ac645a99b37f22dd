use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::models::Activity;

/// Handle handed to the router as axum state.
///
/// A std lock is enough here: every critical section is short, synchronous
/// and never held across an await point.
pub type SharedDirectory = Arc<RwLock<ActivityDirectory>>;

/// Process-owned catalog of activities, keyed by activity name.
///
/// Built once at startup from the seed dataset; after that the only
/// mutations are roster changes through signup and unregister. Activities
/// themselves are never created or deleted at runtime.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    /// Clone of the full mapping, for the list operation.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.clone()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn into_shared(self) -> SharedDirectory {
        Arc::new(RwLock::new(self))
    }
}
