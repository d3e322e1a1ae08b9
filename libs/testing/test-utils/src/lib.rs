//! Test infrastructure shared by the task crates.
//!
//! - [`TestDatabase`] (feature `postgres`): disposable PostgreSQL with the
//!   task schema applied
//! - [`TaskFixtures`]: per-test task ids and descriptions

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

use uuid::Uuid;

/// Task data derived from the test's name.
///
/// The same test always gets the same ids, and two tests never share one,
/// so rows left behind by a failed run are easy to trace back.
#[derive(Debug, Clone, Copy)]
pub struct TaskFixtures {
    scope: Uuid,
}

impl TaskFixtures {
    pub fn new(test_name: &str) -> Self {
        Self {
            scope: Uuid::new_v5(&Uuid::NAMESPACE_OID, test_name.as_bytes()),
        }
    }

    /// The `n`-th task id of this test. Never nil.
    pub fn id(&self, n: u32) -> Uuid {
        Uuid::new_v5(&self.scope, &n.to_be_bytes())
    }

    /// A non-blank description tagged with this test's scope
    pub fn description(&self, label: &str) -> String {
        format!("{label} [{}]", self.scope.simple())
    }
}
