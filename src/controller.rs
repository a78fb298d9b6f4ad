use crate::io::persist::Persistence;
use crate::io::storage::StorageSlot;
use crate::model::category::Category;
use crate::model::dashboard::Dashboard;
use crate::model::task::{Direction, Task};
use crate::ops::ids::{IdGenerator, now_millis};
use crate::ops::stats::{TaskStats, dashboard_stats};
use crate::ops::{category_ops, task_ops};

/// Owner of the dashboard state.
///
/// Front ends read the state through [`DashboardController::dashboard`] and
/// change it only through the mutation methods. Each mutation runs to
/// completion and is then written to storage, unless the dashboard is empty:
/// an empty dashboard is never persisted, so deleting every category leaves
/// the last non-empty save in place.
///
/// Unknown ids are not errors. Mutations report whether anything happened
/// through their return value and otherwise leave the state untouched.
#[derive(Debug)]
pub struct DashboardController<S: StorageSlot> {
    dashboard: Dashboard,
    persistence: Persistence<S>,
    ids: IdGenerator,
    seeded: bool,
}

impl<S: StorageSlot> DashboardController<S> {
    /// Load the saved dashboard, or start from the default categories when
    /// nothing usable is stored. The starting state is saved right away.
    pub fn open(persistence: Persistence<S>) -> Self {
        let (dashboard, seeded) = match persistence.load() {
            Some(dashboard) => (dashboard, false),
            None => {
                tracing::debug!("starting from default categories");
                (category_ops::default_dashboard(), true)
            }
        };
        let mut controller = DashboardController {
            ids: IdGenerator::seeded_from(&dashboard),
            dashboard,
            persistence,
            seeded,
        };
        controller.persist();
        controller
    }

    /// Current state snapshot
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Whether the default categories were used because nothing was stored
    pub fn seeded_defaults(&self) -> bool {
        self.seeded
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Total and completed task counts, computed from the current state.
    pub fn stats(&self) -> TaskStats {
        dashboard_stats(&self.dashboard)
    }

    pub fn add_category(&mut self, name: &str) -> String {
        let id = category_ops::add_category(&mut self.dashboard, &mut self.ids, name);
        self.persist();
        id
    }

    /// Delete a category and all its tasks. The caller is expected to have
    /// confirmed this with the user.
    pub fn delete_category(&mut self, category_id: &str) -> Option<Category> {
        let removed = category_ops::delete_category(&mut self.dashboard, category_id);
        self.persist();
        removed
    }

    pub fn add_task(&mut self, category_id: &str, text: &str) -> Option<String> {
        let id = task_ops::add_task(
            &mut self.dashboard,
            &mut self.ids,
            category_id,
            text,
            now_millis(),
        );
        self.persist();
        id
    }

    pub fn toggle_task(&mut self, category_id: &str, task_id: &str) -> Option<bool> {
        let completed = task_ops::toggle_task(&mut self.dashboard, category_id, task_id);
        self.persist();
        completed
    }

    pub fn delete_task(&mut self, category_id: &str, task_id: &str) -> Option<Task> {
        let removed = task_ops::delete_task(&mut self.dashboard, category_id, task_id);
        self.persist();
        removed
    }

    pub fn move_task(&mut self, category_id: &str, task_id: &str, direction: Direction) -> bool {
        let moved = task_ops::move_task(&mut self.dashboard, category_id, task_id, direction);
        self.persist();
        moved
    }

    fn persist(&mut self) {
        if self.dashboard.is_empty() {
            tracing::debug!("dashboard is empty; keeping previous save");
            return;
        }
        self.persistence.save(&self.dashboard);
    }
}
