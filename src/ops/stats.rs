use crate::model::category::Category;
use crate::model::dashboard::Dashboard;

/// Task counts, always computed from the current state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}

impl std::ops::Add for TaskStats {
    type Output = TaskStats;

    fn add(self, rhs: TaskStats) -> TaskStats {
        TaskStats {
            total: self.total + rhs.total,
            completed: self.completed + rhs.completed,
        }
    }
}

pub fn category_stats(category: &Category) -> TaskStats {
    TaskStats {
        total: category.tasks.len(),
        completed: category.completed_count(),
    }
}

/// Totals across every category
pub fn dashboard_stats(dashboard: &Dashboard) -> TaskStats {
    dashboard
        .categories
        .iter()
        .map(category_stats)
        .fold(TaskStats::default(), |acc, s| acc + s)
}
