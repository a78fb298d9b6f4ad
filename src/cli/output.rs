use serde::Serialize;

use crate::model::category::Category;
use crate::model::dashboard::Dashboard;
use crate::model::task::Task;
use crate::ops::stats::{TaskStats, category_stats, dashboard_stats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskJson {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
}

#[derive(Serialize)]
pub struct CategoryJson {
    pub id: String,
    pub name: String,
    pub color: String,
    pub stats: StatsJson,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct DashboardJson {
    pub stats: StatsJson,
    pub categories: Vec<CategoryJson>,
}

#[derive(Serialize)]
pub struct CategoryStatsJson {
    pub id: String,
    pub name: String,
    pub stats: StatsJson,
}

#[derive(Serialize)]
pub struct StatsReportJson {
    pub totals: StatsJson,
    pub categories: Vec<CategoryStatsJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.clone(),
        text: task.text.clone(),
        completed: task.completed,
        created_at: task.created_at,
    }
}

pub fn stats_to_json(stats: TaskStats) -> StatsJson {
    StatsJson {
        total: stats.total,
        completed: stats.completed,
    }
}

pub fn category_to_json(category: &Category) -> CategoryJson {
    CategoryJson {
        id: category.id.clone(),
        name: category.name.clone(),
        color: category.color.clone(),
        stats: stats_to_json(category_stats(category)),
        tasks: category.tasks.iter().map(task_to_json).collect(),
    }
}

pub fn dashboard_to_json(dashboard: &Dashboard) -> DashboardJson {
    DashboardJson {
        stats: stats_to_json(dashboard_stats(dashboard)),
        categories: dashboard.categories.iter().map(category_to_json).collect(),
    }
}

pub fn stats_report_json(dashboard: &Dashboard) -> StatsReportJson {
    StatsReportJson {
        totals: stats_to_json(dashboard_stats(dashboard)),
        categories: dashboard
            .categories
            .iter()
            .map(|c| CategoryStatsJson {
                id: c.id.clone(),
                name: c.name.clone(),
                stats: stats_to_json(category_stats(c)),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// `3 of 5 tasks completed`
pub fn format_totals(stats: TaskStats) -> String {
    format!("{} of {} tasks completed", stats.completed, stats.total)
}

/// One task: `  [x] 1718000000000  Call client`
pub fn format_task_line(task: &Task) -> String {
    format!("  [{}] {}  {}", task.checkbox_char(), task.id, task.text)
}

/// Category header: `Client (1) #FF6B6B  1 of 2 completed`
pub fn format_category_header(category: &Category) -> String {
    let stats = category_stats(category);
    format!(
        "{} ({}) {}  {} of {} completed",
        category.name, category.id, category.color, stats.completed, stats.total
    )
}

/// A category and its tasks
pub fn format_category(category: &Category) -> String {
    let mut lines = vec![format_category_header(category)];
    if category.tasks.is_empty() {
        lines.push("  (no tasks)".to_string());
    } else {
        lines.extend(category.tasks.iter().map(format_task_line));
    }
    lines.join("\n")
}

/// The whole dashboard: totals line, then every category
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    if dashboard.is_empty() {
        return "No categories yet. Add one with `dash category add <NAME>`.".to_string();
    }
    let mut blocks = vec![format_totals(dashboard_stats(dashboard))];
    blocks.extend(dashboard.categories.iter().map(format_category));
    blocks.join("\n\n")
}

/// Totals followed by one line per category
pub fn format_stats(dashboard: &Dashboard) -> String {
    let mut lines = vec![format_totals(dashboard_stats(dashboard))];
    let width = dashboard
        .categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    for c in &dashboard.categories {
        let s = category_stats(c);
        lines.push(format!(
            "  {:<width$}  {}/{}",
            c.name,
            s.completed,
            s.total,
            width = width
        ));
    }
    lines.join("\n")
}
