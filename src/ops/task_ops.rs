use crate::model::dashboard::Dashboard;
use crate::model::task::{Direction, Task};
use crate::ops::ids::IdGenerator;

// Every operation here is total: an unknown category or task id leaves the
// dashboard untouched and is reported through the return value only.

/// Append a new task to the end of a category. Returns the new task id, or
/// `None` if the category does not exist.
pub fn add_task(
    dashboard: &mut Dashboard,
    ids: &mut IdGenerator,
    category_id: &str,
    text: &str,
    created_at: i64,
) -> Option<String> {
    let category = dashboard.find_category_mut(category_id)?;
    let id = ids.next_id_at(created_at);
    category
        .tasks
        .push(Task::new(id.clone(), text.to_string(), created_at));
    Some(id)
}

/// Flip a task's completed flag. Returns the new value.
pub fn toggle_task(dashboard: &mut Dashboard, category_id: &str, task_id: &str) -> Option<bool> {
    let task = dashboard
        .find_category_mut(category_id)?
        .find_task_mut(task_id)?;
    task.completed = !task.completed;
    Some(task.completed)
}

/// Remove a task from its category. Returns the removed task.
pub fn delete_task(dashboard: &mut Dashboard, category_id: &str, task_id: &str) -> Option<Task> {
    let category = dashboard.find_category_mut(category_id)?;
    let idx = category.task_position(task_id)?;
    Some(category.tasks.remove(idx))
}

/// Swap a task with its neighbour in `direction`.
///
/// Returns `true` if two tasks were swapped. Moving the first task up or the
/// last task down does nothing; there is no wrap-around.
pub fn move_task(
    dashboard: &mut Dashboard,
    category_id: &str,
    task_id: &str,
    direction: Direction,
) -> bool {
    let Some(category) = dashboard.find_category_mut(category_id) else {
        return false;
    };
    let Some(idx) = category.task_position(task_id) else {
        return false;
    };
    let target = match direction {
        Direction::Up => idx.checked_sub(1),
        Direction::Down => Some(idx + 1).filter(|&t| t < category.tasks.len()),
    };
    match target {
        Some(t) => {
            category.tasks.swap(idx, t);
            true
        }
        None => false,
    }
}
