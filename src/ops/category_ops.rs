use crate::model::category::Category;
use crate::model::dashboard::Dashboard;
use crate::ops::ids::IdGenerator;

/// The categories a fresh dashboard starts with: (id, name, color)
pub const DEFAULT_CATEGORIES: [(&str, &str, &str); 6] = [
    ("1", "Client", "#FF6B6B"),
    ("2", "Biz System", "#4ECDC4"),
    ("3", "Web & Funnel", "#45B7D1"),
    ("4", "AI & Tech", "#96CEB4"),
    ("5", "Learning", "#FFEAA7"),
    ("6", "Personal", "#DFE6E9"),
];

/// Build the default dashboard: six preset categories, no tasks.
pub fn default_dashboard() -> Dashboard {
    Dashboard::new(
        DEFAULT_CATEGORIES
            .iter()
            .map(|(id, name, color)| Category::new(*id, *name, *color))
            .collect(),
    )
}

/// A random `#rrggbb` color (lowercase, always six digits).
pub fn random_color() -> String {
    format!("#{:06x}", rand::random::<u32>() & 0x00FF_FFFF)
}

/// Check for `#` followed by exactly six hex digits.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Append a new empty category with a random color. Returns its id.
///
/// The name is taken as given; trimming and the non-empty check belong to the
/// caller collecting the input.
pub fn add_category(dashboard: &mut Dashboard, ids: &mut IdGenerator, name: &str) -> String {
    let id = ids.next_id();
    dashboard
        .categories
        .push(Category::new(id.clone(), name, random_color()));
    id
}

/// Remove a category and every task it owns. Returns the removed category,
/// or `None` if no category has that id.
pub fn delete_category(dashboard: &mut Dashboard, category_id: &str) -> Option<Category> {
    let idx = dashboard
        .categories
        .iter()
        .position(|c| c.id == category_id)?;
    Some(dashboard.categories.remove(idx))
}
