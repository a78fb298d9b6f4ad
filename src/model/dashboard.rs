use serde::{Deserialize, Serialize};

use super::category::Category;

/// The full ordered collection of categories. This is the unit of persistence:
/// it serializes as a bare JSON array of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dashboard {
    pub categories: Vec<Category>,
}

impl Dashboard {
    pub fn new(categories: Vec<Category>) -> Self {
        Dashboard { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn find_category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn find_category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    /// Iterate over every id in the dashboard (categories and tasks)
    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().flat_map(|c| {
            std::iter::once(c.id.as_str()).chain(c.tasks.iter().map(|t| t.id.as_str()))
        })
    }
}
