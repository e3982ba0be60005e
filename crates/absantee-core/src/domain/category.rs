//! Category domain types.

use serde::{Deserialize, Serialize};

use crate::schema::ColumnValue;

/// A persisted category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub description: String,
    pub active: bool,
}

/// Data for creating a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub description: String,
    pub active: bool,
}

impl NewCategory {
    /// Column values in `schema::CATEGORY` order.
    pub fn column_values(&self) -> Vec<ColumnValue> {
        vec![self.description.as_str().into(), self.active.into()]
    }

    /// An active category with the given description.
    pub fn active(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            active: true,
        }
    }
}

/// Partial update for an existing category.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl Category {
    /// Column values in `schema::CATEGORY` order.
    pub fn column_values(&self) -> Vec<ColumnValue> {
        vec![self.description.as_str().into(), self.active.into()]
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, update: CategoryUpdate) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_update() {
        let mut category = Category {
            id: 1,
            description: "Books".to_string(),
            active: true,
        };

        category.apply(CategoryUpdate {
            active: Some(false),
            ..Default::default()
        });

        assert_eq!(category.description, "Books");
        assert!(!category.active);
    }
}
