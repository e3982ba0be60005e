//! Category DTOs.

use absantee_core::{Category, CategoryUpdate, NewCategory};
use serde::{Deserialize, Serialize};

/// Category as returned over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub description: String,
    pub active: bool,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            description: c.description,
            active: c.active,
        }
    }
}

/// Request body for creating a category. `active` defaults to true.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(default = "default_active", alias = "Active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            description: req.description,
            active: req.active,
        }
    }
}

/// Request body for updating a category. Omitted fields are unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(default, alias = "Active")]
    pub active: Option<bool>,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self {
            description: req.description,
            active: req.active,
        }
    }
}
