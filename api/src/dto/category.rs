//! Category DTOs and mapper

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, CategoryId};

/// Base path of the category resource
pub const BASE_URL: &str = "/api/v1/categories";

pub fn category_url(id: CategoryId) -> String {
    format!("{}/{}", BASE_URL, id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: Option<String>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub category_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListDto {
    pub categories: Vec<CategoryDto>,
}

impl CategoryDto {
    pub fn into_entity(self) -> Category {
        Category {
            id: None,
            name: self.name,
        }
    }

    pub fn merge_into(self, category: Category) -> Category {
        Category {
            name: self.name.or(category.name),
            ..category
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        CategoryDto {
            name: category.name,
            category_url: category.id.map(category_url),
        }
    }
}
