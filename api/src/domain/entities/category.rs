//! Category domain entity

/// Unique identifier for a category, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub id: Option<CategoryId>,
    pub name: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn with_id(self, id: CategoryId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
