//! Vendor domain entity

/// Unique identifier for a vendor, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorId(pub i64);

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vendor record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vendor {
    pub id: Option<VendorId>,
    pub name: Option<String>,
}

impl Vendor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn with_id(self, id: VendorId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
