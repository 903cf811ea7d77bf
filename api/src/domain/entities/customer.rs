//! Customer domain entity

/// Unique identifier for a customer, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub i64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer record
///
/// `id` is `None` until the record has been saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

impl Customer {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id: None,
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
        }
    }

    /// Same record bound to a specific id
    pub fn with_id(self, id: CustomerId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_is_unsaved() {
        let customer = Customer::new("Joe", "Newman");
        assert_eq!(customer.id, None);
        assert_eq!(customer.firstname.as_deref(), Some("Joe"));
        assert_eq!(customer.lastname.as_deref(), Some("Newman"));
    }

    #[test]
    fn with_id_keeps_fields() {
        let customer = Customer::new("Joe", "Newman").with_id(CustomerId(7));
        assert_eq!(customer.id, Some(CustomerId(7)));
        assert_eq!(customer.lastname.as_deref(), Some("Newman"));
    }

    #[test]
    fn customer_id_display() {
        assert_eq!(CustomerId(42).to_string(), "42");
    }
}
