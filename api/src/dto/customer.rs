//! Customer DTOs and mapper

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Customer, CustomerId};

/// Base path of the customer resource
pub const BASE_URL: &str = "/api/v1/customers";

/// Canonical URL of a stored customer
pub fn customer_url(id: CustomerId) -> String {
    format!("{}/{}", BASE_URL, id)
}

/// Customer as seen by API clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Output only; a URL sent by the client is ignored
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub customer_url: Option<String>,
}

/// Response body for listing customers
#[derive(Debug, Serialize)]
pub struct CustomerListDto {
    pub customers: Vec<CustomerDto>,
}

impl CustomerDto {
    /// Unsaved entity carrying this DTO's fields
    pub fn into_entity(self) -> Customer {
        Customer {
            id: None,
            firstname: self.firstname,
            lastname: self.lastname,
        }
    }

    /// Overwrite the fields of `customer` that are set in this DTO
    pub fn merge_into(self, customer: Customer) -> Customer {
        Customer {
            firstname: self.firstname.or(customer.firstname),
            lastname: self.lastname.or(customer.lastname),
            ..customer
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        CustomerDto {
            firstname: customer.firstname,
            lastname: customer.lastname,
            customer_url: customer.id.map(customer_url),
        }
    }
}
