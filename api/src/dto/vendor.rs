//! Vendor DTOs and mapper

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Vendor, VendorId};

/// Base path of the vendor resource
pub const BASE_URL: &str = "/api/v1/vendors";

pub fn vendor_url(id: VendorId) -> String {
    format!("{}/{}", BASE_URL, id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorDto {
    pub name: Option<String>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub vendor_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VendorListDto {
    pub vendors: Vec<VendorDto>,
}

impl VendorDto {
    pub fn into_entity(self) -> Vendor {
        Vendor {
            id: None,
            name: self.name,
        }
    }

    pub fn merge_into(self, vendor: Vendor) -> Vendor {
        Vendor {
            name: self.name.or(vendor.name),
            ..vendor
        }
    }
}

impl From<Vendor> for VendorDto {
    fn from(vendor: Vendor) -> Self {
        VendorDto {
            name: vendor.name,
            vendor_url: vendor.id.map(vendor_url),
        }
    }
}
