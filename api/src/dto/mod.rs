//! Data transfer objects
//!
//! External JSON representations of the domain entities, plus the pure
//! conversions between the two. A DTO carries a resource URL instead of the
//! numeric id; the URL is only present once the record has been stored.

pub mod category;
pub mod customer;
pub mod vendor;

pub use category::{CategoryDto, CategoryListDto};
pub use customer::{CustomerDto, CustomerListDto};
pub use vendor::{VendorDto, VendorListDto};
