pub mod capabilities;
mod response;
mod updated_property_details;

pub use response::{ResponseModel, ResponseStatus};
pub use updated_property_details::{PageViews, UpdatedPropertyDetails};
