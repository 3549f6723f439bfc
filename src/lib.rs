//! Response models for the Zillow Web Services API.
//!
//! The API answers every call with an XML body: a status envelope and,
//! on success, a payload. [`ResponseModel::parse`] turns one of those
//! bodies into a typed model, leaving every payload field unset when
//! the envelope reports a failure. Values stay as the text the API
//! sent; callers decide what to convert.
//!
//! ```
//! use rustillow::{ResponseModel, UpdatedPropertyDetails};
//!
//! let body = r#"
//! <UpdatedPropertyDetails:updatedPropertyDetails
//!     xmlns:UpdatedPropertyDetails="http://www.zillow.com/static/xsd/UpdatedPropertyDetails.xsd">
//!   <message><text>Request successfully processed</text><code>0</code></message>
//!   <response>
//!     <zpid>48749425</zpid>
//!     <price>1290000</price>
//!   </response>
//! </UpdatedPropertyDetails:updatedPropertyDetails>"#;
//!
//! let details = UpdatedPropertyDetails::parse(body)?;
//! assert!(details.is_success());
//! assert_eq!(details.zpid.as_deref(), Some("48749425"));
//! assert_eq!(details.price.as_deref(), Some("1290000"));
//! # Ok::<(), rustillow::ParseError>(())
//! ```

mod errors;
pub mod models;
pub mod xml;

pub use errors::ParseError;
pub use models::capabilities::{Address, Images};
pub use models::{PageViews, ResponseModel, ResponseStatus, UpdatedPropertyDetails};
