//! # japi Core
//!
//! JSON:API document records, `links`/`meta` handling and offset pagination
//! links for list responses.
//!
//! ```
//! use japi_core::{OffsetPagination, PageLink};
//!
//! let links = OffsetPagination::new("/articles?sort=-created", 10, 42)
//!     .generate()
//!     .expect("more than one page");
//!
//! assert_eq!(
//!     links.href(PageLink::Next),
//!     Some("/articles?sort=-created&page[limit]=10&page[offset]=10")
//! );
//! ```

pub mod document;
pub mod error;
pub mod links;
pub mod pagination;
pub mod query;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use document::*;
pub use error::*;
pub use links::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;
