pub mod catalog;
pub mod raw_row;
pub mod sexagesimal;

pub use catalog::*;
pub use raw_row::{CatalogRow, RawStarRow};
pub use sexagesimal::{format_dec_dms, format_ra_hms, parse_dec, parse_ra};
