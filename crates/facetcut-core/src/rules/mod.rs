pub mod formats;
pub mod invariants;
pub mod validation;

pub use validation::{validate_facets, validate_pair, FacetsLabel};
