//! facetcut core - diamond facet reconciliation
//!
//! This crate computes the diamond cut needed to move an upgradeable
//! "diamond" contract from its current facets to a desired (model) facet
//! list, and checks whether two facet lists are equivalent:
//! - Facet / FacetCut data model with loupe- and `diamondCut`-shaped JSON
//! - Structural validation that reports every problem at once
//! - Insertion-ordered selector routing tables
//! - The reconciler (grouped Replace / Add / Remove cut entries)
//! - Cut application for previewing and checking a computed cut
//!
//! Everything here is pure computation over caller-supplied values; nothing
//! talks to a chain.

pub mod apply;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod routes;
pub mod rules;

// Re-export commonly used types
pub use apply::{apply_cuts, apply_cuts_to_facets};
pub use diff::{compute_cut, diamond_equals, ensure_diamond_facets, routes_equal};
pub use errors::{ExError, ExErrorKind, FacetCutError, Result, ValidationError, ValidationErrorKind};
pub use model::{Address, Facet, FacetCut, FacetCutAction, Selector, ADDRESS_ZERO};
pub use routes::RoutingTable;
pub use rules::{validate_facets, validate_pair, FacetsLabel};
