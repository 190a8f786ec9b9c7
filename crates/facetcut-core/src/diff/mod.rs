//! Facet reconciliation.
//!
//! Compares a diamond's current facets against a model (desired) facet list
//! and produces the diamond cut that turns one into the other.
//!
//! ## Entry points
//!
//! ```ignore
//! use facetcut_core::diff::{diamond_equals, ensure_diamond_facets};
//!
//! let cut = ensure_diamond_facets(&current, &model)?;
//! let same = diamond_equals(&current, &model)?;
//! ```
//!
//! ## Guarantees
//!
//! - **Grouping**: at most one cut entry per `(facet address, action)` pair.
//! - **Ordering**: Replace entries (in discovery order over current routes),
//!   then Add entries (in discovery order over model routes), then a single
//!   Remove entry targeting the zero address.
//! - **Determinism**: identical inputs produce identical cut lists.
//! - **No partial results**: invalid input fails before any diffing.

pub mod engine;
pub mod equality;

pub use engine::{compute_cut, ensure_diamond_facets};
pub use equality::{diamond_equals, routes_equal};
