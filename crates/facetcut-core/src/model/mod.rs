pub mod facet;
pub mod facet_cut;

pub use facet::{Address, Facet, Selector, ADDRESS_ZERO};
pub use facet_cut::{FacetCut, FacetCutAction};
