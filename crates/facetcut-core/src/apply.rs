//! Diamond cut application
//!
//! Replays a cut list against a routing table with the same rules a diamond
//! enforces in `diamondCut`, so a computed cut can be checked or previewed
//! before it is submitted.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: either every cut entry applies and a new table is
//!   returned, or an error is returned and the input table is untouched
//! - **No panics**: invalid cuts return typed errors
//!
//! ## Example
//!
//! ```
//! use facetcut_core::apply::apply_cuts;
//! use facetcut_core::model::{Facet, FacetCut, FacetCutAction};
//! use facetcut_core::routes::RoutingTable;
//!
//! let routes = RoutingTable::from_facets(&[Facet::new(
//!     "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9",
//!     ["0xcdffacc6"],
//! )]);
//! let cut = vec![FacetCut::new(
//!     "0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9",
//!     FacetCutAction::Add,
//!     ["0x52ef6b2c"],
//! )];
//!
//! let next = apply_cuts(&routes, &cut).unwrap();
//! assert_eq!(next.len(), 2);
//! ```

use std::time::Instant;

use crate::errors::{FacetCutError, Result};
use crate::model::{Facet, FacetCut, FacetCutAction};
use crate::routes::RoutingTable;
use crate::rules::formats::is_zero_address;
use crate::rules::validation::{self, FacetsLabel};
use crate::{log_op_end, log_op_error, log_op_start};

/// Apply a cut list to a routing table, returning the resulting table
///
/// Entries are applied in order, so later entries see the effect of earlier
/// ones. Per entry:
///
/// * `Add` - target must not be zero; every selector must be unrouted
/// * `Replace` - target must not be zero; every selector must be routed to a
///   different facet
/// * `Remove` - target must be zero; every selector must be routed
///
/// # Errors
///
/// `EmptyCut`, `ZeroAddressTarget` and `RemoveFacetAddressNotZero` for
/// malformed entries; `SelectorAlreadyExists`, `SelectorNotFound` and
/// `ReplaceSameFacet` for entries that conflict with the table.
pub fn apply_cuts(routes: &RoutingTable, cuts: &[FacetCut]) -> Result<RoutingTable> {
    log_op_start!(
        "apply_cuts",
        routes_len = routes.len() as u64,
        cut_len = cuts.len() as u64
    );
    let start = Instant::now();

    let next = apply_cuts_impl(routes, cuts).map_err(|e| {
        log_op_error!(
            "apply_cuts",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "apply_cuts",
        duration_ms = start.elapsed().as_millis() as u64,
        routes_len = next.len() as u64
    );

    Ok(next)
}

fn apply_cuts_impl(routes: &RoutingTable, cuts: &[FacetCut]) -> Result<RoutingTable> {
    let mut next = routes.clone();
    for (index, cut) in cuts.iter().enumerate() {
        apply_one(&mut next, index, cut)?;
    }
    Ok(next)
}

fn apply_one(table: &mut RoutingTable, index: usize, cut: &FacetCut) -> Result<()> {
    if cut.function_selectors.is_empty() {
        return Err(FacetCutError::EmptyCut { index });
    }

    let zero_target = is_zero_address(cut.facet_address.as_str());

    match cut.action {
        FacetCutAction::Add => {
            if zero_target {
                return Err(FacetCutError::ZeroAddressTarget {
                    index,
                    action: cut.action,
                });
            }
            for selector in &cut.function_selectors {
                if table.contains(selector) {
                    return Err(FacetCutError::SelectorAlreadyExists {
                        index,
                        selector: selector.clone(),
                    });
                }
                table.insert(selector.clone(), cut.facet_address.clone());
            }
        }
        FacetCutAction::Replace => {
            if zero_target {
                return Err(FacetCutError::ZeroAddressTarget {
                    index,
                    action: cut.action,
                });
            }
            for selector in &cut.function_selectors {
                match table.get(selector) {
                    None => {
                        return Err(FacetCutError::SelectorNotFound {
                            index,
                            selector: selector.clone(),
                        })
                    }
                    Some(existing) if existing == &cut.facet_address => {
                        return Err(FacetCutError::ReplaceSameFacet {
                            index,
                            selector: selector.clone(),
                            facet_address: existing.clone(),
                        })
                    }
                    Some(_) => {
                        table.insert(selector.clone(), cut.facet_address.clone());
                    }
                }
            }
        }
        FacetCutAction::Remove => {
            if !zero_target {
                return Err(FacetCutError::RemoveFacetAddressNotZero {
                    index,
                    facet_address: cut.facet_address.clone(),
                });
            }
            for selector in &cut.function_selectors {
                if table.remove(selector).is_none() {
                    return Err(FacetCutError::SelectorNotFound {
                        index,
                        selector: selector.clone(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        component = module_path!(),
        index = index as u64,
        action = cut.action.as_str(),
        selectors = cut.function_selectors.len() as u64,
        "applied cut entry"
    );

    Ok(())
}

/// Apply a cut list to a facet list, returning the regrouped facet list
///
/// The facet list is validated first (as `currentFacets`). The result has one
/// facet per address, see [`RoutingTable::to_facets`].
///
/// # Errors
///
/// `Validation` if `facets` is invalid, otherwise as [`apply_cuts`].
pub fn apply_cuts_to_facets(facets: &[Facet], cuts: &[FacetCut]) -> Result<Vec<Facet>> {
    let errors = validation::validate_facets(facets, FacetsLabel::Current);
    if !errors.is_empty() {
        return Err(FacetCutError::Validation { errors });
    }

    let routes = RoutingTable::from_facets(facets);
    Ok(apply_cuts(&routes, cuts)?.to_facets())
}
