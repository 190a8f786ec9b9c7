//! Diamond cut computation.
//!
//! [`ensure_diamond_facets`] validates both facet lists, flattens them into
//! routing tables and hands those to [`compute_cut`].

use std::time::Instant;

use crate::errors::Result;
use crate::model::{Address, Facet, FacetCut, FacetCutAction, Selector};
use crate::routes::RoutingTable;
use crate::rules::validation;
use crate::{log_op_end, log_op_error, log_op_start};

/// Append `selector` to the cut entry for `(address, action)`, creating the
/// entry at the end of `cut` if none exists yet.
fn push_grouped(
    cut: &mut Vec<FacetCut>,
    address: &Address,
    action: FacetCutAction,
    selector: &Selector,
) {
    match cut
        .iter()
        .position(|entry| entry.action == action && &entry.facet_address == address)
    {
        Some(idx) => cut[idx].function_selectors.push(selector.clone()),
        None => cut.push(FacetCut {
            facet_address: address.clone(),
            action,
            function_selectors: vec![selector.clone()],
        }),
    }
}

/// Diff two routing tables into a diamond cut
///
/// No validation is performed; callers that already hold routing tables from
/// validated lists can use this directly.
///
/// 1. Walk `current`: selectors missing from `model` are queued for removal;
///    selectors routed elsewhere in `model` go to a Replace entry for the
///    model address.
/// 2. Walk `model`: selectors missing from `current` go to an Add entry for
///    the model address. Selectors present in both were settled in step 1.
/// 3. Queued removals become one trailing Remove entry at the zero address.
pub fn compute_cut(current: &RoutingTable, model: &RoutingTable) -> Vec<FacetCut> {
    let mut cut: Vec<FacetCut> = Vec::new();
    let mut selectors_to_remove: Vec<Selector> = Vec::new();

    for (selector, current_address) in current {
        match model.get(selector) {
            Some(model_address) if model_address == current_address => {}
            Some(model_address) => {
                push_grouped(&mut cut, model_address, FacetCutAction::Replace, selector)
            }
            None => selectors_to_remove.push(selector.clone()),
        }
    }

    for (selector, model_address) in model {
        if !current.contains(selector) {
            push_grouped(&mut cut, model_address, FacetCutAction::Add, selector);
        }
    }

    if !selectors_to_remove.is_empty() {
        tracing::debug!(
            component = module_path!(),
            remove_len = selectors_to_remove.len() as u64,
            "queued selectors for removal"
        );
        cut.push(FacetCut {
            facet_address: Address::zero(),
            action: FacetCutAction::Remove,
            function_selectors: selectors_to_remove,
        });
    }

    cut
}

/// Compute the diamond cut that turns `current_facets` into `model_facets`
///
/// `current_facets` is typically the output of the diamond loupe's
/// `facets()`; `model_facets` is the desired configuration. The returned
/// cut is ready to pass to `diamondCut`.
///
/// # Errors
///
/// - `Validation`: either list failed validation. All errors from both
///   lists are reported together and no diff is computed.
pub fn ensure_diamond_facets(
    current_facets: &[Facet],
    model_facets: &[Facet],
) -> Result<Vec<FacetCut>> {
    log_op_start!(
        "ensure_diamond_facets",
        current_len = current_facets.len() as u64,
        model_len = model_facets.len() as u64
    );
    let start = Instant::now();

    let cut = ensure_diamond_facets_impl(current_facets, model_facets).map_err(|e| {
        log_op_error!(
            "ensure_diamond_facets",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "ensure_diamond_facets",
        duration_ms = start.elapsed().as_millis() as u64,
        cut_len = cut.len() as u64
    );

    Ok(cut)
}

fn ensure_diamond_facets_impl(
    current_facets: &[Facet],
    model_facets: &[Facet],
) -> Result<Vec<FacetCut>> {
    validation::validate_pair(current_facets, model_facets)?;

    let current_routes = RoutingTable::from_facets(current_facets);
    let model_routes = RoutingTable::from_facets(model_facets);

    Ok(compute_cut(&current_routes, &model_routes))
}
