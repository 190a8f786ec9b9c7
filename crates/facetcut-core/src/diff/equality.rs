//! Diamond equality.
//!
//! Two facet lists are equal when they route every selector to the same
//! address. Facet order and selector order never matter.

use std::time::Instant;

use crate::errors::Result;
use crate::model::Facet;
use crate::routes::RoutingTable;
use crate::rules::validation;
use crate::{log_op_end, log_op_error, log_op_start};

/// Check two routing tables for equivalence without building a cut
///
/// Stops at the first selector that is missing or routed differently, in
/// either direction. Agrees with `compute_cut(a, b).is_empty()`.
pub fn routes_equal(a: &RoutingTable, b: &RoutingTable) -> bool {
    a.iter().all(|(selector, address)| b.get(selector) == Some(address))
        && b.iter().all(|(selector, _)| a.contains(selector))
}

/// Check whether two diamonds expose the same functions through the same facets
///
/// # Errors
///
/// - `Validation`: either list failed validation. Equality is not defined
///   for invalid input.
pub fn diamond_equals(current_facets: &[Facet], model_facets: &[Facet]) -> Result<bool> {
    log_op_start!(
        "diamond_equals",
        current_len = current_facets.len() as u64,
        model_len = model_facets.len() as u64
    );
    let start = Instant::now();

    let equal = diamond_equals_impl(current_facets, model_facets).map_err(|e| {
        log_op_error!(
            "diamond_equals",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "diamond_equals",
        duration_ms = start.elapsed().as_millis() as u64,
        equal = equal
    );

    Ok(equal)
}

fn diamond_equals_impl(current_facets: &[Facet], model_facets: &[Facet]) -> Result<bool> {
    validation::validate_pair(current_facets, model_facets)?;

    let current_routes = RoutingTable::from_facets(current_facets);
    let model_routes = RoutingTable::from_facets(model_facets);

    Ok(routes_equal(&current_routes, &model_routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::compute_cut;

    const A: &str = "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9";
    const B: &str = "0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9";

    #[test]
    fn test_extra_selector_on_either_side_is_unequal() {
        let small = RoutingTable::from_facets(&[Facet::new(A, ["0x01"])]);
        let large = RoutingTable::from_facets(&[Facet::new(A, ["0x01", "0x02"])]);

        assert!(!routes_equal(&small, &large));
        assert!(!routes_equal(&large, &small));
    }

    #[test]
    fn test_different_address_is_unequal() {
        let a = RoutingTable::from_facets(&[Facet::new(A, ["0x01"])]);
        let b = RoutingTable::from_facets(&[Facet::new(B, ["0x01"])]);
        assert!(!routes_equal(&a, &b));
    }

    #[test]
    fn test_agrees_with_compute_cut() {
        let cases = [
            (vec![Facet::new(A, ["0x01"])], vec![Facet::new(A, ["0x01"])]),
            (vec![Facet::new(A, ["0x01"])], vec![Facet::new(B, ["0x01"])]),
            (vec![], vec![Facet::new(A, ["0x01"])]),
            (vec![], vec![]),
        ];
        for (current, model) in cases {
            let a = RoutingTable::from_facets(&current);
            let b = RoutingTable::from_facets(&model);
            assert_eq!(routes_equal(&a, &b), compute_cut(&a, &b).is_empty());
        }
    }

    #[test]
    fn test_empty_lists_are_equal() {
        assert!(diamond_equals(&[], &[]).unwrap());
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let model = vec![Facet::new(A, ["0x01"])];
        assert!(diamond_equals(&[Facet::new(A, ["bad"])], &model).is_err());
    }
}
