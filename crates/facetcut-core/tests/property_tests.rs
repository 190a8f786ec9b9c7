//! Property tests over randomly generated valid facet lists.

mod common;

use common::{facets_from_assignment, permuted};
use facetcut_core::{
    apply_cuts, diamond_equals, ensure_diamond_facets, FacetCutAction, RoutingTable, ADDRESS_ZERO,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn assignment() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..16usize, 0..4usize), 0..20)
}

proptest! {
    #[test]
    fn prop_equals_is_reflexive_under_permutation(a in assignment()) {
        let facets = facets_from_assignment(&a);
        prop_assert!(diamond_equals(&facets, &facets).unwrap());
        prop_assert!(diamond_equals(&facets, &permuted(&facets)).unwrap());
        prop_assert!(ensure_diamond_facets(&facets, &permuted(&facets)).unwrap().is_empty());
    }

    #[test]
    fn prop_equals_agrees_with_empty_cut(a in assignment(), b in assignment()) {
        let current = facets_from_assignment(&a);
        let model = facets_from_assignment(&b);

        let cut = ensure_diamond_facets(&current, &model).unwrap();
        prop_assert_eq!(diamond_equals(&current, &model).unwrap(), cut.is_empty());
    }

    #[test]
    fn prop_applying_cut_reaches_model(a in assignment(), b in assignment()) {
        let current = facets_from_assignment(&a);
        let model = facets_from_assignment(&b);

        let cut = ensure_diamond_facets(&current, &model).unwrap();
        let applied = apply_cuts(&RoutingTable::from_facets(&current), &cut).unwrap();
        prop_assert_eq!(applied, RoutingTable::from_facets(&model));
    }

    #[test]
    fn prop_one_entry_per_address_and_action(a in assignment(), b in assignment()) {
        let cut = ensure_diamond_facets(&facets_from_assignment(&a), &facets_from_assignment(&b))
            .unwrap();

        let mut seen = HashSet::new();
        for entry in &cut {
            prop_assert!(seen.insert((entry.facet_address.clone(), entry.action)));
            prop_assert!(!entry.function_selectors.is_empty());
        }
    }

    #[test]
    fn prop_single_trailing_remove_at_zero(a in assignment(), b in assignment()) {
        let cut = ensure_diamond_facets(&facets_from_assignment(&a), &facets_from_assignment(&b))
            .unwrap();

        let removes: Vec<usize> = cut
            .iter()
            .enumerate()
            .filter(|(_, e)| e.action == FacetCutAction::Remove)
            .map(|(i, _)| i)
            .collect();
        prop_assert!(removes.len() <= 1);
        if let Some(&i) = removes.first() {
            prop_assert_eq!(i, cut.len() - 1);
            prop_assert_eq!(cut[i].facet_address.as_str(), ADDRESS_ZERO);
        }
    }

    #[test]
    fn prop_replace_entries_precede_add_entries(a in assignment(), b in assignment()) {
        let cut = ensure_diamond_facets(&facets_from_assignment(&a), &facets_from_assignment(&b))
            .unwrap();

        let actions: Vec<FacetCutAction> = cut.iter().map(|e| e.action).collect();
        let first_add = actions.iter().position(|a| *a == FacetCutAction::Add);
        let last_replace = actions.iter().rposition(|a| *a == FacetCutAction::Replace);
        if let (Some(add), Some(replace)) = (first_add, last_replace) {
            prop_assert!(replace < add);
        }
    }
}
