use std::collections::HashSet;

use crate::model::Facet;

/// Find facets whose address was already used by an earlier facet
///
/// Returns the facet index of every repeat occurrence; the first occurrence
/// is never reported.
pub fn find_duplicate_facet_addresses(facets: &[Facet]) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for (i, facet) in facets.iter().enumerate() {
        if !seen.insert(facet.facet_address.as_str()) {
            duplicates.push(i);
        }
    }

    duplicates
}

/// Find selectors already declared earlier in the list
///
/// Scans every facet in order, so a selector repeated within one facet and a
/// selector shared across facets are both caught. Returns
/// (facet_index, selector_index) tuples for each repeat occurrence.
pub fn find_duplicate_function_selectors(facets: &[Facet]) -> Vec<(usize, usize)> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for (i, facet) in facets.iter().enumerate() {
        for (j, selector) in facet.function_selectors.iter().enumerate() {
            if !seen.insert(selector.as_str()) {
                duplicates.push((i, j));
            }
        }
    }

    duplicates
}
