//! Selector routing tables
//!
//! A [`RoutingTable`] is the flattened `selector -> facet address` view of a
//! facet list. Iteration follows insertion order, which is the order selectors
//! were first met in the source list; the reconciler's output order depends
//! on it.

use indexmap::IndexMap;

use crate::model::{Address, Facet, Selector};

/// Insertion-ordered mapping from selector to the facet that serves it
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    routes: IndexMap<Selector, Address>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self {
            routes: IndexMap::new(),
        }
    }

    /// Flatten a facet list into its routing table
    ///
    /// If a selector appears more than once the last facet wins, keeping the
    /// position of the first occurrence. Validated lists never hit that case.
    pub fn from_facets(facets: &[Facet]) -> Self {
        let mut table = Self::new();
        for facet in facets {
            for selector in &facet.function_selectors {
                table.insert(selector.clone(), facet.facet_address.clone());
            }
        }
        table
    }

    /// Address serving `selector`, if routed
    pub fn get(&self, selector: &Selector) -> Option<&Address> {
        self.routes.get(selector)
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.routes.contains_key(selector)
    }

    /// Route `selector` to `address`, returning the previous address
    ///
    /// Overwriting keeps the selector's original position.
    pub fn insert(&mut self, selector: Selector, address: Address) -> Option<Address> {
        self.routes.insert(selector, address)
    }

    /// Drop the route for `selector`, preserving the order of the rest
    pub fn remove(&mut self, selector: &Selector) -> Option<Address> {
        self.routes.shift_remove(selector)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate routes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &Address)> {
        self.routes.iter()
    }

    /// Regroup routes into a facet list
    ///
    /// One facet per distinct address, ordered by the first selector routed to
    /// it; each facet's selectors keep table order.
    pub fn to_facets(&self) -> Vec<Facet> {
        let mut grouped: IndexMap<&Address, Vec<Selector>> = IndexMap::new();
        for (selector, address) in &self.routes {
            grouped.entry(address).or_default().push(selector.clone());
        }

        grouped
            .into_iter()
            .map(|(address, function_selectors)| Facet {
                facet_address: address.clone(),
                function_selectors,
            })
            .collect()
    }
}

/// Mapping equality; insertion order is ignored
impl PartialEq for RoutingTable {
    fn eq(&self, other: &Self) -> bool {
        self.routes == other.routes
    }
}

impl Eq for RoutingTable {}

impl FromIterator<(Selector, Address)> for RoutingTable {
    fn from_iter<T: IntoIterator<Item = (Selector, Address)>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RoutingTable {
    type Item = (&'a Selector, &'a Address);
    type IntoIter = indexmap::map::Iter<'a, Selector, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
