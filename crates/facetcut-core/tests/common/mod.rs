use facetcut_core::{Facet, FacetCut};

// Hardhat default deployment addresses, EIP-55 checksummed.
pub const ADDR_CF7E: &str = "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9";
pub const ADDR_DC64: &str = "0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9";
pub const ADDR_2279: &str = "0x2279B7A0a67DB372996a5FaB50D91eAA73d2eBe6";
pub const ADDR_8A79: &str = "0x8A791620dd6260079BF849Dc5567aDC3F2FdC318";
pub const ADDR_0165: &str = "0x0165878A594ca255338adfa4d48449f69242Eb8F";
pub const ADDR_9A9F: &str = "0x9A9f2CCfdE556A7E9Ff0848998Aa4a0CFD8863AE";
pub const ADDR_A513: &str = "0xa513E6E4b8f2a923D98304ec87F64353C4D5C853";
pub const ADDR_E7F1: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

/// Build a facet from string literals
#[allow(dead_code)]
pub fn facet(address: &str, selectors: &[&str]) -> Facet {
    Facet::new(address, selectors.iter().copied())
}

/// Build a cut entry from string literals
#[allow(dead_code)]
pub fn cut(address: &str, action: facetcut_core::FacetCutAction, selectors: &[&str]) -> FacetCut {
    FacetCut::new(address, action, selectors.iter().copied())
}

/// Build a valid facet list from (selector index, address index) assignments
///
/// Pools are small so random lists share selectors and addresses often.
/// The first assignment of a selector wins; facets come out in address-pool
/// order with selectors in selector-pool order, none empty.
#[allow(dead_code)]
pub fn facets_from_assignment(assignment: &[(usize, usize)]) -> Vec<Facet> {
    const ADDRESSES: [&str; 4] = [ADDR_CF7E, ADDR_DC64, ADDR_2279, ADDR_8A79];

    let mut owner: [Option<usize>; 16] = [None; 16];
    for &(selector, address) in assignment {
        let slot = &mut owner[selector % 16];
        if slot.is_none() {
            *slot = Some(address % ADDRESSES.len());
        }
    }

    ADDRESSES
        .iter()
        .enumerate()
        .filter_map(|(a, address)| {
            let selectors: Vec<String> = owner
                .iter()
                .enumerate()
                .filter(|(_, o)| **o == Some(a))
                .map(|(s, _)| format!("0x{:08x}", 0xfa00_0000u32 + s as u32))
                .collect();
            if selectors.is_empty() {
                None
            } else {
                Some(Facet::new(*address, selectors))
            }
        })
        .collect()
}

/// Reverse facet order and each facet's selector order
#[allow(dead_code)]
pub fn permuted(facets: &[Facet]) -> Vec<Facet> {
    facets
        .iter()
        .rev()
        .map(|f| {
            let mut f = f.clone();
            f.function_selectors.reverse();
            f
        })
        .collect()
}
