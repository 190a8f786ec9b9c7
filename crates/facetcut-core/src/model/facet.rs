use serde::{Deserialize, Serialize};

/// Reserved all-zero address used as the target of `Remove` cuts
pub const ADDRESS_ZERO: &str = "0x0000000000000000000000000000000000000000";

/// Facet contract address as a hex string
///
/// Comparison is exact string equality. No case normalisation is applied, so
/// the checksummed and lowercase spellings of one address are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create an address from any string (no validation)
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The reserved zero address
    pub fn zero() -> Self {
        Self(ADDRESS_ZERO.to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Function selector as a hex string (bytes4 on chain)
///
/// Like [`Address`], compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A deployed facet and the function selectors it serves
///
/// Field names serialise in the camelCase shape returned by a diamond loupe's
/// `facets()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub facet_address: Address,
    pub function_selectors: Vec<Selector>,
}

impl Facet {
    /// Create a facet from an address and its selectors
    pub fn new<A, I, S>(facet_address: A, function_selectors: I) -> Self
    where
        A: Into<Address>,
        I: IntoIterator<Item = S>,
        S: Into<Selector>,
    {
        Self {
            facet_address: facet_address.into(),
            function_selectors: function_selectors.into_iter().map(Into::into).collect(),
        }
    }
}
