use serde::{Deserialize, Serialize};

use super::facet::{Address, Selector};

/// Action taken by one diamond cut entry
///
/// Serialises as its numeric discriminant, matching the on-chain
/// `IDiamondCut.FacetCutAction` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FacetCutAction {
    Add = 0,
    Replace = 1,
    Remove = 2,
}

impl FacetCutAction {
    /// Lowercase name used in log fields and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetCutAction::Add => "add",
            FacetCutAction::Replace => "replace",
            FacetCutAction::Remove => "remove",
        }
    }
}

impl From<FacetCutAction> for u8 {
    fn from(action: FacetCutAction) -> Self {
        action as u8
    }
}

impl TryFrom<u8> for FacetCutAction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FacetCutAction::Add),
            1 => Ok(FacetCutAction::Replace),
            2 => Ok(FacetCutAction::Remove),
            other => Err(format!("unknown facet cut action: {}", other)),
        }
    }
}

impl std::fmt::Display for FacetCutAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a diamond cut: route `function_selectors` per `action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCut {
    pub facet_address: Address,
    pub action: FacetCutAction,
    pub function_selectors: Vec<Selector>,
}

impl FacetCut {
    pub fn new<A, I, S>(facet_address: A, action: FacetCutAction, function_selectors: I) -> Self
    where
        A: Into<Address>,
        I: IntoIterator<Item = S>,
        S: Into<Selector>,
    {
        Self {
            facet_address: facet_address.into(),
            action,
            function_selectors: function_selectors.into_iter().map(Into::into).collect(),
        }
    }
}
