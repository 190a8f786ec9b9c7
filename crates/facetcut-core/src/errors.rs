use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Address, FacetCutAction, Selector};

/// Result type alias using FacetCutError
pub type Result<T> = std::result::Result<T, FacetCutError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable, coarse classification of every failure the crate can report.
/// Each kind maps to a stable error code for programmatic handling, log
/// fields and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// One or both facet lists failed validation
    Validation,
    /// A cut entry conflicts with the routing table it is applied to
    CutConflict,
    /// A cut entry is malformed on its own (empty, wrong address for action)
    InvalidCut,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::CutConflict => "ERR_CUT_CONFLICT",
            ExErrorKind::InvalidCut => "ERR_INVALID_CUT",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus enough context (message and the full
/// validation error list when relevant) to report a failure without
/// access to the originating [`FacetCutError`].
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    message: String,
    validation_errors: Vec<ValidationError>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            message: String::new(),
            validation_errors: Vec::new(),
        }
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the validation errors that caused this failure
    pub fn with_validation_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.validation_errors = errors;
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Validation errors carried by this failure (empty unless `Validation`)
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Machine-readable category of a facet list validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    #[serde(rename = "invalid-address")]
    InvalidAddress,
    #[serde(rename = "zero-address")]
    ZeroAddress,
    #[serde(rename = "empty-functionSelectors")]
    EmptyFunctionSelectors,
    #[serde(rename = "invalid-functionSelector")]
    InvalidFunctionSelector,
    #[serde(rename = "duplicate-facetAddress")]
    DuplicateFacetAddress,
    #[serde(rename = "duplicate-functionSelector")]
    DuplicateFunctionSelector,
}

impl ValidationErrorKind {
    /// Stable category string (also the serialised form)
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidAddress => "invalid-address",
            ValidationErrorKind::ZeroAddress => "zero-address",
            ValidationErrorKind::EmptyFunctionSelectors => "empty-functionSelectors",
            ValidationErrorKind::InvalidFunctionSelector => "invalid-functionSelector",
            ValidationErrorKind::DuplicateFacetAddress => "duplicate-facetAddress",
            ValidationErrorKind::DuplicateFunctionSelector => "duplicate-functionSelector",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One problem found in a facet list
///
/// `path` has the shape `"<label>: <facetIndex>.<field>[.<selectorIndex>]"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.kind)
    }
}

/// Error taxonomy for facet reconciliation and cut application
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacetCutError {
    // ===== Validation =====
    /// Either input list failed validation; every detected problem is listed
    #[error("facet validation failed with {} error(s)", .errors.len())]
    Validation { errors: Vec<ValidationError> },

    // ===== Cut application =====
    /// A cut entry lists no selectors
    #[error("cut {index} has no function selectors")]
    EmptyCut { index: usize },

    /// Add or Replace targets the reserved zero address
    #[error("cut {index}: cannot {action} selectors to the zero address")]
    ZeroAddressTarget {
        index: usize,
        action: FacetCutAction,
    },

    /// Remove cut carries a facet address other than zero
    #[error("cut {index}: remove facet address must be zero, got {facet_address}")]
    RemoveFacetAddressNotZero {
        index: usize,
        facet_address: Address,
    },

    /// Add targets a selector that is already routed
    #[error("cut {index}: cannot add selector {selector} that already exists")]
    SelectorAlreadyExists { index: usize, selector: Selector },

    /// Replace or Remove targets a selector that is not routed
    #[error("cut {index}: selector {selector} does not exist")]
    SelectorNotFound { index: usize, selector: Selector },

    /// Replace routes a selector to the facet that already serves it
    #[error("cut {index}: selector {selector} is already served by {facet_address}")]
    ReplaceSameFacet {
        index: usize,
        selector: Selector,
        facet_address: Address,
    },
}

impl FacetCutError {
    /// Validation errors carried by this error (empty for other variants)
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            FacetCutError::Validation { errors } => errors,
            _ => &[],
        }
    }
}

/// Conversion from FacetCutError to ExError
impl From<FacetCutError> for ExError {
    fn from(err: FacetCutError) -> Self {
        let message = err.to_string();
        match err {
            FacetCutError::Validation { errors } => ExError::new(ExErrorKind::Validation)
                .with_message(message)
                .with_validation_errors(errors),

            FacetCutError::EmptyCut { .. }
            | FacetCutError::ZeroAddressTarget { .. }
            | FacetCutError::RemoveFacetAddressNotZero { .. } => {
                ExError::new(ExErrorKind::InvalidCut).with_message(message)
            }

            FacetCutError::SelectorAlreadyExists { .. }
            | FacetCutError::SelectorNotFound { .. }
            | FacetCutError::ReplaceSameFacet { .. } => {
                ExError::new(ExErrorKind::CutConflict).with_message(message)
            }
        }
    }
}
