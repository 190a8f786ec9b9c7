use crate::errors::{FacetCutError, Result, ValidationError, ValidationErrorKind};
use crate::model::Facet;

use super::{formats, invariants};

/// Which side of a reconciliation a facet list belongs to
///
/// Only used to prefix error paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetsLabel {
    Current,
    Model,
}

impl FacetsLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetsLabel::Current => "currentFacets",
            FacetsLabel::Model => "modelFacets",
        }
    }
}

impl std::fmt::Display for FacetsLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate the structure of one facet list
///
/// Collects every problem instead of stopping at the first one:
///
/// 1. Each facet address is a well-formed address (`invalid-address`)
/// 2. ...and not the reserved zero address (`zero-address`)
/// 3. Each facet declares at least one selector (`empty-functionSelectors`)
/// 4. Each selector is a hex byte string (`invalid-functionSelector`)
/// 5. No facet address repeats (`duplicate-facetAddress`)
/// 6. No selector repeats anywhere in the list (`duplicate-functionSelector`)
///
/// Checks 1-4 run per facet in list order, then 5, then 6. A malformed
/// address is never additionally reported as zero.
pub fn validate_facets(facets: &[Facet], label: FacetsLabel) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, facet) in facets.iter().enumerate() {
        let address = facet.facet_address.as_str();
        if !formats::is_address(address) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAddress,
                format!("{}: {}.facetAddress", label, i),
                "`facetAddress` is invalid",
            ));
        } else if formats::is_zero_address(address) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroAddress,
                format!("{}: {}.facetAddress", label, i),
                "`facetAddress` is zero address",
            ));
        }

        if facet.function_selectors.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyFunctionSelectors,
                format!("{}: {}.functionSelectors", label, i),
                "`functionSelectors` cannot be an empty array",
            ));
        }

        for (j, selector) in facet.function_selectors.iter().enumerate() {
            if !formats::is_bytes_like(selector.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidFunctionSelector,
                    format!("{}: {}.functionSelectors.{}", label, i, j),
                    "Each function selector must be bytes like",
                ));
            }
        }
    }

    for i in invariants::find_duplicate_facet_addresses(facets) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateFacetAddress,
            format!("{}: {}.facetAddress", label, i),
            "Facet addresses must be unique",
        ));
    }

    for (i, j) in invariants::find_duplicate_function_selectors(facets) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateFunctionSelector,
            format!("{}: {}.functionSelectors.{}", label, i, j),
            "Facets must have unique function selectors",
        ));
    }

    for error in &errors {
        tracing::debug!(
            component = module_path!(),
            label = label.as_str(),
            error_path = %error.path,
            err_kind = error.kind.code(),
            "facet validation error"
        );
    }

    errors
}

/// Validate both sides of a reconciliation
///
/// Both lists are always fully checked; current errors come first.
///
/// # Errors
/// Returns `FacetCutError::Validation` carrying every error from both lists
/// when at least one was found.
pub fn validate_pair(current: &[Facet], model: &[Facet]) -> Result<()> {
    let mut errors = validate_facets(current, FacetsLabel::Current);
    errors.extend(validate_facets(model, FacetsLabel::Model));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FacetCutError::Validation { errors })
    }
}
