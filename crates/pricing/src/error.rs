use thiserror::Error;

use coordinate_core::DomainError;

/// Result type returned by every aggregation.
pub type PricingResult<T> = Result<T, PricingError>;

/// Aggregation failure.
///
/// All variants are deterministic: repeating the call against the same
/// snapshot yields the same error, so callers should not retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The query itself is malformed (empty category selection, unknown
    /// category name, total overflow).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The snapshot lacks the products needed for a definite answer.
    #[error("not found: {0}")]
    NotFound(String),

    /// No brand carries a product in every requested category.
    #[error("no eligible brand: {0}")]
    NoEligibleBrand(String),
}

impl PricingError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn no_eligible_brand(msg: impl Into<String>) -> Self {
        Self::NoEligibleBrand(msg.into())
    }

    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidArgument(_) => "invalid_argument",
            PricingError::NotFound(_) => "not_found",
            PricingError::NoEligibleBrand(_) => "no_eligible_brand",
        }
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            PricingError::InvalidArgument(msg)
            | PricingError::NotFound(msg)
            | PricingError::NoEligibleBrand(msg) => msg,
        }
    }
}

impl From<DomainError> for PricingError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::NotFound(msg) => PricingError::NotFound(msg),
            DomainError::Validation(msg) | DomainError::InvalidId(msg) | DomainError::Conflict(msg) => {
                PricingError::InvalidArgument(msg)
            }
        }
    }
}
