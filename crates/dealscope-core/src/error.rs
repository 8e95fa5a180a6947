//! Error types for the Dealscope library.
//!
//! The analytics themselves never fail; these errors are raised only when raw
//! listing data is validated into typed inputs.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Dealscope operations.
pub type DealResult<T> = Result<T, DealError>;

/// The main error type for Dealscope input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DealError {
    /// Property price is missing, zero, or negative.
    #[error("Invalid price: {value} - {reason}")]
    InvalidPrice {
        /// The rejected price.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Monthly rent estimate cannot be used.
    #[error("Invalid rent estimate: {value} - {reason}")]
    InvalidRent {
        /// The rejected rent estimate.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Construction year is outside the accepted range.
    #[error("Invalid year built: {year} - {reason}")]
    InvalidYearBuilt {
        /// The rejected year.
        year: i32,
        /// Reason for invalidity.
        reason: String,
    },

    /// A financing assumption is out of range.
    #[error("Invalid financing assumption '{field}': {reason}")]
    InvalidAssumption {
        /// Name of the offending field.
        field: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// A grade string could not be parsed.
    #[error("Invalid grade: '{0}'. Use A, B, C, D, F (or 'any' for a minimum grade)")]
    InvalidGrade(String),

    /// A listing failed validation; wraps the underlying cause.
    #[error("Listing {listing_id}: {source}")]
    InvalidListing {
        /// Identifier of the listing.
        listing_id: String,
        /// Underlying validation error.
        #[source]
        source: Box<DealError>,
    },
}

impl DealError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid rent error.
    #[must_use]
    pub fn invalid_rent(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidRent {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid financing assumption error.
    #[must_use]
    pub fn invalid_assumption(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAssumption {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Attaches a listing identifier to this error.
    #[must_use]
    pub fn for_listing(self, listing_id: impl Into<String>) -> Self {
        Self::InvalidListing {
            listing_id: listing_id.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DealError::invalid_price(Decimal::ZERO, "price must be positive");
        assert_eq!(err.to_string(), "Invalid price: 0 - price must be positive");
    }

    #[test]
    fn test_listing_context() {
        let err = DealError::invalid_rent(Decimal::NEGATIVE_ONE, "rent cannot be negative")
            .for_listing("prop-007");
        let msg = err.to_string();
        assert!(msg.starts_with("Listing prop-007:"));
        assert!(msg.contains("rent cannot be negative"));
    }
}
