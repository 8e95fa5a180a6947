//! Property inputs: raw listings and validated facts.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{DealError, DealResult};

/// Monthly rent assumed as a fraction of price when no estimate is known (the 0.8% rule).
pub const FALLBACK_RENT_RATIO: f64 = 0.008;

/// Construction year assumed when a listing does not report one.
pub const DEFAULT_YEAR_BUILT: i32 = 2000;

/// Earliest construction year accepted at the boundary.
pub const MIN_YEAR_BUILT: i32 = 1700;

/// Latest construction year accepted at the boundary.
pub const MAX_YEAR_BUILT: i32 = 2200;

/// Validated property facts consumed by the metrics calculator.
///
/// The price is guaranteed positive. Rent and construction year are optional
/// and resolved to defaults by [`monthly_rent`](Self::monthly_rent) and
/// [`year_built`](Self::year_built).
///
/// # Example
///
/// ```rust
/// use dealscope_core::types::PropertyFacts;
/// use rust_decimal_macros::dec;
///
/// let facts = PropertyFacts::from_parts(dec!(450000), Some(dec!(2800)), Some(2018)).unwrap();
/// assert_eq!(facts.annual_rent(), 33_600.0);
/// assert_eq!(facts.age_in(2026), 8);
///
/// assert!(PropertyFacts::new(dec!(0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFacts {
    price: Decimal,
    rent_estimate: Option<Decimal>,
    year_built: Option<i32>,
}

impl PropertyFacts {
    /// Creates facts for a property with only a known price.
    ///
    /// # Errors
    ///
    /// Returns `DealError::InvalidPrice` if the price is not positive.
    pub fn new(price: Decimal) -> DealResult<Self> {
        if price <= Decimal::ZERO {
            return Err(DealError::invalid_price(price, "price must be positive"));
        }
        Ok(Self {
            price,
            rent_estimate: None,
            year_built: None,
        })
    }

    /// Creates facts from all optional parts, validating each.
    ///
    /// A rent estimate or construction year of zero is treated as unknown,
    /// matching how listing feeds report missing values.
    pub fn from_parts(
        price: Decimal,
        rent_estimate: Option<Decimal>,
        year_built: Option<i32>,
    ) -> DealResult<Self> {
        let mut facts = Self::new(price)?;

        match rent_estimate {
            Some(rent) if rent < Decimal::ZERO => {
                return Err(DealError::invalid_rent(rent, "rent cannot be negative"));
            }
            Some(rent) if rent > Decimal::ZERO => facts.rent_estimate = Some(rent),
            _ => {}
        }

        match year_built {
            Some(0) | None => {}
            Some(year) if !(MIN_YEAR_BUILT..=MAX_YEAR_BUILT).contains(&year) => {
                return Err(DealError::InvalidYearBuilt {
                    year,
                    reason: format!("must be between {MIN_YEAR_BUILT} and {MAX_YEAR_BUILT}"),
                });
            }
            Some(year) => facts.year_built = Some(year),
        }

        Ok(facts)
    }

    /// Sets the monthly rent estimate.
    pub fn with_rent_estimate(mut self, rent: Decimal) -> Self {
        self.rent_estimate = Some(rent);
        self
    }

    /// Sets the construction year.
    pub fn with_year_built(mut self, year: i32) -> Self {
        self.year_built = Some(year);
        self
    }

    /// Purchase price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Purchase price as `f64` for metric arithmetic.
    pub fn price_f64(&self) -> f64 {
        self.price.to_f64().unwrap_or(0.0)
    }

    /// Monthly rent estimate as supplied, if any.
    pub fn rent_estimate(&self) -> Option<Decimal> {
        self.rent_estimate
    }

    /// Whether the rent is a fallback derived from price.
    pub fn is_rent_derived(&self) -> bool {
        self.rent_estimate.is_none()
    }

    /// Monthly rent: the estimate if known, otherwise 0.8% of price.
    pub fn monthly_rent(&self) -> f64 {
        match self.rent_estimate {
            Some(rent) => rent.to_f64().unwrap_or(0.0),
            None => self.price_f64() * FALLBACK_RENT_RATIO,
        }
    }

    /// Gross annual rent.
    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent() * 12.0
    }

    /// Construction year, defaulting to 2000.
    pub fn year_built(&self) -> i32 {
        self.year_built.unwrap_or(DEFAULT_YEAR_BUILT)
    }

    /// Age of the property in whole years as of `current_year`.
    pub fn age_in(&self, current_year: i32) -> i32 {
        current_year - self.year_built()
    }
}

/// A raw property listing as delivered by a listing feed or front end.
///
/// Field names follow the camelCase payload shape; common alternates
/// (`bedrooms`, `sqft`, ...) are accepted as aliases. Only `price` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    /// Listing identifier.
    #[serde(default)]
    pub id: String,

    /// Street address.
    #[serde(default)]
    pub address: String,

    /// City.
    #[serde(default)]
    pub city: String,

    /// State or region code.
    #[serde(default)]
    pub state: String,

    /// Postal code.
    #[serde(default, alias = "zip")]
    pub zip_code: String,

    /// Asking price.
    pub price: Decimal,

    /// Bedroom count.
    #[serde(default, alias = "bedrooms")]
    pub beds: u32,

    /// Bathroom count (half baths allowed).
    #[serde(default, alias = "bathrooms")]
    pub baths: f64,

    /// Interior living area in square feet.
    #[serde(default, alias = "sqft")]
    pub square_feet: u32,

    /// Property type, e.g. "Single Family" or "Condo".
    #[serde(default)]
    pub property_type: String,

    /// Construction year, if reported.
    #[serde(default)]
    pub year_built: Option<i32>,

    /// Estimated monthly rent, if known.
    #[serde(default)]
    pub rent_estimate: Option<Decimal>,
}

impl PropertyListing {
    /// Creates a listing with an id and price; all other fields empty.
    pub fn new(id: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            price,
            beds: 0,
            baths: 0.0,
            square_feet: 0,
            property_type: String::new(),
            year_built: None,
            rent_estimate: None,
        }
    }

    /// "City, ST" location label used for location preferences.
    pub fn location(&self) -> String {
        match (self.city.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.state),
            (false, true) => self.city.clone(),
            (true, false) => self.state.clone(),
            (true, true) => String::new(),
        }
    }

    /// Validates the listing into [`PropertyFacts`].
    ///
    /// # Errors
    ///
    /// Returns `DealError::InvalidListing` wrapping the first failed check.
    pub fn facts(&self) -> DealResult<PropertyFacts> {
        PropertyFacts::from_parts(self.price, self.rent_estimate, self.year_built)
            .map_err(|e| e.for_listing(&self.id))
    }
}

impl TryFrom<&PropertyListing> for PropertyFacts {
    type Error = DealError;

    fn try_from(listing: &PropertyListing) -> DealResult<Self> {
        listing.facts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rent_falls_back_to_price_ratio() {
        let facts = PropertyFacts::new(dec!(325000)).unwrap();
        assert!(facts.is_rent_derived());
        assert!((facts.monthly_rent() - 2600.0).abs() < 1e-9);
        assert!((facts.annual_rent() - 31_200.0).abs() < 1e-9);
    }

    #[test]
    fn test_year_built_default() {
        let facts = PropertyFacts::new(dec!(100000)).unwrap();
        assert_eq!(facts.year_built(), DEFAULT_YEAR_BUILT);
        assert_eq!(facts.age_in(2026), 26);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        assert!(matches!(
            PropertyFacts::new(dec!(0)),
            Err(DealError::InvalidPrice { .. })
        ));
        assert!(PropertyFacts::new(dec!(-5)).is_err());
    }

    #[test]
    fn test_zero_rent_and_year_are_unknown() {
        let facts = PropertyFacts::from_parts(dec!(200000), Some(dec!(0)), Some(0)).unwrap();
        assert_eq!(facts.rent_estimate(), None);
        assert_eq!(facts.year_built(), DEFAULT_YEAR_BUILT);
    }

    #[test]
    fn test_rejects_negative_rent() {
        let err = PropertyFacts::from_parts(dec!(200000), Some(dec!(-1)), None).unwrap_err();
        assert!(matches!(err, DealError::InvalidRent { .. }));
    }

    #[test]
    fn test_rejects_implausible_year() {
        let err = PropertyFacts::from_parts(dec!(200000), None, Some(3024)).unwrap_err();
        assert!(matches!(err, DealError::InvalidYearBuilt { year: 3024, .. }));
    }

    #[test]
    fn test_listing_deserializes_front_end_payload() {
        let json = r#"{
            "title": "New MLS Listing: 2BR Condo in Dallas",
            "address": "456 Oak Ave, Dallas, TX",
            "price": 320000,
            "bedrooms": 2,
            "bathrooms": 2,
            "sqft": 1200,
            "yearBuilt": 2015,
            "propertyType": "Condo"
        }"#;
        let listing: PropertyListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.price, dec!(320000));
        assert_eq!(listing.beds, 2);
        assert_eq!(listing.square_feet, 1200);
        assert_eq!(listing.year_built, Some(2015));
        assert_eq!(listing.rent_estimate, None);

        let facts = PropertyFacts::try_from(&listing).unwrap();
        assert_eq!(facts.year_built(), 2015);
    }

    #[test]
    fn test_listing_error_carries_id() {
        let listing = PropertyListing::new("prop-404", dec!(0));
        let err = listing.facts().unwrap_err();
        assert!(err.to_string().contains("prop-404"));
    }

    #[test]
    fn test_location_label() {
        let mut listing = PropertyListing::new("p", dec!(1));
        listing.city = "Austin".into();
        listing.state = "TX".into();
        assert_eq!(listing.location(), "Austin, TX");
    }
}
