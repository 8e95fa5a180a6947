//! Amortizing mortgage payments.
//!
//! ## Formula
//!
//! ```text
//! M = L × r(1 + r)^n / ((1 + r)^n − 1)
//! ```
//!
//! where:
//! - L = loan amount
//! - r = monthly rate (annual rate / 12)
//! - n = number of monthly payments (term in years × 12)
//!
//! With a zero rate the payment is straight-line principal, `L / n`.

/// Monthly principal-and-interest payment on a fully amortizing loan.
///
/// # Arguments
///
/// * `loan_amount` - Principal borrowed
/// * `annual_rate` - Annual interest rate as decimal (0.06 for 6%)
/// * `term_years` - Loan term in years
///
/// A zero-year term has no amortization schedule; the whole balance is
/// returned as the single payment.
///
/// # Example
///
/// ```rust
/// use dealscope_analytics::mortgage::monthly_payment;
///
/// let payment = monthly_payment(360_000.0, 0.06, 30);
/// assert!((payment - 2158.38).abs() < 0.01);
///
/// assert_eq!(monthly_payment(120_000.0, 0.0, 10), 1_000.0);
/// ```
pub fn monthly_payment(loan_amount: f64, annual_rate: f64, term_years: u32) -> f64 {
    if term_years == 0 {
        return loan_amount;
    }
    let periods = f64::from(term_years) * 12.0;

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return loan_amount / periods;
    }

    let growth = (1.0 + monthly_rate).powf(periods);
    if growth.is_infinite() {
        // Interest-only in the limit
        return loan_amount * monthly_rate;
    }
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}

/// Annual debt service: twelve monthly payments.
pub fn annual_debt_service(loan_amount: f64, annual_rate: f64, term_years: u32) -> f64 {
    monthly_payment(loan_amount, annual_rate, term_years) * 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_thirty_year() {
        // 450k purchase, 20% down
        let payment = monthly_payment(360_000.0, 0.06, 30);
        assert_relative_eq!(payment, 2158.381890549925, epsilon = 1e-6);
    }

    #[test]
    fn test_fifteen_year_costs_more_per_month() {
        let thirty = monthly_payment(200_000.0, 0.05, 30);
        let fifteen = monthly_payment(200_000.0, 0.05, 15);
        assert!(fifteen > thirty);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_payment(240_000.0, 0.0, 30);
        assert!(payment.is_finite());
        assert_relative_eq!(payment, 240_000.0 / 360.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_loan_no_payment() {
        assert_eq!(monthly_payment(0.0, 0.06, 30), 0.0);
        assert_eq!(annual_debt_service(0.0, 0.0, 30), 0.0);
    }

    #[test]
    fn test_zero_term() {
        assert_eq!(monthly_payment(10_000.0, 0.06, 0), 10_000.0);
    }

    #[test]
    fn test_very_long_term_does_not_overflow() {
        let payment = monthly_payment(100_000.0, 0.06, u32::MAX / 6);
        assert_relative_eq!(payment, 500.0, epsilon = 1e-9);

        let payment = monthly_payment(100_000.0, 0.0, u32::MAX);
        assert!(payment.is_finite());
        assert!(payment > 0.0);
    }

    #[test]
    fn test_annual_debt_service() {
        let annual = annual_debt_service(360_000.0, 0.06, 30);
        assert_relative_eq!(annual, 2158.381890549925 * 12.0, epsilon = 1e-6);
    }
}
