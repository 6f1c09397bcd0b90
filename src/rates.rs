//! Annual-to-monthly rate conversions
//!
//! Two conventions coexist and must stay separate: the drawdown engine uses
//! the geometric conversion (equivalent compounding), while the SIP engine
//! divides the annual rate by twelve. Unifying them would change the numbers
//! both calculators have always produced.

use thiserror::Error;

/// Error raised when a rate has no usable monthly equivalent
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RateError {
    /// Annual rate at or below -100% (or not finite): `(1 + r/100)^(1/12)`
    /// has no real value there
    #[error("annual rate {0}% cannot be converted to a monthly rate; expected a finite value greater than -100%")]
    AnnualRateOutOfRange(f64),
}

/// Convert an annual compounding rate (in percent) to the equivalent
/// monthly rate, such that `(1 + m)^12 = 1 + r/100`.
///
/// Rejects rates at or below -100%, where the conversion leaves the reals.
pub fn monthly_rate_from_annual(annual_pct: f64) -> Result<f64, RateError> {
    if !annual_pct.is_finite() || annual_pct <= -100.0 {
        return Err(RateError::AnnualRateOutOfRange(annual_pct));
    }
    Ok((1.0 + annual_pct / 100.0).powf(1.0 / 12.0) - 1.0)
}

/// Convert an annual rate (in percent) to a monthly rate by simple division.
///
/// This is the SIP engine's convention, not an equivalent-compounding
/// conversion. Total over all finite inputs, so no error channel.
pub fn monthly_rate_flat(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_converts_to_zero() {
        assert_eq!(monthly_rate_from_annual(0.0).unwrap(), 0.0);
        assert_eq!(monthly_rate_flat(0.0), 0.0);
    }

    #[test]
    fn test_geometric_conversion_round_trips() {
        for annual in [-50.0, -1.0, 0.5, 4.0, 12.0, 25.0, 100.0, 400.0] {
            let monthly = monthly_rate_from_annual(annual).unwrap();
            assert_relative_eq!(
                (1.0 + monthly).powi(12),
                1.0 + annual / 100.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_flat_conversion_divides_by_twelve() {
        assert_relative_eq!(monthly_rate_flat(12.0), 0.01, epsilon = 1e-15);
        assert_relative_eq!(monthly_rate_flat(6.0), 0.005, epsilon = 1e-15);
    }

    #[test]
    fn test_conventions_differ_for_nonzero_rates() {
        // The geometric monthly rate is strictly below r/12 for positive r
        let geometric = monthly_rate_from_annual(12.0).unwrap();
        let flat = monthly_rate_flat(12.0);
        assert!(geometric < flat);
        assert!(geometric > 0.0);
    }

    #[test]
    fn test_out_of_range_rates_rejected() {
        assert_eq!(
            monthly_rate_from_annual(-100.0),
            Err(RateError::AnnualRateOutOfRange(-100.0))
        );
        assert!(monthly_rate_from_annual(-250.0).is_err());
        assert!(monthly_rate_from_annual(f64::NAN).is_err());
        assert!(monthly_rate_from_annual(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_is_descriptive() {
        let err = monthly_rate_from_annual(-150.0).unwrap_err();
        assert!(err.to_string().contains("-150"));
        assert!(err.to_string().contains("-100%"));
    }
}
