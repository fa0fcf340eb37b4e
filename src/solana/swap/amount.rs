use rust_decimal::Decimal;

use crate::entity::DecodeError;

/// Scales a raw on-chain amount down by `10^decimals` in exact decimal
/// arithmetic. Tokens carry anything from 0 to 9 decimals, so going through
/// binary floats here would drift; `Decimal` keeps the full integer mantissa.
pub fn from_decimals(amount: u128, decimals: u8) -> Result<Decimal, DecodeError> {
    let amount = i128::try_from(amount)
        .map_err(|_| DecodeError::Malformed(format!("raw token amount {} is out of range", amount)))?;

    Decimal::try_from_i128_with_scale(amount, decimals as u32).map_err(|e| {
        DecodeError::Malformed(format!(
            "raw token amount {} does not fit at {} decimals: {}",
            amount, decimals, e
        ))
    })
}

/// Parses the raw integer amount string reported by the ledger. Kept as an
/// integer until scaling so no precision is lost on large balances.
pub fn parse_raw_amount(value: &str) -> Result<u128, DecodeError> {
    value
        .parse::<u128>()
        .map_err(|_| DecodeError::Malformed(format!("unparseable raw token amount `{}`", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn scales_exactly_at_six_decimals() {
        assert_eq!(
            from_decimals(123_456_789, 6).unwrap(),
            Decimal::from_str("123.456789").unwrap()
        );
    }

    #[test]
    fn one_sol_in_lamports_scales_to_one() {
        assert_eq!(from_decimals(1_000_000_000, 9).unwrap(), Decimal::ONE);
    }

    #[test]
    fn zero_decimals_is_identity() {
        assert_eq!(from_decimals(42, 0).unwrap(), Decimal::from(42));
    }

    #[test]
    fn large_raw_amounts_keep_precision() {
        // u64::MAX lamports, the largest balance the ledger can report
        assert_eq!(
            from_decimals(u64::MAX as u128, 9).unwrap(),
            Decimal::from_str("18446744073.709551615").unwrap()
        );
    }

    #[test]
    fn parses_raw_amount_strings() {
        assert_eq!(parse_raw_amount("500000000000").unwrap(), 500_000_000_000);
        assert!(matches!(
            parse_raw_amount("12.5"),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            parse_raw_amount(""),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_amounts_beyond_decimal_range() {
        assert!(matches!(
            from_decimals(u128::MAX, 9),
            Err(DecodeError::Malformed(_))
        ));
    }
}
