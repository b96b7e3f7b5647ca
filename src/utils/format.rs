use rust_decimal::{Decimal, RoundingStrategy};

/// "$12.34"; amounts are rounded half away from zero to cents
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// "-$4.42" for discount lines
pub fn format_discount(amount: Decimal) -> String {
    format!("-{}", format_price(amount))
}

/// "4.5" for ratings
pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(1599, 2)), "$15.99");
        assert_eq!(format_price(Decimal::new(5, 0)), "$5.00");
        assert_eq!(format_price(Decimal::new(35392, 4)), "$3.54");
        assert_eq!(format_price(Decimal::new(1125, 3)), "$1.13");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_discount_and_rating() {
        assert_eq!(format_discount(Decimal::new(442, 2)), "-$4.42");
        assert_eq!(format_rating(4.0), "4.0");
    }
}
