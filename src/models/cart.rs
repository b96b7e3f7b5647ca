use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dish::Dish;
use crate::error::PromoError;

/// Flat fee charged whenever the cart has at least one line (5.00)
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);
/// Sales tax applied to the subtotal (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);
/// Discount granted by the recognised promo code (10%)
pub const PROMO_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
pub const PROMO_CODE: &str = "YUMMY10";

pub const MIN_QUANTITY: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub dish: Dish,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(dish: Dish, quantity: u32) -> Self {
        Self {
            dish,
            quantity: quantity.max(MIN_QUANTITY),
        }
    }

    pub fn id(&self) -> &str {
        &self.dish.id
    }

    pub fn line_total(&self) -> Decimal {
        self.dish.line_price(self.quantity)
    }
}

/// A promo code that passed recognition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    pub rate: Decimal,
}

impl PromoCode {
    /// Case-insensitive recognition of the single known code
    pub fn parse(raw: &str) -> Result<Self, PromoError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(PromoError::Empty);
        }
        if code.eq_ignore_ascii_case(PROMO_CODE) {
            Ok(Self {
                code: PROMO_CODE.to_string(),
                rate: PROMO_RATE,
            })
        } else {
            Err(PromoError::Invalid(code.to_string()))
        }
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", (self.rate * Decimal::ONE_HUNDRED).normalize())
    }
}

/// Derived order summary; always recomputed from the full item list
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CartTotals {
    pub item_count: u32,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    pub fn compute(items: &[CartItem], promo: Option<&PromoCode>) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
        let item_count = items.iter().map(|item| item.quantity).sum();
        let tax = subtotal * TAX_RATE;
        let discount = promo.map(|p| subtotal * p.rate).unwrap_or(Decimal::ZERO);
        let total = (subtotal + DELIVERY_FEE + tax - discount).max(Decimal::ZERO);

        Self {
            item_count,
            subtotal,
            delivery_fee: DELIVERY_FEE,
            tax,
            discount,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<CartItem> {
        vec![
            CartItem::new(Dish::new("dish1", "Spicy Pepperoni Pizza", 1599, ""), 1),
            CartItem::new(Dish::new("dish2", "Chicken Caesar Salad", 1050, ""), 2),
            CartItem::new(Dish::new("dish3", "Chocolate Lava Cake", 725, ""), 1),
        ]
    }

    #[test]
    fn test_constants() {
        assert_eq!(DELIVERY_FEE, Decimal::new(5, 0));
        assert_eq!(TAX_RATE, Decimal::new(8, 2));
        assert_eq!(PROMO_RATE, Decimal::new(1, 1));
    }

    #[test]
    fn test_totals_for_sample_cart() {
        let totals = CartTotals::compute(&items(), None);

        assert_eq!(totals.item_count, 4);
        assert_eq!(totals.subtotal, Decimal::new(4424, 2));
        assert_eq!(totals.delivery_fee, Decimal::new(500, 2));
        assert_eq!(totals.tax, Decimal::new(4424, 2) * Decimal::new(8, 2));
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.total, totals.subtotal + totals.delivery_fee + totals.tax);
        assert!(totals.total >= totals.subtotal);
    }

    #[test]
    fn test_empty_cart_has_no_fee_or_tax() {
        let totals = CartTotals::compute(&[], None);
        assert!(totals.is_empty());
        assert_eq!(totals.delivery_fee, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_promo_takes_ten_percent_of_subtotal() {
        let promo = PromoCode::parse("yummy10").unwrap();
        let without = CartTotals::compute(&items(), None);
        let with = CartTotals::compute(&items(), Some(&promo));

        assert_eq!(with.discount, with.subtotal * Decimal::new(1, 1));
        assert_eq!(without.total - with.total, without.subtotal / Decimal::TEN);
        assert!(with.has_discount());
    }

    #[test]
    fn test_promo_recognition() {
        assert_eq!(PromoCode::parse(" YuMmY10 ").unwrap().code, "YUMMY10");
        assert_eq!(PromoCode::parse("BADCODE"), Err(PromoError::Invalid("BADCODE".into())));
        assert_eq!(PromoCode::parse("   "), Err(PromoError::Empty));
        assert_eq!(PromoCode::parse("YUMMY10").unwrap().percent_label(), "10%");
    }

    #[test]
    fn test_order_of_lines_does_not_matter() {
        let mut reversed = items();
        reversed.reverse();
        assert_eq!(CartTotals::compute(&items(), None), CartTotals::compute(&reversed, None));
    }

    #[test]
    fn test_new_item_quantity_is_at_least_one() {
        assert_eq!(CartItem::new(Dish::new("d", "D", 100, ""), 0).quantity, 1);
    }
}
