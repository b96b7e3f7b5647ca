// ============================================================================
// ORDER SERVICE - Checkout submission
// ============================================================================
// No backend: a placed order is validated, logged as JSON and handed back to
// the page, which clears the cart and redirects to tracking.
// ============================================================================

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::CheckoutError;
use crate::models::{AddressInput, CartItem, CartTotals, CheckoutForm, NewAddress, PaymentInput, PromoCode};

pub const ORDER_ID_PREFIX: &str = "FOODIE-";
const ORDER_ID_SUFFIX_LEN: usize = 7;

/// "FOODIE-" plus seven uppercase hex characters
pub fn new_order_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("{}{}", ORDER_ID_PREFIX, simple[..ORDER_ID_SUFFIX_LEN].to_uppercase())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeliveryAddress {
    Saved { id: String },
    New(NewAddress),
}

/// Payment as logged; card numbers are masked
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub dish_id: String,
    pub name: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub address: DeliveryAddress,
    pub payment: PaymentSummary,
    pub items: Vec<OrderLine>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub special_instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    pub totals: CartTotals,
}

impl OrderConfirmation {
    pub fn tracking_href(&self) -> String {
        format!("/order-tracking?orderId={}", self.order_id)
    }
}

fn summarize_payment(payment: &PaymentInput) -> PaymentSummary {
    PaymentSummary {
        method: payment.kind().value(),
        card: match payment {
            PaymentInput::Card(card) => Some(card.masked()),
            PaymentInput::Wallet | PaymentInput::Cash => None,
        },
    }
}

/// Validates the form and the cart, then logs and returns the order.
/// Nothing is logged for a blocked submission except the warning.
pub fn place_order(
    form: &CheckoutForm,
    items: &[CartItem],
    promo: Option<&PromoCode>,
    special_instructions: &str,
) -> Result<OrderConfirmation, CheckoutError> {
    if items.is_empty() {
        log::warn!("🚫 Checkout blocked: cart is empty");
        return Err(CheckoutError::EmptyCart);
    }
    if let Err(errors) = form.validate() {
        log::warn!("🚫 Checkout blocked: {} invalid field(s)", errors.len());
        return Err(CheckoutError::Invalid(errors));
    }

    let address = match &form.address {
        AddressInput::Saved { id } => DeliveryAddress::Saved {
            id: id.clone().unwrap_or_default(),
        },
        AddressInput::New(address) => DeliveryAddress::New(address.clone()),
    };

    let confirmation = OrderConfirmation {
        order_id: new_order_id(),
        address,
        payment: summarize_payment(&form.payment),
        items: items
            .iter()
            .map(|item| OrderLine {
                dish_id: item.dish.id.clone(),
                name: item.dish.name.clone(),
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect(),
        special_instructions: special_instructions.trim().to_string(),
        promo_code: promo.map(|p| p.code.clone()),
        totals: CartTotals::compute(items, promo),
    };

    match serde_json::to_string(&confirmation) {
        Ok(json) => log::info!("🧾 Order placed: {}", json),
        Err(e) => log::error!("❌ Could not serialize order {}: {}", confirmation.order_id, e),
    }

    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CheckoutField, FieldError};
    use crate::models::{CardDetails, Dish};

    fn items() -> Vec<CartItem> {
        vec![CartItem::new(Dish::new("dish1", "Seared Scallops", 1850, ""), 2)]
    }

    fn card_form() -> CheckoutForm {
        CheckoutForm {
            address: AddressInput::Saved { id: Some("addr1".into()) },
            payment: PaymentInput::Card(CardDetails {
                number: "4242424242424242".into(),
                expiry: "12/27".into(),
                cvv: "123".into(),
            }),
            promo_code: String::new(),
        }
    }

    #[test]
    fn test_order_id_format() {
        let id = new_order_id();
        assert!(id.starts_with(ORDER_ID_PREFIX));
        let suffix = &id[ORDER_ID_PREFIX.len()..];
        assert_eq!(suffix.len(), 7);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_empty_cart_blocks() {
        assert_eq!(place_order(&card_form(), &[], None, ""), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_invalid_form_blocks() {
        let mut form = card_form();
        form.payment = PaymentInput::Card(CardDetails {
            number: "424242424242424".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
        });

        match place_order(&form, &items(), None, "") {
            Err(CheckoutError::Invalid(errors)) => {
                assert_eq!(errors.get(CheckoutField::CardNumber), Some(&FieldError::InvalidCardNumber));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_confirmation_masks_card() {
        let promo = PromoCode::parse("Yummy10").unwrap();
        let order = place_order(&card_form(), &items(), Some(&promo), "  ring twice ").unwrap();

        assert_eq!(order.payment.card.as_deref(), Some("•••• 4242"));
        assert_eq!(order.special_instructions, "ring twice");
        assert_eq!(order.totals.discount, Decimal::new(370, 2));
        assert!(order.tracking_href().ends_with(&order.order_id));

        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("4242424242424242"));
        assert!(!json.contains("\"cvv\""));
    }
}
