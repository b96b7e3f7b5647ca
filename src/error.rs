use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Checkout controls that can carry an inline error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CheckoutField {
    SavedAddress,
    Street,
    City,
    State,
    Zip,
    CardNumber,
    CardExpiry,
    CardCvv,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please select a saved address.")]
    SavedAddressRequired,
    #[error("Street is required for new address.")]
    StreetRequired,
    #[error("City is required for new address.")]
    CityRequired,
    #[error("State is required for new address.")]
    StateRequired,
    #[error("Valid ZIP code is required.")]
    InvalidZip,
    #[error("Valid 16-digit card number is required.")]
    InvalidCardNumber,
    #[error("Valid MM/YY expiry date is required.")]
    InvalidCardExpiry,
    #[error("Valid 3 or 4 digit CVV is required.")]
    InvalidCardCvv,
}

/// Per-field failures of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<CheckoutField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: CheckoutField, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: CheckoutField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Inline message for a control, if it is invalid
    pub fn message(&self, field: CheckoutField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = CheckoutField> + '_ {
        self.errors.keys().copied()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.values().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoError {
    #[error("No promo code entered.")]
    Empty,
    #[error("Invalid promo code.")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty.")]
    EmptyCart,
    #[error("Please fix the highlighted fields: {0}")]
    Invalid(ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            FieldError::StreetRequired.to_string(),
            "Street is required for new address."
        );
        assert_eq!(PromoError::Invalid("BADCODE".into()).to_string(), "Invalid promo code.");
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Your cart is empty.");
    }

    #[test]
    fn test_validation_errors_keep_one_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add(CheckoutField::CardNumber, FieldError::InvalidCardNumber);
        errors.add(CheckoutField::Street, FieldError::StreetRequired);
        errors.add(CheckoutField::Street, FieldError::StreetRequired);

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![CheckoutField::Street, CheckoutField::CardNumber]
        );
        assert_eq!(
            errors.message(CheckoutField::CardNumber).as_deref(),
            Some("Valid 16-digit card number is required.")
        );
        assert!(errors.get(CheckoutField::Zip).is_none());
    }
}
