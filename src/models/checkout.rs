// ============================================================================
// CHECKOUT FORM - Address and payment selections as sum types
// ============================================================================

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutField, FieldError, ValidationErrors};

lazy_static! {
    static ref ZIP_RE: Regex = Regex::new(r"^\d{5}(-\d{4})?$").unwrap();
    static ref CARD_NUMBER_RE: Regex = Regex::new(r"^\d{16}$").unwrap();
    static ref CARD_EXPIRY_RE: Regex = Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap();
    static ref CARD_CVV_RE: Regex = Regex::new(r"^\d{3,4}$").unwrap();
}

/// Postal abbreviations offered by the state select
pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS", "KY",
    "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND",
    "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AddressInput {
    Saved { id: Option<String> },
    New(NewAddress),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressKind {
    Saved,
    New,
}

impl AddressInput {
    pub fn kind(&self) -> AddressKind {
        match self {
            AddressInput::Saved { .. } => AddressKind::Saved,
            AddressInput::New(_) => AddressKind::New,
        }
    }

    fn validate_into(&self, errors: &mut ValidationErrors) {
        match self {
            AddressInput::Saved { id } => {
                if id.as_deref().map_or(true, |id| id.trim().is_empty()) {
                    errors.add(CheckoutField::SavedAddress, FieldError::SavedAddressRequired);
                }
            }
            AddressInput::New(address) => {
                if address.street.trim().is_empty() {
                    errors.add(CheckoutField::Street, FieldError::StreetRequired);
                }
                if address.city.trim().is_empty() {
                    errors.add(CheckoutField::City, FieldError::CityRequired);
                }
                if address.state.trim().is_empty() {
                    errors.add(CheckoutField::State, FieldError::StateRequired);
                }
                if !ZIP_RE.is_match(&address.zip) {
                    errors.add(CheckoutField::Zip, FieldError::InvalidZip);
                }
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    /// Last four digits for confirmations; never log the full number
    pub fn masked(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let last4: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("•••• {}", last4)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaymentInput {
    Card(CardDetails),
    /// External wallet (PayPal); no sub-fields
    Wallet,
    Cash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentKind {
    Card,
    Wallet,
    Cash,
}

impl PaymentKind {
    pub const ALL: [PaymentKind; 3] = [PaymentKind::Card, PaymentKind::Wallet, PaymentKind::Cash];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentKind::Card => "Credit/Debit Card",
            PaymentKind::Wallet => "PayPal",
            PaymentKind::Cash => "Cash on Delivery",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            PaymentKind::Card => "creditCard",
            PaymentKind::Wallet => "paypal",
            PaymentKind::Cash => "cash",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }

    /// Fresh input for this choice; card fields start empty
    pub fn empty_input(&self) -> PaymentInput {
        match self {
            PaymentKind::Card => PaymentInput::Card(CardDetails::default()),
            PaymentKind::Wallet => PaymentInput::Wallet,
            PaymentKind::Cash => PaymentInput::Cash,
        }
    }
}

impl PaymentInput {
    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentInput::Card(_) => PaymentKind::Card,
            PaymentInput::Wallet => PaymentKind::Wallet,
            PaymentInput::Cash => PaymentKind::Cash,
        }
    }

    fn validate_into(&self, errors: &mut ValidationErrors) {
        if let PaymentInput::Card(card) = self {
            if !CARD_NUMBER_RE.is_match(&card.number) {
                errors.add(CheckoutField::CardNumber, FieldError::InvalidCardNumber);
            }
            if !CARD_EXPIRY_RE.is_match(&card.expiry) {
                errors.add(CheckoutField::CardExpiry, FieldError::InvalidCardExpiry);
            }
            if !CARD_CVV_RE.is_match(&card.cvv) {
                errors.add(CheckoutField::CardCvv, FieldError::InvalidCardCvv);
            }
        }
    }
}

/// Combined checkout value; promo application is a separate action
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub address: AddressInput,
    pub payment: PaymentInput,
    #[serde(default)]
    pub promo_code: String,
}

impl CheckoutForm {
    /// Default selection: first saved address, card payment
    pub fn new(default_saved_address: Option<String>) -> Self {
        Self {
            address: AddressInput::Saved { id: default_saved_address },
            payment: PaymentInput::Card(CardDetails::default()),
            promo_code: String::new(),
        }
    }

    /// Single pass over both blocks; each control gets at most one message
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.address.validate_into(&mut errors);
        self.payment.validate_into(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn errors(&self) -> ValidationErrors {
        self.validate().err().unwrap_or_default()
    }

    /// Switching kind starts the new variant empty; re-selecting is a no-op
    pub fn set_address_kind(&mut self, kind: AddressKind, default_saved_address: Option<String>) {
        if self.address.kind() == kind {
            return;
        }
        self.address = match kind {
            AddressKind::Saved => AddressInput::Saved { id: default_saved_address },
            AddressKind::New => AddressInput::New(NewAddress::default()),
        };
    }

    pub fn set_payment_kind(&mut self, kind: PaymentKind) {
        if self.payment.kind() != kind {
            self.payment = kind.empty_input();
        }
    }

    /// Writes a text control; fields of the unselected variant are ignored
    pub fn set_field(&mut self, field: CheckoutField, value: String) {
        match (field, &mut self.address, &mut self.payment) {
            (CheckoutField::SavedAddress, AddressInput::Saved { id }, _) => {
                *id = Some(value).filter(|v| !v.is_empty());
            }
            (CheckoutField::Street, AddressInput::New(address), _) => address.street = value,
            (CheckoutField::City, AddressInput::New(address), _) => address.city = value,
            (CheckoutField::State, AddressInput::New(address), _) => address.state = value,
            (CheckoutField::Zip, AddressInput::New(address), _) => address.zip = value,
            (CheckoutField::CardNumber, _, PaymentInput::Card(card)) => card.number = value,
            (CheckoutField::CardExpiry, _, PaymentInput::Card(card)) => card.expiry = value,
            (CheckoutField::CardCvv, _, PaymentInput::Card(card)) => card.cvv = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card() -> CardDetails {
        CardDetails {
            number: "4242424242424242".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
        }
    }

    fn new_address() -> NewAddress {
        NewAddress {
            street: "1 Main St".into(),
            city: "Foodville".into(),
            state: "CA".into(),
            zip: "90210".into(),
        }
    }

    #[test]
    fn test_default_form_needs_card_details_only() {
        let form = CheckoutForm::new(Some("addr1".into()));
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![CheckoutField::CardNumber, CheckoutField::CardExpiry, CheckoutField::CardCvv]
        );
    }

    #[test]
    fn test_empty_street_blocks_new_address() {
        let mut address = new_address();
        address.street = "   ".into();
        let form = CheckoutForm {
            address: AddressInput::New(address),
            payment: PaymentInput::Cash,
            promo_code: String::new(),
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(CheckoutField::Street), Some(&FieldError::StreetRequired));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_saved_address() {
        for id in [None, Some(String::new())] {
            let form = CheckoutForm {
                address: AddressInput::Saved { id },
                payment: PaymentInput::Wallet,
                promo_code: String::new(),
            };
            assert_eq!(
                form.errors().get(CheckoutField::SavedAddress),
                Some(&FieldError::SavedAddressRequired)
            );
        }
    }

    #[test]
    fn test_zip_patterns() {
        for (zip, ok) in [("90210", true), ("90210-1234", true), ("9021", false), ("90210-12", false), ("abcde", false), ("", false)] {
            let mut address = new_address();
            address.zip = zip.into();
            let form = CheckoutForm {
                address: AddressInput::New(address),
                payment: PaymentInput::Cash,
                promo_code: String::new(),
            };
            assert_eq!(form.validate().is_ok(), ok, "zip {:?}", zip);
        }
    }

    #[test]
    fn test_fifteen_digit_card_is_rejected() {
        let mut card = valid_card();
        card.number = "424242424242424".into();
        let form = CheckoutForm {
            address: AddressInput::Saved { id: Some("addr1".into()) },
            payment: PaymentInput::Card(card),
            promo_code: String::new(),
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(CheckoutField::CardNumber), Some(&FieldError::InvalidCardNumber));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_expiry_month_range_and_cvv_length() {
        let check = |expiry: &str, cvv: &str| {
            let form = CheckoutForm {
                address: AddressInput::Saved { id: Some("addr1".into()) },
                payment: PaymentInput::Card(CardDetails {
                    number: "4242424242424242".into(),
                    expiry: expiry.into(),
                    cvv: cvv.into(),
                }),
                promo_code: String::new(),
            };
            form.errors()
        };

        assert!(check("01/30", "1234").is_empty());
        assert!(check("13/30", "123").get(CheckoutField::CardExpiry).is_some());
        assert!(check("00/30", "123").get(CheckoutField::CardExpiry).is_some());
        assert!(check("1/30", "123").get(CheckoutField::CardExpiry).is_some());
        assert!(check("12/30", "12").get(CheckoutField::CardCvv).is_some());
        assert!(check("12/30", "12345").get(CheckoutField::CardCvv).is_some());
    }

    #[test]
    fn test_non_card_payments_need_nothing() {
        for payment in [PaymentInput::Wallet, PaymentInput::Cash] {
            let form = CheckoutForm {
                address: AddressInput::New(new_address()),
                payment,
                promo_code: String::new(),
            };
            assert!(form.validate().is_ok());
        }
    }

    #[test]
    fn test_both_blocks_report_together() {
        let form = CheckoutForm {
            address: AddressInput::New(NewAddress::default()),
            payment: PaymentInput::Card(CardDetails::default()),
            promo_code: String::new(),
        };
        assert_eq!(form.errors().len(), 7);
    }

    #[test]
    fn test_payment_kind_values() {
        assert_eq!(PaymentKind::from_value("creditCard"), Some(PaymentKind::Card));
        assert_eq!(PaymentKind::from_value("paypal"), Some(PaymentKind::Wallet));
        assert_eq!(PaymentKind::from_value("bitcoin"), None);
        assert_eq!(PaymentKind::Cash.empty_input().kind(), PaymentKind::Cash);
    }

    #[test]
    fn test_switching_kind_resets_variant_fields() {
        let mut form = CheckoutForm::new(Some("addr1".into()));
        form.set_field(CheckoutField::CardNumber, "4242424242424242".into());
        form.set_payment_kind(PaymentKind::Card);
        assert_eq!(form.payment, PaymentInput::Card(CardDetails { number: "4242424242424242".into(), ..Default::default() }));

        form.set_payment_kind(PaymentKind::Cash);
        form.set_payment_kind(PaymentKind::Card);
        assert_eq!(form.payment, PaymentInput::Card(CardDetails::default()));

        form.set_address_kind(AddressKind::New, Some("addr1".into()));
        form.set_field(CheckoutField::Street, "1 Main St".into());
        form.set_field(CheckoutField::SavedAddress, "addr2".into());
        assert_eq!(form.address, AddressInput::New(NewAddress { street: "1 Main St".into(), ..Default::default() }));

        form.set_address_kind(AddressKind::Saved, Some("addr1".into()));
        assert_eq!(form.address, AddressInput::Saved { id: Some("addr1".into()) });
    }

    #[test]
    fn test_fields_of_other_variant_are_ignored() {
        let mut form = CheckoutForm::new(None);
        form.set_payment_kind(PaymentKind::Wallet);
        form.set_field(CheckoutField::CardCvv, "123".into());
        form.set_field(CheckoutField::Zip, "90210".into());
        assert_eq!(form.payment, PaymentInput::Wallet);
        assert_eq!(form.address, AddressInput::Saved { id: None });

        form.set_field(CheckoutField::SavedAddress, "addr2".into());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_masked_card() {
        assert_eq!(valid_card().masked(), "•••• 4242");
        assert_eq!(CardDetails::default().masked(), "•••• ");
    }
}
