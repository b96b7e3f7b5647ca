use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: String,
}

impl UserProfile {
    /// "Alex Johnson" -> "AJ"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: String,
    /// "Home", "Work"
    pub label: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default)]
    pub is_default: bool,
}

impl SavedAddress {
    pub fn one_line(&self) -> String {
        format!("{} - {}, {}, {}", self.label, self.street, self.city, self.state)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedCard {
    pub id: String,
    pub brand: String,
    pub last4: String,
    pub expiry: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    Delivered,
    Cancelled,
}

impl OrderOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            OrderOutcome::Delivered => "Delivered",
            OrderOutcome::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PastOrder {
    pub id: String,
    pub date: String,
    pub restaurant: String,
    pub items: u32,
    pub total: Decimal,
    pub status: OrderOutcome,
}

impl PastOrder {
    pub fn tracking_href(&self) -> String {
        format!("/order-tracking?orderId={}", self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            sms: true,
        }
    }
}

/// Saved addresses with the at-most-one-default rule
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    addresses: Vec<SavedAddress>,
}

impl AddressBook {
    pub fn new(addresses: Vec<SavedAddress>) -> Self {
        let mut book = Self { addresses };
        book.ensure_default();
        book
    }

    pub fn addresses(&self) -> &[SavedAddress] {
        &self.addresses
    }

    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// Returns false when the id is unknown
    pub fn set_default(&mut self, id: &str) -> bool {
        if !self.addresses.iter().any(|a| a.id == id) {
            return false;
        }
        for address in &mut self.addresses {
            address.is_default = address.id == id;
        }
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<SavedAddress> {
        let idx = self.addresses.iter().position(|a| a.id == id)?;
        let removed = self.addresses.remove(idx);
        self.ensure_default();
        Some(removed)
    }

    // Exactly one default while any address remains
    fn ensure_default(&mut self) {
        let mut seen = false;
        for address in &mut self.addresses {
            if address.is_default && !seen {
                seen = true;
            } else {
                address.is_default = false;
            }
        }
        if !seen {
            if let Some(first) = self.addresses.first_mut() {
                first.is_default = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: &str, is_default: bool) -> SavedAddress {
        SavedAddress {
            id: id.to_string(),
            label: "Home".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62704".to_string(),
            is_default,
        }
    }

    fn defaults(book: &AddressBook) -> Vec<&str> {
        book.addresses().iter().filter(|a| a.is_default).map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_initials() {
        let profile = UserProfile {
            name: "alex  johnson smith".into(),
            email: String::new(),
            phone: String::new(),
            avatar_url: String::new(),
        };
        assert_eq!(profile.initials(), "AJ");
    }

    #[test]
    fn test_single_default_is_enforced() {
        let book = AddressBook::new(vec![address("1", true), address("2", true)]);
        assert_eq!(defaults(&book), vec!["1"]);

        let book = AddressBook::new(vec![address("1", false), address("2", false)]);
        assert_eq!(defaults(&book), vec!["1"]);
    }

    #[test]
    fn test_removing_default_promotes_next() {
        let mut book = AddressBook::new(vec![address("1", true), address("2", false)]);
        assert_eq!(book.remove("1").map(|a| a.id), Some("1".to_string()));
        assert_eq!(defaults(&book), vec!["2"]);
        assert!(book.remove("missing").is_none());

        book.remove("2");
        assert!(book.default_address().is_none());
    }

    #[test]
    fn test_set_default() {
        let mut book = AddressBook::new(vec![address("1", true), address("2", false)]);
        assert!(book.set_default("2"));
        assert_eq!(defaults(&book), vec!["2"]);
        assert!(!book.set_default("3"));
        assert_eq!(defaults(&book), vec!["2"]);
    }
}
