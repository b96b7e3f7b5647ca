use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Informational labels such as "Vegan"
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl Dish {
    /// `price_cents` keeps sample data exact ("15.99" -> 1599)
    pub fn new(id: &str, name: &str, price_cents: i64, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: Decimal::new(price_cents.max(0), 2),
            description: description.to_string(),
            image_url: String::new(),
            dietary_tags: Vec::new(),
            is_available: true,
        }
    }

    pub fn with_image(mut self, image_url: &str) -> Self {
        self.image_url = image_url.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.dietary_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    pub fn line_price(&self, quantity: u32) -> Decimal {
        self.price * Decimal::from(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_never_negative() {
        assert_eq!(Dish::new("d", "Free", -300, "").price, Decimal::ZERO);
    }

    #[test]
    fn test_line_price_is_exact() {
        let dish = Dish::new("d", "Salad", 1050, "");
        assert_eq!(dish.line_price(3), Decimal::new(3150, 2));
        assert_eq!(dish.line_price(0), Decimal::ZERO);
    }
}
