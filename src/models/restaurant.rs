use serde::{Deserialize, Serialize};

use super::dish::Dish;

pub const MAX_RATING: f32 = 5.0;

/// Restaurant as shown on cards and in the listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub image_url: String,
    pub cuisine_types: Vec<String>,
    pub rating: f32,
    /// Free text such as "25-35 min"
    pub delivery_time: String,
    #[serde(default)]
    pub promotion_tag: Option<String>,
    #[serde(default)]
    pub is_open_now: bool,
    #[serde(default)]
    pub has_free_delivery: bool,
}

impl Restaurant {
    pub fn new(id: &str, slug: &str, name: &str, cuisine_types: &[&str], rating: f32, delivery_time: &str) -> Self {
        Self {
            id: id.to_string(),
            slug: slug.to_string(),
            name: name.to_string(),
            image_url: String::new(),
            cuisine_types: cuisine_types.iter().map(|c| c.to_string()).collect(),
            rating: clamp_rating(rating),
            delivery_time: delivery_time.to_string(),
            promotion_tag: None,
            is_open_now: true,
            has_free_delivery: false,
        }
    }

    pub fn with_image(mut self, image_url: &str) -> Self {
        self.image_url = image_url.to_string();
        self
    }

    pub fn with_promotion(mut self, tag: &str) -> Self {
        self.promotion_tag = Some(tag.to_string());
        self
    }

    pub fn with_flags(mut self, is_open_now: bool, has_free_delivery: bool) -> Self {
        self.is_open_now = is_open_now;
        self.has_free_delivery = has_free_delivery;
        self
    }

    /// Leading number of the delivery-time text ("25-35 min" -> 25)
    pub fn delivery_minutes(&self) -> Option<u32> {
        let digits: String = self
            .delivery_time
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Case-insensitive match against the name or any cuisine tag
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.cuisine_types.iter().any(|c| c.to_lowercase().contains(&term))
    }

    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine_types.iter().any(|c| c.eq_ignore_ascii_case(cuisine.trim()))
    }

    pub fn menu_href(&self) -> String {
        format!("/restaurant-menu?slug={}", self.slug)
    }
}

fn clamp_rating(rating: f32) -> f32 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub dishes: Vec<Dish>,
}

/// Full restaurant page: header details plus categorised menu
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantMenu {
    pub slug: String,
    pub name: String,
    pub image_url: String,
    pub cuisine_types: Vec<String>,
    pub rating: f32,
    pub delivery_time: String,
    pub address: String,
    pub description: String,
    pub categories: Vec<MenuCategory>,
}

impl RestaurantMenu {
    pub fn find_dish(&self, dish_id: &str) -> Option<&Dish> {
        self.categories
            .iter()
            .flat_map(|category| category.dishes.iter())
            .find(|dish| dish.id == dish_id)
    }

    pub fn dish_count(&self) -> usize {
        self.categories.iter().map(|c| c.dishes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_clamped() {
        assert_eq!(Restaurant::new("1", "a", "A", &[], 7.5, "").rating, 5.0);
        assert_eq!(Restaurant::new("1", "a", "A", &[], -1.0, "").rating, 0.0);
        assert_eq!(Restaurant::new("1", "a", "A", &[], f32::NAN, "").rating, 0.0);
        assert_eq!(Restaurant::new("1", "a", "A", &[], 4.2, "").rating, 4.2);
    }

    #[test]
    fn test_delivery_minutes_reads_leading_token() {
        let r = |time: &str| Restaurant::new("1", "a", "A", &[], 4.0, time);
        assert_eq!(r("25-35 min").delivery_minutes(), Some(25));
        assert_eq!(r(" 5 min").delivery_minutes(), Some(5));
        assert_eq!(r("about 20 min").delivery_minutes(), None);
        assert_eq!(r("").delivery_minutes(), None);
    }

    #[test]
    fn test_search_covers_name_and_cuisines() {
        let r = Restaurant::new("1", "sushi-central", "Sushi Central", &["Sushi", "Japanese"], 4.8, "30-40 min");
        assert!(r.matches_search("central"));
        assert!(r.matches_search("JAPAN"));
        assert!(r.matches_search("  "));
        assert!(!r.matches_search("pizza"));
        assert!(r.has_cuisine("japanese"));
        assert!(!r.has_cuisine("japan"));
        assert_eq!(r.menu_href(), "/restaurant-menu?slug=sushi-central");
    }
}
