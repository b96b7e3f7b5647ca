// ============================================================================
// LISTING VIEWMODEL - Filter, sort and paginate restaurants
// ============================================================================
// Stateless derivation: the visible page is recomputed from the full set and
// the current query on every render.
// ============================================================================

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Restaurant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Rating,
    DeliveryTime,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rating, SortKey::DeliveryTime, SortKey::Name];

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::DeliveryTime => "deliveryTime",
            SortKey::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "Rating",
            SortKey::DeliveryTime => "Delivery Time",
            SortKey::Name => "Name (A-Z)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.value() == value)
    }

    fn compare(&self, a: &Restaurant, b: &Restaurant) -> Ordering {
        match self {
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            // Unparseable delivery times go last
            SortKey::DeliveryTime => match (a.delivery_minutes(), b.delivery_minutes()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub search: String,
    /// From the `cuisine` URL parameter
    pub cuisine: Option<String>,
    pub open_now: bool,
    pub free_delivery: bool,
    pub sort: SortKey,
}

impl ListingQuery {
    fn accepts(&self, restaurant: &Restaurant) -> bool {
        restaurant.matches_search(&self.search)
            && self.cuisine.as_deref().map_or(true, |c| c.trim().is_empty() || restaurant.has_cuisine(c))
            && (!self.open_now || restaurant.is_open_now)
            && (!self.free_delivery || restaurant.has_free_delivery)
    }
}

/// Pure filter-then-sort; stable, so ties keep their catalog order
pub fn filter_and_sort(restaurants: &[Restaurant], query: &ListingQuery) -> Vec<Restaurant> {
    let mut visible: Vec<Restaurant> = restaurants.iter().filter(|r| query.accepts(r)).cloned().collect();
    visible.sort_by(|a, b| query.sort.compare(a, b));
    visible
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Out-of-range pages are clamped into `1..=total_pages`
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_results = items.len();
    let total_pages = total_results.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_results);

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        total_pages,
        total_results,
    }
}

/// Listing page state: query plus the current page number
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    pub query: ListingQuery,
    pub page: usize,
    pub page_size: usize,
}

impl ListingState {
    pub fn new(query: ListingQuery, page_size: usize) -> Self {
        Self {
            query,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.query.search = search;
        self.page = 1;
    }

    pub fn set_open_now(&mut self, open_now: bool) {
        self.query.open_now = open_now;
        self.page = 1;
    }

    pub fn set_free_delivery(&mut self, free_delivery: bool) {
        self.query.free_delivery = free_delivery;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.page = 1;
    }

    /// Clears search, checkboxes and sort; the URL cuisine stays
    pub fn reset(&mut self) {
        self.query = ListingQuery {
            cuisine: self.query.cuisine.take(),
            ..ListingQuery::default()
        };
        self.page = 1;
    }

    /// Ignored unless `page` exists for the current results; returns whether it moved
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn view(&self, restaurants: &[Restaurant]) -> Page<Restaurant> {
        let visible = filter_and_sort(restaurants, &self.query);
        paginate(&visible, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo;

    fn names(restaurants: &[Restaurant]) -> Vec<&str> {
        restaurants.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_rating_desc() {
        let sorted = filter_and_sort(&demo::listing_restaurants(), &ListingQuery::default());
        assert_eq!(sorted.first().map(|r| r.name.as_str()), Some("Healthy Habits"));
        assert_eq!(sorted.last().map(|r| r.name.as_str()), Some("Dragon Wok"));
        assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_delivery_time_sort_uses_leading_number() {
        let query = ListingQuery { sort: SortKey::DeliveryTime, ..Default::default() };
        let sorted = filter_and_sort(&demo::listing_restaurants(), &query);
        assert_eq!(sorted[0].name, "Healthy Habits");
        assert_eq!(sorted[1].name, "Burger Bliss");
        assert_eq!(sorted.last().map(|r| r.name.as_str()), Some("Sea Feast"));

        let odd = vec![
            Restaurant::new("a", "a", "Later", &[], 4.0, "ASAP"),
            Restaurant::new("b", "b", "Sooner", &[], 4.0, "5-10 min"),
        ];
        assert_eq!(names(&filter_and_sort(&odd, &query)), vec!["Sooner", "Later"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let list = vec![
            Restaurant::new("a", "a", "beta", &[], 4.0, "10"),
            Restaurant::new("b", "b", "Alpha", &[], 4.0, "10"),
        ];
        let query = ListingQuery { sort: SortKey::Name, ..Default::default() };
        assert_eq!(names(&filter_and_sort(&list, &query)), vec!["Alpha", "beta"]);
    }

    #[test]
    fn test_filters_combine() {
        let query = ListingQuery {
            open_now: true,
            free_delivery: true,
            ..Default::default()
        };
        let visible = filter_and_sort(&demo::listing_restaurants(), &query);
        assert_eq!(names(&visible), vec!["Pasta Place", "Burger Bliss"]);

        let query = ListingQuery {
            search: "  ITALIAN ".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter_and_sort(&demo::listing_restaurants(), &query)), vec!["Pizza Paradise", "Pasta Place"]);

        let query = ListingQuery {
            cuisine: Some("vegan".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter_and_sort(&demo::listing_restaurants(), &query)), vec!["Veg Delight"]);
    }

    #[test]
    fn test_filter_sort_is_idempotent() {
        for sort in SortKey::ALL {
            let query = ListingQuery { sort, open_now: true, ..Default::default() };
            let once = filter_and_sort(&demo::listing_restaurants(), &query);
            let twice = filter_and_sort(&once, &query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=10).collect();
        let first = paginate(&items, 1, 8);
        assert_eq!(first.items.len(), 8);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next() && !first.has_previous());

        let second = paginate(&items, 2, 8);
        assert_eq!(second.items, vec![9, 10]);

        assert_eq!(paginate(&items, 9, 8).page, 2);
        let empty = paginate::<u32>(&[], 1, 8);
        assert_eq!((empty.page, empty.total_pages, empty.total_results), (1, 1, 0));
    }

    #[test]
    fn test_query_changes_reset_page() {
        let restaurants = demo::listing_restaurants();
        let mut state = ListingState::new(ListingQuery::default(), 8);
        let total_pages = state.view(&restaurants).total_pages;
        assert!(state.go_to_page(2, total_pages));

        state.set_search("a".into());
        assert_eq!(state.page, 1);

        state.go_to_page(2, total_pages);
        state.set_open_now(true);
        assert_eq!(state.page, 1);

        state.go_to_page(2, total_pages);
        state.set_free_delivery(true);
        assert_eq!(state.page, 1);

        state.go_to_page(2, total_pages);
        state.set_sort(SortKey::Name);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut state = ListingState::new(ListingQuery::default(), 8);
        assert!(!state.go_to_page(0, 2));
        assert!(!state.go_to_page(3, 2));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_reset_keeps_url_cuisine() {
        let query = ListingQuery {
            cuisine: Some("Pizza".into()),
            ..Default::default()
        };
        let mut state = ListingState::new(query, 8);
        state.set_search("taco".into());
        state.set_sort(SortKey::Name);
        state.go_to_page(2, 2);
        state.reset();

        assert_eq!(state.query.search, "");
        assert_eq!(state.query.sort, SortKey::Rating);
        assert_eq!(state.query.cuisine.as_deref(), Some("Pizza"));
        assert_eq!(state.page, 1);
    }
}
