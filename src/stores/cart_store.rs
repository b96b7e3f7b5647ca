// ============================================================================
// CART STORE - Shared cart state (Reducible, provided through context)
// ============================================================================
// Every page reads and mutates the same cart; totals are always derived.
// ============================================================================

use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

use crate::models::cart::{CartItem, CartTotals, PromoCode, MIN_QUANTITY};
use crate::models::{demo, Dish};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CartStore {
    pub items: Vec<CartItem>,
    pub special_instructions: String,
    pub promo: Option<PromoCode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    /// Merges into an existing line for the same dish
    Add { dish: Dish, quantity: u32 },
    /// Raw quantity from the numeric input; anything below 1 becomes 1
    SetQuantity { dish_id: String, quantity: i64 },
    Increment(String),
    Decrement(String),
    Remove(String),
    SetInstructions(String),
    ApplyPromo(PromoCode),
    ClearPromo,
    /// After a confirmed order
    Clear,
}

impl CartStore {
    /// Session start contents
    pub fn seeded() -> Self {
        Self {
            items: demo::initial_cart(),
            ..Self::default()
        }
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.items, self.promo.as_ref())
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line_mut(&mut self, dish_id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == dish_id)
    }

    /// Pure transition; unknown dish ids leave the cart untouched
    pub fn apply(mut self, action: CartAction) -> Self {
        match action {
            CartAction::Add { dish, quantity } => {
                if !dish.is_available {
                    log::warn!("🚫 {} is unavailable, not added", dish.name);
                    return self;
                }
                let quantity = quantity.max(MIN_QUANTITY);
                match self.line_mut(&dish.id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(quantity),
                    None => self.items.push(CartItem::new(dish, quantity)),
                }
            }
            CartAction::SetQuantity { dish_id, quantity } => {
                if let Some(line) = self.line_mut(&dish_id) {
                    line.quantity = u32::try_from(quantity.max(MIN_QUANTITY as i64)).unwrap_or(u32::MAX);
                }
            }
            CartAction::Increment(dish_id) => {
                if let Some(line) = self.line_mut(&dish_id) {
                    line.quantity = line.quantity.saturating_add(1);
                }
            }
            CartAction::Decrement(dish_id) => {
                if let Some(line) = self.line_mut(&dish_id) {
                    line.quantity = line.quantity.saturating_sub(1).max(MIN_QUANTITY);
                }
            }
            CartAction::Remove(dish_id) => {
                self.items.retain(|item| item.id() != dish_id);
            }
            CartAction::SetInstructions(text) => self.special_instructions = text,
            CartAction::ApplyPromo(promo) => self.promo = Some(promo),
            CartAction::ClearPromo => self.promo = None,
            CartAction::Clear => self = Self::default(),
        }
        self
    }
}

impl Reducible for CartStore {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("🛒 {:?}", action);
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dish(id: &str, cents: i64) -> Dish {
        Dish::new(id, id, cents, "")
    }

    fn store() -> CartStore {
        CartStore::default()
            .apply(CartAction::Add { dish: dish("a", 1000), quantity: 1 })
            .apply(CartAction::Add { dish: dish("b", 250), quantity: 2 })
    }

    #[test]
    fn test_seeded_cart() {
        let store = CartStore::seeded();
        assert_eq!(store.items.len(), 3);
        assert_eq!(store.item_count(), 4);
        assert_eq!(store.totals().subtotal, Decimal::new(4424, 2));
    }

    #[test]
    fn test_add_merges_same_dish() {
        let store = store().apply(CartAction::Add { dish: dish("a", 1000), quantity: 3 });
        assert_eq!(store.items.len(), 2);
        assert_eq!(store.items[0].quantity, 4);
    }

    #[test]
    fn test_unavailable_dish_is_not_added() {
        let store = CartStore::default().apply(CartAction::Add { dish: dish("x", 100).unavailable(), quantity: 1 });
        assert!(store.is_empty());
    }

    #[test]
    fn test_quantity_never_below_one() {
        let store = store()
            .apply(CartAction::Decrement("a".into()))
            .apply(CartAction::Decrement("a".into()));
        assert_eq!(store.items[0].quantity, 1);

        for raw in [0, -5] {
            let store = store.clone().apply(CartAction::SetQuantity { dish_id: "b".into(), quantity: raw });
            assert_eq!(store.items[1].quantity, 1);
        }

        let store = store.apply(CartAction::SetQuantity { dish_id: "b".into(), quantity: 7 });
        assert_eq!(store.items[1].quantity, 7);
    }

    #[test]
    fn test_remove_last_line_empties_totals() {
        let store = store()
            .apply(CartAction::Remove("a".into()))
            .apply(CartAction::Remove("b".into()));
        assert!(store.is_empty());
        assert_eq!(store.totals(), CartTotals::default());
    }

    #[test]
    fn test_promo_discount_and_clear() {
        let promo = PromoCode::parse("yummy10").unwrap();
        let store = store().apply(CartAction::ApplyPromo(promo));
        let totals = store.totals();
        assert_eq!(totals.subtotal, Decimal::new(1500, 2));
        assert_eq!(totals.discount, Decimal::new(150, 2));

        let store = store.apply(CartAction::ClearPromo);
        assert!(!store.totals().has_discount());

        let store = store
            .apply(CartAction::SetInstructions("no onions".into()))
            .apply(CartAction::Clear);
        assert_eq!(store, CartStore::default());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let before = store();
        let after = before.clone().apply(CartAction::Increment("zzz".into()));
        assert_eq!(before, after);
    }
}
