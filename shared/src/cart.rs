//! Guest cart
//!
//! Client-side basket built from the guest menu and submitted as order
//! lines. Prices shown here are indicative; the backend snapshots the dish
//! when it accepts the order.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Dish, DishStatus, Id, OrderItemInput};

/// Upper bound on one line's quantity
pub const MAX_LINE_QUANTITY: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Dish {0} is not available")]
    DishUnavailable(Id),

    #[error("Quantity {quantity} exceeds the limit of {max}")]
    QuantityTooLarge { quantity: i32, max: i32 },

    #[error("Quantity must not be negative: {0}")]
    NegativeQuantity(i32),
}

/// One dish in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub dish_id: Id,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub quantity: i32,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Guest cart keyed by dish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeMap<Id, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity of a dish; zero removes the line
    pub fn set_quantity(&mut self, dish: &Dish, quantity: i32) -> Result<(), CartError> {
        if quantity < 0 {
            return Err(CartError::NegativeQuantity(quantity));
        }
        if quantity == 0 {
            self.lines.remove(&dish.id);
            return Ok(());
        }
        if dish.status != DishStatus::Available {
            return Err(CartError::DishUnavailable(dish.id));
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines.insert(
            dish.id,
            CartLine {
                dish_id: dish.id,
                name: dish.name.clone(),
                price: dish.price,
                image: dish.image.clone(),
                quantity,
            },
        );
        Ok(())
    }

    /// Add `quantity` more of a dish
    pub fn add(&mut self, dish: &Dish, quantity: i32) -> Result<(), CartError> {
        let total = self
            .quantity_of(dish.id)
            .checked_add(quantity)
            .ok_or(CartError::QuantityTooLarge {
                quantity,
                max: MAX_LINE_QUANTITY,
            })?;
        self.set_quantity(dish, total)
    }

    pub fn remove(&mut self, dish_id: Id) -> Option<CartLine> {
        self.lines.remove(&dish_id)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn quantity_of(&self, dish_id: Id) -> i32 {
        self.lines.get(&dish_id).map(|l| l.quantity).unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_quantity(&self) -> i32 {
        self.lines.values().map(|l| l.quantity).sum()
    }

    pub fn total_price(&self) -> Decimal {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    /// Order lines to submit, sorted by dish ID
    pub fn to_order_items(&self) -> Vec<OrderItemInput> {
        self.lines
            .values()
            .map(|l| OrderItemInput {
                dish_id: l.dish_id,
                quantity: l.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dish(id: Id, price: i64, status: DishStatus) -> Dish {
        Dish {
            id,
            name: format!("Dish {}", id),
            price: Decimal::from(price),
            description: String::new(),
            image: String::new(),
            status,
            category_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_and_totals() {
        let mut cart = Cart::new();
        let pho = dish(2, 45, DishStatus::Available);
        let tea = dish(1, 10, DishStatus::Available);

        cart.add(&pho, 2).unwrap();
        cart.add(&tea, 1).unwrap();
        cart.add(&pho, 1).unwrap();

        assert_eq!(cart.quantity_of(2), 3);
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.total_price(), Decimal::from(145));
        assert_eq!(
            cart.to_order_items(),
            vec![
                OrderItemInput { dish_id: 1, quantity: 1 },
                OrderItemInput { dish_id: 2, quantity: 3 },
            ]
        );
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let mut cart = Cart::new();
        let pho = dish(2, 45, DishStatus::Available);
        cart.set_quantity(&pho, 2).unwrap();
        cart.set_quantity(&pho, 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_unavailable_dish_refused() {
        let mut cart = Cart::new();
        let sold_out = dish(3, 30, DishStatus::Unavailable);
        assert_eq!(cart.add(&sold_out, 1), Err(CartError::DishUnavailable(3)));
        // Removing an unavailable dish is still allowed
        assert_eq!(cart.set_quantity(&sold_out, 0), Ok(()));
    }

    #[test]
    fn test_add_huge_quantity_refused() {
        let mut cart = Cart::new();
        let pho = dish(2, 45, DishStatus::Available);
        cart.add(&pho, 1).unwrap();

        assert_eq!(
            cart.add(&pho, i32::MAX),
            Err(CartError::QuantityTooLarge {
                quantity: i32::MAX,
                max: MAX_LINE_QUANTITY,
            })
        );
        assert_eq!(cart.quantity_of(2), 1);
    }

    #[test]
    fn test_quantity_limits() {
        let mut cart = Cart::new();
        let pho = dish(2, 45, DishStatus::Available);
        assert_eq!(
            cart.set_quantity(&pho, MAX_LINE_QUANTITY + 1),
            Err(CartError::QuantityTooLarge {
                quantity: MAX_LINE_QUANTITY + 1,
                max: MAX_LINE_QUANTITY
            })
        );
        assert_eq!(cart.set_quantity(&pho, -1), Err(CartError::NegativeQuantity(-1)));
        assert!(cart.is_empty());
    }
}
