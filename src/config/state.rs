use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::profit::ProfitView;
use crate::ui::{Section, User};

/// Session state that survives between invocations
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    #[serde(default)]
    pub section: Section,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default)]
    pub profit: ProfitView,
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

impl State {
    /// Badge count shown in the header: total units in the cart, saturating
    pub fn cart_count(&self) -> u32 {
        self.cart
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    pub fn add_to_cart(&mut self, product_id: &str, quantity: u32) -> Result<()> {
        match self.cart.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                    StoreError::CartOverflow {
                        product: product_id.to_string(),
                        quantity,
                    }
                })?;
            }
            None => self.cart.push(CartLine {
                product_id: product_id.to_string(),
                quantity,
            }),
        }
        Ok(())
    }

    /// Returns the removed line, if the product was in the cart
    pub fn remove_from_cart(&mut self, product_id: &str) -> Option<CartLine> {
        let idx = self.cart.iter().position(|l| l.product_id == product_id)?;
        Some(self.cart.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_count_saturates_across_lines() {
        let mut state = State::default();
        state.add_to_cart("P1", u32::MAX).unwrap();
        state.add_to_cart("P2", 1).unwrap();
        assert_eq!(state.cart_count(), u32::MAX);
    }

    #[test]
    fn adding_past_the_limit_is_rejected() {
        let mut state = State::default();
        state.add_to_cart("P1", u32::MAX).unwrap();
        assert!(matches!(
            state.add_to_cart("P1", 1),
            Err(StoreError::CartOverflow { .. })
        ));
        assert_eq!(state.cart[0].quantity, u32::MAX);
    }
}
