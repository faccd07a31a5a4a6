//! Validation layer: raw request input to validated fields.
//!
//! Every mutation path (JSON API, HTML forms) funnels through [`ItemDraft`]
//! before anything reaches the store.

use core::str::FromStr;

use rust_decimal::Decimal;

use stockroom_core::{DomainError, DomainResult};

use crate::item::ValidatedItem;

/// Raw, untyped item input as it arrives at the boundary.
///
/// All fields are text (or absent); [`ItemDraft::validate`] coerces and
/// checks them. Pure function of input, no side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

impl ItemDraft {
    pub fn validate(self) -> DomainResult<ValidatedItem> {
        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(DomainError::missing("name")),
        };

        let quantity_raw = self.quantity.ok_or(DomainError::missing("quantity"))?;
        let price_raw = self.price.ok_or(DomainError::missing("price"))?;

        let quantity = i64::from_str(quantity_raw.trim())
            .map_err(|e| DomainError::coercion("quantity", e.to_string()))?;
        let mut price = Decimal::from_str(price_raw.trim())
            .map_err(|e| DomainError::coercion("price", e.to_string()))?;

        if quantity < 0 {
            return Err(DomainError::NegativeQuantity);
        }
        if price <= Decimal::ZERO {
            return Err(DomainError::NonPositivePrice);
        }

        // Prices carry exactly two fractional digits, like the persisted column.
        price.rescale(2);

        // An empty category field means "uncategorized", not an empty label.
        let category = self.category.filter(|c| !c.trim().is_empty());

        Ok(ValidatedItem {
            name,
            quantity,
            price,
            category,
        })
    }
}
