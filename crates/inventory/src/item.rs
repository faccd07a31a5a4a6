use rust_decimal::Decimal;

use stockroom_core::{Entity, ItemId};

/// A set of fields that already passed validation (see [`crate::draft`]).
///
/// Holding validated fields in their own type keeps the store honest: it can
/// only persist data that went through the validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub category: Option<String>,
}

/// A single inventory record.
///
/// Fields are private; the store owns all instances and mutates them only via
/// [`Item::overwrite`] (full field overwrite, no partial-patch semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: i64,
    price: Decimal,
    category: Option<String>,
}

impl Item {
    /// Materialize an item from a store-assigned id and validated fields.
    pub fn new(id: ItemId, fields: ValidatedItem) -> Self {
        Self {
            id,
            name: fields.name,
            quantity: fields.quantity,
            price: fields.price,
            category: fields.category,
        }
    }

    /// Rebuild an item from raw persisted columns.
    ///
    /// Only the storage layer should call this; the values are trusted to
    /// have passed validation when they were written.
    pub fn from_parts(
        id: ItemId,
        name: String,
        quantity: i64,
        price: Decimal,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
            category,
        }
    }

    /// Replace every mutable field; the id never changes.
    pub fn overwrite(&mut self, fields: ValidatedItem) {
        self.name = fields.name;
        self.quantity = fields.quantity;
        self.price = fields.price;
        self.category = fields.category;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Stock value of this line: quantity × price.
    pub fn line_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }

    /// Out of stock (zero included; the store forbids negative quantities,
    /// but historical rows are still reported).
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity <= 0
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
