//! Wire records: serialization shapes for entities and reports.
//!
//! Entities stay free of format concerns; these free functions map them to
//! serde-friendly records. Prices and values serialize as decimal strings,
//! never binary floats.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::item::Item;
use crate::report::Report;

/// JSON shape of a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub category: Option<String>,
}

/// JSON shape of a per-category rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupRecord {
    pub count: i64,
    pub value: Decimal,
}

/// JSON shape of the summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub total_value: Decimal,
    pub categories: BTreeMap<String, RollupRecord>,
    pub negative_items: Vec<ItemRecord>,
}

/// Map an item to its wire record.
pub fn item_record(item: &Item) -> ItemRecord {
    ItemRecord {
        id: item.id(),
        name: item.name().to_string(),
        quantity: item.quantity(),
        price: item.price(),
        category: item.category().map(str::to_string),
    }
}

/// Map a report to its wire record.
pub fn report_record(report: &Report) -> ReportRecord {
    ReportRecord {
        total_value: report.total_value,
        categories: report
            .categories
            .iter()
            .map(|(name, rollup)| {
                (
                    name.clone(),
                    RollupRecord {
                        count: rollup.count,
                        value: rollup.value,
                    },
                )
            })
            .collect(),
        negative_items: report.negative_items.iter().map(item_record).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ValidatedItem;

    fn item(id: i64, name: &str, quantity: i64, cents: i64, category: Option<&str>) -> Item {
        Item::new(
            ItemId::new(id),
            ValidatedItem {
                name: name.to_string(),
                quantity,
                price: Decimal::new(cents, 2),
                category: category.map(str::to_string),
            },
        )
    }

    #[test]
    fn item_serializes_with_string_price_and_nullable_category() {
        let record = item_record(&item(3, "Pen", 5, 120, None));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Pen",
                "quantity": 5,
                "price": "1.20",
                "category": null,
            })
        );
    }

    #[test]
    fn report_json_round_trips() {
        let items = vec![
            item(1, "Bolt", 10, 50, Some("Hardware")),
            item(2, "Nail", 0, 10, Some("Hardware")),
            item(3, "Pen", 5, 120, None),
        ];
        let record = report_record(&Report::build(&items));

        let text = serde_json::to_string(&record).unwrap();
        let parsed: ReportRecord = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, record);
        assert_eq!(parsed.total_value.to_string(), "11.00");
        assert_eq!(parsed.categories["Hardware"].count, 10);
        assert_eq!(parsed.negative_items.len(), 1);
        assert_eq!(parsed.negative_items[0].name, "Nail");
    }
}
