//! Report aggregator: totals, per-category rollups, out-of-stock listing.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::item::Item;

/// Summed quantity and value for all items sharing a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRollup {
    pub count: i64,
    pub value: Decimal,
}

/// Aggregated view over the full item collection.
///
/// Computed in a single pass with a decimal accumulator; binary floats never
/// touch the totals. Uncategorized items contribute to `total_value` but are
/// excluded from `categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_value: Decimal,
    pub categories: BTreeMap<String, CategoryRollup>,
    pub negative_items: Vec<Item>,
}

impl Report {
    pub fn build(items: &[Item]) -> Self {
        let mut total_value = Decimal::ZERO;
        let mut categories: BTreeMap<String, CategoryRollup> = BTreeMap::new();
        let mut negative_items = Vec::new();

        for item in items {
            let line_value = item.line_value();
            total_value += line_value;

            if item.is_out_of_stock() {
                negative_items.push(item.clone());
            }

            if let Some(category) = item.category() {
                let rollup = categories.entry(category.to_string()).or_default();
                rollup.count += item.quantity();
                rollup.value += line_value;
            }
        }

        total_value.rescale(2);
        for rollup in categories.values_mut() {
            rollup.value.rescale(2);
        }

        Self {
            total_value,
            categories,
            negative_items,
        }
    }

    /// Render the per-category table as CSV: header row, then one row per
    /// category in map iteration order. Records end in CRLF.
    ///
    /// `total_value` and `negative_items` are deliberately absent from the
    /// CSV output; only the rollup table is exported.
    pub fn to_csv(&self) -> String {
        self.write_csv().unwrap_or_default()
    }

    // Writes into an in-memory buffer, so the error paths are unreachable in
    // practice; kept as Results to satisfy the csv writer API.
    fn write_csv(&self) -> csv::Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        writer.write_record(["Category", "Count", "Value"])?;
        for (category, rollup) in &self.categories {
            writer.write_record([
                category.as_str(),
                &rollup.count.to_string(),
                &rollup.value.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ValidatedItem;
    use stockroom_core::ItemId;

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

    fn sample() -> Vec<Item> {
        vec![
            item(1, "Bolt", 10, 50, Some("Hardware")),
            item(2, "Nail", 0, 10, Some("Hardware")),
            item(3, "Pen", 5, 120, None),
        ]
    }

    #[test]
    fn totals_rollups_and_out_of_stock() {
        let report = Report::build(&sample());

        assert_eq!(report.total_value.to_string(), "11.00");

        assert_eq!(report.categories.len(), 1);
        let hardware = &report.categories["Hardware"];
        assert_eq!(hardware.count, 10);
        assert_eq!(hardware.value.to_string(), "5.00");

        assert_eq!(report.negative_items.len(), 1);
        assert_eq!(report.negative_items[0].name(), "Nail");
    }

    #[test]
    fn empty_collection_reports_zero() {
        let report = Report::build(&[]);
        assert_eq!(report.total_value.to_string(), "0.00");
        assert!(report.categories.is_empty());
        assert!(report.negative_items.is_empty());
    }

    #[test]
    fn uncategorized_items_count_toward_total_only() {
        let report = Report::build(&[item(1, "Pen", 5, 120, None)]);
        assert_eq!(report.total_value.to_string(), "6.00");
        assert!(report.categories.is_empty());
    }

    #[test]
    fn csv_has_header_and_one_row_per_category() {
        let report = Report::build(&sample());
        assert_eq!(report.to_csv(), "Category,Count,Value\r\nHardware,10,5.00\r\n");
    }

    #[test]
    fn csv_quotes_awkward_category_names() {
        let report = Report::build(&[item(1, "Widget", 2, 100, Some("Nuts, Bolts"))]);
        assert_eq!(
            report.to_csv(),
            "Category,Count,Value\r\n\"Nuts, Bolts\",2,2.00\r\n"
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_items() -> impl Strategy<Value = Vec<Item>> {
            proptest::collection::vec(
                (
                    "[A-Za-z]{1,8}",
                    0i64..50,
                    1i64..10_000,
                    proptest::option::of(prop_oneof!["Hardware", "Stationery"]),
                ),
                0..16,
            )
            .prop_map(|specs| {
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, quantity, cents, category))| {
                        item(i as i64 + 1, &name, quantity, cents, category.as_deref())
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: the grand total equals the sum of category values
            /// plus the value of uncategorized items.
            #[test]
            fn total_decomposes_over_categories(items in arb_items()) {
                let report = Report::build(&items);

                let mut expected = report
                    .categories
                    .values()
                    .fold(Decimal::ZERO, |acc, r| acc + r.value);
                for item in items.iter().filter(|i| i.category().is_none()) {
                    expected += item.line_value();
                }
                expected.rescale(2);

                prop_assert_eq!(report.total_value, expected);
            }

            /// Property: aggregation is deterministic.
            #[test]
            fn build_is_deterministic(items in arb_items()) {
                prop_assert_eq!(Report::build(&items), Report::build(&items));
            }
        }
    }
}
