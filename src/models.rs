//! Packing List Models
//!
//! Plain data structures shared by the store and the components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest quantity offered by the add form
pub const MAX_QUANTITY: u32 = 20;

/// A single packing-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    pub fn new(id: u32, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }
}

/// Display order for the packing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Insertion order
    #[default]
    Input,
    Description,
    /// Unpacked first
    Packed,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Input, SortBy::Description, SortBy::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Input => "Sort by input order",
            SortBy::Description => "Sort by description",
            SortBy::Packed => "Sort by packed status",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortBy {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(SortBy::Input),
            "description" => Ok(SortBy::Description),
            "packed" => Ok(SortBy::Packed),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Values derived from the list on read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub num_items: usize,
    pub num_packed: usize,
    /// `None` for an empty list
    pub percentage_packed: Option<u32>,
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let num_items = items.len();
        let num_packed = items.iter().filter(|item| item.packed).count();
        let percentage_packed = (num_items > 0)
            .then(|| (100.0 * num_packed as f64 / num_items as f64).round() as u32);
        Self {
            num_items,
            num_packed,
            percentage_packed,
        }
    }

    /// Footer text shown under the list
    pub fn message(&self) -> String {
        match self.percentage_packed {
            None => "Start adding some items to your packing list 🚀".to_string(),
            // 199 of 200 rounds to 100 but is not everything
            Some(_) if self.num_packed == self.num_items => {
                "You got everything! Ready to go ✈️".to_string()
            }
            Some(percentage) => format!(
                "💼 You have {} items on your list, and you already packed {} ({}%)",
                self.num_items, self.num_packed, percentage
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(id: u32, packed: bool) -> Item {
        Item {
            packed,
            ..Item::new(id, format!("Item {}", id), 1)
        }
    }

    #[test]
    fn test_stats_one_of_three() {
        let items = vec![packed(1, true), packed(2, false), packed(3, false)];
        let stats = Stats::from_items(&items);

        assert_eq!(stats.num_items, 3);
        assert_eq!(stats.num_packed, 1);
        assert_eq!(stats.percentage_packed, Some(33));
    }

    #[test]
    fn test_stats_rounds_to_nearest() {
        let items = vec![packed(1, true), packed(2, true), packed(3, false)];
        assert_eq!(Stats::from_items(&items).percentage_packed, Some(67));
    }

    #[test]
    fn test_stats_empty() {
        let stats = Stats::from_items(&[]);
        assert_eq!(stats.num_items, 0);
        assert_eq!(stats.percentage_packed, None);
    }

    #[test]
    fn test_stats_messages() {
        assert_eq!(
            Stats::from_items(&[]).message(),
            "Start adding some items to your packing list 🚀"
        );
        assert_eq!(
            Stats::from_items(&[packed(1, true)]).message(),
            "You got everything! Ready to go ✈️"
        );
        assert_eq!(
            Stats::from_items(&[packed(1, true), packed(2, false)]).message(),
            "💼 You have 2 items on your list, and you already packed 1 (50%)"
        );
    }

    #[test]
    fn test_stats_rounding_to_hundred_is_not_everything() {
        let mut items: Vec<Item> = (1..=200).map(|id| packed(id, true)).collect();
        items[199].packed = false;
        let stats = Stats::from_items(&items);

        assert_eq!(stats.percentage_packed, Some(100));
        assert_eq!(
            stats.message(),
            "💼 You have 200 items on your list, and you already packed 199 (100%)"
        );
    }

    #[test]
    fn test_sort_by_parse() {
        for key in SortBy::ALL {
            assert_eq!(key.as_str().parse::<SortBy>(), Ok(key));
        }
        assert!("size".parse::<SortBy>().is_err());
    }
}
