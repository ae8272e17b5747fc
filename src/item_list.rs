//! Item List
//!
//! The ordered packing list and the operations on it. Pure Rust, no DOM,
//! so the reactive store in `store.rs` only wraps it.

use crate::models::{Item, SortBy, Stats, MAX_QUANTITY};

/// Reasons `ItemList::add` refuses an item
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item description is empty")]
    EmptyDescription,
    #[error("quantity {0} is outside 1..={max}", max = MAX_QUANTITY)]
    QuantityOutOfRange(u32),
}

/// Insertion-ordered packing items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
    /// Next id to hand out; never decreases, so ids are not reused after remove/clear
    next_id: u32,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Passports, socks and a charger, the first two already packed
    pub fn with_demo_items() -> Self {
        let mut list = Self::new();
        for (description, quantity, packed) in
            [("Passports", 2, true), ("Socks", 12, true), ("Charger", 1, false)]
        {
            if let Ok(item) = list.add(description, quantity) {
                if packed {
                    list.toggle(item.id);
                }
            }
        }
        list
    }

    /// Append a new unpacked item and return a copy of it.
    ///
    /// An empty description or an out-of-range quantity leaves the list untouched.
    pub fn add(&mut self, description: &str, quantity: u32) -> Result<Item, ItemError> {
        if description.is_empty() {
            return Err(ItemError::EmptyDescription);
        }
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(ItemError::QuantityOutOfRange(quantity));
        }

        let item = Item::new(self.next_id, description, quantity);
        self.next_id += 1;
        self.items.push(item.clone());
        log::debug!("[STORE] Added item {} ({})", item.id, item.description);
        Ok(item)
    }

    /// Remove the item with `id`; unknown ids are ignored
    pub fn remove(&mut self, id: u32) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            log::debug!("[STORE] Removed item {}", id);
        }
    }

    /// Flip `packed` on the item with `id`; unknown ids are ignored
    pub fn toggle(&mut self, id: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.packed = !item.packed;
            log::debug!("[STORE] Item {} packed={}", id, item.packed);
        }
    }

    /// Drop every item. Confirmation is up to the caller.
    pub fn clear(&mut self) {
        log::debug!("[STORE] Cleared {} items", self.items.len());
        self.items.clear();
    }

    /// Items in the requested display order; the list itself keeps insertion order
    pub fn sorted_by(&self, sort_by: SortBy) -> Vec<Item> {
        let mut view = self.items.clone();
        match sort_by {
            SortBy::Input => {}
            SortBy::Description => view.sort_by(|a, b| a.description.cmp(&b.description)),
            // stable: insertion order survives inside each group
            SortBy::Packed => view.sort_by_key(|item| item.packed),
        }
        view
    }

    pub fn stats(&self) -> Stats {
        Stats::from_items(&self.items)
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[cfg(test)]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_add_empty_description_is_rejected() {
        let mut list = ItemList::new();
        list.add("Socks", 2).unwrap();
        let before = list.clone();

        assert_eq!(list.add("", 1), Err(ItemError::EmptyDescription));
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_whitespace_description_is_kept() {
        let mut list = ItemList::new();
        let item = list.add("   ", 1).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(item.id).unwrap().description, "   ");
    }

    #[test]
    fn test_add_quantity_bounds() {
        let mut list = ItemList::new();

        assert_eq!(list.add("Hat", 0), Err(ItemError::QuantityOutOfRange(0)));
        assert_eq!(list.add("Hat", 21), Err(ItemError::QuantityOutOfRange(21)));
        assert!(list.is_empty());

        assert!(list.add("Hat", 1).is_ok());
        assert!(list.add("Pens", 20).is_ok());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut list = ItemList::new();
        let names = ["Passports", "Socks", "Charger", "Book"];
        for name in names {
            list.add(name, 1).unwrap();
        }

        let descriptions: Vec<&str> = list.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(descriptions, names);
        assert!(list.items().iter().all(|item| !item.packed));
    }

    #[test]
    fn test_ids_unique_after_remove_and_clear() {
        let mut list = ItemList::new();
        let a = list.add("A", 1).unwrap();
        let b = list.add("B", 1).unwrap();
        list.remove(b.id);
        let c = list.add("C", 1).unwrap();
        assert_ne!(c.id, b.id);
        assert_ne!(c.id, a.id);

        list.clear();
        let d = list.add("D", 1).unwrap();
        assert!(d.id > c.id);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = ItemList::new();
        let item = list.add("Charger", 1).unwrap();

        list.toggle(item.id);
        assert!(list.get(item.id).unwrap().packed);
        list.toggle(item.id);
        assert!(!list.get(item.id).unwrap().packed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = ItemList::with_demo_items();
        let before = list.clone();
        list.toggle(999);
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_twice() {
        let mut list = ItemList::new();
        let a = list.add("A", 1).unwrap();
        let b = list.add("B", 1).unwrap();

        list.remove(a.id);
        assert_eq!(ids(list.items()), vec![b.id]);
        let after_first = list.clone();
        list.remove(a.id);
        assert_eq!(list, after_first);
    }

    #[test]
    fn test_clear() {
        let mut list = ItemList::with_demo_items();
        assert_eq!(list.len(), 3);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.stats().percentage_packed, None);
    }

    #[test]
    fn test_sorted_by_description_does_not_mutate() {
        let mut list = ItemList::new();
        for name in ["Socks", "Charger", "Passports"] {
            list.add(name, 1).unwrap();
        }
        let input_order = ids(&list.sorted_by(SortBy::Input));

        let sorted = list.sorted_by(SortBy::Description);
        let names: Vec<&str> = sorted.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["Charger", "Passports", "Socks"]);

        assert_eq!(ids(&list.sorted_by(SortBy::Input)), input_order);
    }

    #[test]
    fn test_sorted_by_packed_is_stable() {
        let mut list = ItemList::new();
        let a = list.add("A", 1).unwrap();
        let b = list.add("B", 1).unwrap();
        let c = list.add("C", 1).unwrap();
        let d = list.add("D", 1).unwrap();
        list.toggle(a.id);
        list.toggle(c.id);

        assert_eq!(ids(&list.sorted_by(SortBy::Packed)), vec![b.id, d.id, a.id, c.id]);
    }

    #[test]
    fn test_demo_items_stats() {
        let list = ItemList::with_demo_items();
        let stats = list.stats();
        assert_eq!(stats.num_items, 3);
        assert_eq!(stats.num_packed, 2);
        assert_eq!(stats.percentage_packed, Some(67));
    }
}
