use crate::item::Item;
use std::cmp;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug)]
pub struct Itemset {
    pub items: Vec<Item>,
    pub support: f64,
}

// Identity is the item set alone; support is derived from it.
impl PartialEq for Itemset {
    fn eq(&self, other: &Itemset) -> bool {
        self.items == other.items
    }
}

impl Eq for Itemset {}

impl Hash for Itemset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl PartialOrd for Itemset {
    fn partial_cmp(&self, other: &Itemset) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Itemset {
    fn cmp(&self, other: &Itemset) -> cmp::Ordering {
        if other.len() != self.len() {
            return self.len().cmp(&other.len());
        }
        self.items.cmp(&other.items)
    }
}

impl Itemset {
    pub fn new(mut items: Vec<Item>, support: f64) -> Itemset {
        items.sort();
        items.dedup();
        Itemset { items, support }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }
}
