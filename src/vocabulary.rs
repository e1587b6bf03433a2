use crate::item::Item;
use crate::transaction_reader::Transaction;
use fnv::FnvHashMap;

// Sorted set of every distinct label in the dataset. Fixed once built; item
// ids are positions in the sorted label list. If every label is an integer
// they are ordered by value, otherwise lexicographically.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    label_to_item: FnvHashMap<String, Item>,
    item_to_label: Vec<String>,
}

impl Vocabulary {
    pub fn from_transactions(transactions: &[Transaction]) -> Vocabulary {
        let mut labels: Vec<String> = transactions
            .iter()
            .flat_map(|transaction| transaction.iter().cloned())
            .collect();
        labels.sort();
        labels.dedup();
        ensure_sorted(&mut labels);

        let label_to_item = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), Item::with_id(index as u32)))
            .collect();
        Vocabulary {
            label_to_item,
            item_to_label: labels,
        }
    }
    pub fn id_of(&self, label: &str) -> Option<Item> {
        self.label_to_item.get(label).cloned()
    }
    pub fn label_of(&self, item: Item) -> &str {
        &self.item_to_label[item.as_index()]
    }
    // Maps a transaction onto sorted, distinct item ids.
    pub fn itemize(&self, transaction: &Transaction) -> Vec<Item> {
        let mut items: Vec<Item> = transaction
            .iter()
            .filter_map(|label| self.id_of(label))
            .collect();
        items.sort();
        items.dedup();
        items
    }
    pub fn items(&self) -> impl Iterator<Item = Item> {
        (0..self.item_to_label.len() as u32).map(Item::with_id)
    }
    pub fn labels(&self) -> &[String] {
        &self.item_to_label
    }
    pub fn len(&self) -> usize {
        self.item_to_label.len()
    }
    pub fn is_empty(&self) -> bool {
        self.item_to_label.is_empty()
    }
}

// Expects lexicographically sorted labels; reorders all-integer label sets
// by value. The sort is stable, so labels with equal values keep their
// lexicographic order.
fn ensure_sorted(labels: &mut [String]) {
    let all_items_convert_to_ints = labels.iter().all(|x| x.parse::<u32>().is_ok());
    if all_items_convert_to_ints {
        labels.sort_by_key(|x| x.parse::<u32>().unwrap_or(0));
    }
}
