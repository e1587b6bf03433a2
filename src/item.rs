use crate::vocabulary::Vocabulary;

// A column of the membership matrix. Ids are assigned by the Vocabulary in
// its label order, so comparing Items compares their labels.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn labels<'a>(items: &[Item], vocabulary: &'a Vocabulary) -> Vec<&'a str> {
        let mut sorted = items.to_vec();
        sorted.sort();
        sorted.iter().map(|&id| vocabulary.label_of(id)).collect()
    }
    pub fn item_vec_to_string(items: &[Item], vocabulary: &Vocabulary) -> String {
        Item::labels(items, vocabulary).join(", ")
    }
}
