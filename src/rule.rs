use crate::generate_rules::ItemsetSupport;
use crate::item::Item;
use crate::vec_sets::union;
use crate::vocabulary::Vocabulary;
use std::hash::{Hash, Hasher};
use tracing::trace;

#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if the rule
    // would be above the min_confidence threshold. Both sides must be
    // sorted; `itemset_support` is the support of their union.
    pub fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        itemset_support: f64,
        supports: &ItemsetSupport,
        min_confidence: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }

        let a_sup = supports.get(&antecedent);
        let c_sup = supports.get(&consequent);
        if itemset_support <= 0.0 || a_sup <= 0.0 || c_sup <= 0.0 {
            trace!(
                ?antecedent,
                ?consequent,
                "Skipping rule with zero support side"
            );
            return None;
        }

        let confidence = itemset_support / a_sup;
        if confidence < min_confidence {
            return None;
        }
        let lift = confidence / c_sup;

        Some(Rule {
            antecedent,
            consequent,
            support: itemset_support,
            confidence,
            lift,
        })
    }

    // All items on either side, sorted.
    pub fn items(&self) -> Vec<Item> {
        union(&self.antecedent, &self.consequent)
    }

    pub fn to_string(&self, vocabulary: &Vocabulary) -> String {
        [
            Item::item_vec_to_string(&self.antecedent, vocabulary),
            " => ".to_owned(),
            Item::item_vec_to_string(&self.consequent, vocabulary),
        ]
        .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;
    use crate::encoder::encode;
    use crate::generate_rules::ItemsetSupport;
    use crate::item::Item;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["A".to_owned(), "B".to_owned()],
            vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            vec!["A".to_owned()],
            vec!["B".to_owned(), "C".to_owned()],
        ]
    }

    #[test]
    fn test_make() {
        let (vocabulary, matrix) = encode(&rows());
        let supports = ItemsetSupport::new(&[], &matrix);
        let a = vocabulary.id_of("A").unwrap();
        let b = vocabulary.id_of("B").unwrap();

        let rule = Rule::make(vec![a], vec![b], 0.5, &supports, 0.5).unwrap();
        assert!((rule.confidence - 0.5 / 0.75).abs() < 1e-12);
        assert!((rule.lift - (0.5 / 0.75) / 0.75).abs() < 1e-12);
        assert_eq!(rule.support, 0.5);
        assert_eq!(rule.items(), vec![a, b]);
        assert_eq!(rule.to_string(&vocabulary), "A => B");

        assert!(Rule::make(vec![a], vec![b], 0.5, &supports, 0.7).is_none());
        assert!(Rule::make(vec![], vec![b], 0.5, &supports, 0.1).is_none());
    }

    #[test]
    fn test_zero_support_side_is_skipped() {
        let (_, matrix) = encode(&rows());
        let supports = ItemsetSupport::new(&[], &matrix);
        // Item 9 is outside the vocabulary, so its support is zero.
        let ghost = Item::with_id(9);
        let a = Item::with_id(0);
        assert!(Rule::make(vec![ghost], vec![a], 0.25, &supports, 0.1).is_none());
        assert!(Rule::make(vec![a], vec![ghost], 0.25, &supports, 0.1).is_none());
        assert!(Rule::make(vec![a], vec![Item::with_id(1)], 0.0, &supports, 0.0).is_none());
    }
}
