use crate::apriori::mine_frequent_itemsets;
use crate::config::MiningParams;
use crate::dedupe::dedupe_rules;
use crate::encoder::encode;
use crate::error::Result;
use crate::filter::filter_rules_by_items;
use crate::generate_rules::generate_rules;
use crate::item::Item;
use crate::itemset::Itemset;
use crate::matrix::MembershipMatrix;
use crate::report::Summary;
use crate::rule::Rule;
use crate::transaction_reader::{load_transactions, Transaction};
use crate::vocabulary::Vocabulary;
use fnv::FnvHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::Instant;
use tracing::info;

// The loaded transactions together with their encoding. Immutable once built.
pub struct Dataset {
    transactions: Vec<Transaction>,
    vocabulary: Vocabulary,
    matrix: MembershipMatrix,
    fingerprint: u64,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Dataset> {
        Ok(Dataset::from_transactions(load_transactions(path)?))
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Dataset {
        let (vocabulary, matrix) = encode(&transactions);
        let mut hasher = FnvHasher::default();
        transactions.hash(&mut hasher);
        Dataset {
            fingerprint: hasher.finish(),
            transactions,
            vocabulary,
            matrix,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
    pub fn matrix(&self) -> &MembershipMatrix {
        &self.matrix
    }
    // Identity of the transaction list; equal lists give equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MiningResult {
    pub itemsets: Vec<Itemset>,
    pub rules: Vec<Rule>,
}

impl MiningResult {
    // Rules mentioning any of `labels`; no labels means no filter. Labels
    // outside the vocabulary match nothing.
    pub fn select<S: AsRef<str>>(&self, vocabulary: &Vocabulary, labels: &[S]) -> Vec<Rule> {
        if labels.is_empty() {
            return self.rules.clone();
        }
        let selected: Vec<Item> = labels
            .iter()
            .filter_map(|label| vocabulary.id_of(label.as_ref()))
            .collect();
        if selected.is_empty() {
            return vec![];
        }
        filter_rules_by_items(&self.rules, &selected)
    }

    pub fn summary(&self, dataset: &Dataset, rules: &[Rule]) -> Summary {
        Summary {
            transactions: dataset.matrix().num_transactions(),
            items: dataset.vocabulary().len(),
            frequent_itemsets: self.itemsets.len(),
            rules: rules.len(),
        }
    }
}

pub fn mine(dataset: &Dataset, params: &MiningParams) -> Result<MiningResult> {
    params.validate()?;
    let timer = Instant::now();
    let matrix = dataset.matrix();
    let itemsets = mine_frequent_itemsets(matrix, params.min_support, params.max_len);
    let rules = generate_rules(&itemsets, matrix, params.min_confidence, params.min_lift);
    let rules = dedupe_rules(rules);
    info!(
        itemsets = itemsets.len(),
        rules = rules.len(),
        min_support = params.min_support,
        min_confidence = params.min_confidence,
        min_lift = params.min_lift,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Mined association rules"
    );
    Ok(MiningResult { itemsets, rules })
}

#[cfg(test)]
mod tests {
    use super::{mine, Dataset};
    use crate::config::MiningParams;
    use crate::error::MiningError;

    fn dataset(rows: &[&[&str]]) -> Dataset {
        Dataset::from_transactions(
            rows.iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn params(min_support: f64, min_confidence: f64, min_lift: f64) -> MiningParams {
        MiningParams {
            min_support,
            min_confidence,
            min_lift,
            max_len: 3,
        }
    }

    #[test]
    fn test_mine_scenario() {
        let data = dataset(&[&["A", "B"], &["A", "B", "C"], &["A"], &["B", "C"]]);
        let result = mine(&data, &params(0.25, 0.5, 0.0)).unwrap();
        assert_eq!(result.itemsets.len(), 7);
        // A => B, C => A, B => C, A B => C.
        assert_eq!(result.rules.len(), 4);

        let summary = result.summary(&data, &result.rules);
        assert_eq!(summary.transactions, 4);
        assert_eq!(summary.items, 3);
        assert_eq!(summary.frequent_itemsets, 7);
        assert_eq!(summary.rules, 4);

        let touching_c = result.select(data.vocabulary(), &["C"]);
        assert_eq!(touching_c.len(), 3);
        assert_eq!(result.summary(&data, &touching_c).rules, 3);
        assert!(result.select(data.vocabulary(), &["shake"]).is_empty());
        assert_eq!(touching_c.len(), result.select(data.vocabulary(), &["C", "shake"]).len());

        let none: &[&str] = &[];
        assert_eq!(result.select(data.vocabulary(), none), result.rules);
        assert_eq!(result.summary(&data, &result.select(data.vocabulary(), none)).rules, 4);
    }

    #[test]
    fn test_mine_empty_dataset() {
        let data = dataset(&[]);
        let result = mine(&data, &MiningParams::default()).unwrap();
        assert!(data.vocabulary().is_empty());
        assert!(result.itemsets.is_empty());
        assert!(result.rules.is_empty());
    }

    #[test]
    fn test_mine_rejects_invalid_params() {
        let data = dataset(&[&["A"]]);
        match mine(&data, &params(0.0, 0.5, 1.0)) {
            Err(MiningError::InvalidParameter(_)) => {}
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_mine_is_deterministic() {
        let rows: &[&[&str]] = &[
            &["burger", "fries", "cola"],
            &["burger", "fries"],
            &["fries", "cola"],
            &["burger", "cola", "shake"],
            &["burger", "fries", "shake"],
            &["cola", "shake"],
        ];
        let first = mine(&dataset(rows), &params(0.1, 0.3, 1.0)).unwrap();
        let second = mine(&dataset(rows), &params(0.1, 0.3, 1.0)).unwrap();
        assert_eq!(first, second);
        for (a, b) in first.rules.iter().zip(second.rules.iter()) {
            assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
            assert_eq!(a.lift.to_bits(), b.lift.to_bits());
        }
    }

    #[test]
    fn test_fingerprint_tracks_contents() {
        let a = dataset(&[&["A", "B"], &["C"]]);
        let b = dataset(&[&["A", "B"], &["C"]]);
        let c = dataset(&[&["A"], &["B", "C"]]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
