use crate::item::Item;
use crate::itemset::Itemset;
use crate::matrix::MembershipMatrix;
use crate::rule::Rule;
use crate::vec_sets::difference;
use fnv::FnvHashMap;
use itertools::Itertools;
use tracing::debug;

// Support lookup for rule sides. Mined itemsets answer directly; anything
// else is counted from the matrix.
pub struct ItemsetSupport<'a> {
    supports: FnvHashMap<&'a [Item], f64>,
    matrix: &'a MembershipMatrix,
}

impl<'a> ItemsetSupport<'a> {
    pub fn new(itemsets: &'a [Itemset], matrix: &'a MembershipMatrix) -> ItemsetSupport<'a> {
        ItemsetSupport {
            supports: itemsets
                .iter()
                .map(|itemset| (itemset.items.as_slice(), itemset.support))
                .collect(),
            matrix,
        }
    }

    pub fn get(&self, items: &[Item]) -> f64 {
        match self.supports.get(items) {
            Some(&support) => support,
            None => self.matrix.support(items),
        }
    }
}

// For every itemset of two or more items, tries each non-empty proper
// subset as antecedent, largest subsets first. Rules under min_confidence
// are never built; min_lift is applied once all rules are generated.
pub fn generate_rules(
    itemsets: &[Itemset],
    matrix: &MembershipMatrix,
    min_confidence: f64,
    min_lift: f64,
) -> Vec<Rule> {
    let supports = ItemsetSupport::new(itemsets, matrix);
    let mut rules: Vec<Rule> = vec![];
    for itemset in itemsets.iter().filter(|i| i.len() > 1) {
        for antecedent_len in (1..itemset.len()).rev() {
            for antecedent in itemset.items.iter().cloned().combinations(antecedent_len) {
                let consequent = difference(&itemset.items, &antecedent);
                if let Some(rule) = Rule::make(
                    antecedent,
                    consequent,
                    itemset.support,
                    &supports,
                    min_confidence,
                ) {
                    rules.push(rule);
                }
            }
        }
    }

    let generated = rules.len();
    rules.retain(|rule| rule.lift >= min_lift);
    debug!(generated, kept = rules.len(), min_lift, "Generated rules");
    rules
}
