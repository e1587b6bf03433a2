use crate::item::Item;
use crate::rule::Rule;
use fnv::FnvHashSet;

// Keeps one rule per undirected item combination. The key is the sorted
// union of both sides, so A => C and C => A collide and the first one
// generated survives. Input order is preserved.
pub fn dedupe_rules(rules: Vec<Rule>) -> Vec<Rule> {
    let mut seen: FnvHashSet<Vec<Item>> = FnvHashSet::default();
    rules
        .into_iter()
        .filter(|rule| seen.insert(rule.items()))
        .collect()
}
