use crate::item::Item;
use crate::rule::Rule;
use crate::vec_sets::intersects;

// Rules whose antecedent or consequent mentions any selected item. An empty
// selection is no filter at all and keeps every rule.
pub fn filter_rules_by_items(rules: &[Rule], selected: &[Item]) -> Vec<Rule> {
    if selected.is_empty() {
        return rules.to_vec();
    }
    let mut selected = selected.to_vec();
    selected.sort();
    selected.dedup();
    rules
        .iter()
        .filter(|rule| {
            intersects(&rule.antecedent, &selected) || intersects(&rule.consequent, &selected)
        })
        .cloned()
        .collect()
}
