use crate::error::Result;
use crate::item::Item;
use crate::itemset::Itemset;
use crate::rule::Rule;
use crate::vocabulary::Vocabulary;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::io::Write;

// Headline counts for a mining run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub transactions: usize,
    pub items: usize,
    pub frequent_itemsets: usize,
    pub rules: usize,
}

// Highest support first; ties go to the smaller, then lexicographically
// first, itemset.
pub fn rank_itemsets_by_support(itemsets: &[Itemset]) -> Vec<Itemset> {
    let mut ranked = itemsets.to_vec();
    ranked.sort_by(|a, b| {
        Reverse(OrderedFloat(a.support))
            .cmp(&Reverse(OrderedFloat(b.support)))
            .then_with(|| a.cmp(b))
    });
    ranked
}

// Highest lift first, then highest confidence; remaining ties by items.
pub fn rank_rules_by_lift(rules: &[Rule]) -> Vec<Rule> {
    let mut ranked = rules.to_vec();
    ranked.sort_by_key(|rule| {
        (
            Reverse(OrderedFloat(rule.lift)),
            Reverse(OrderedFloat(rule.confidence)),
            rule.antecedent.clone(),
            rule.consequent.clone(),
        )
    });
    ranked
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub fn write_rules_csv<W: Write>(output: &mut W, rules: &[Rule], vocabulary: &Vocabulary) -> Result<()> {
    writeln!(output, "Antecedent,Consequent,Support,Confidence,Lift")?;
    for rule in rules {
        writeln!(
            output,
            "{},{},{},{},{}",
            quote(&Item::item_vec_to_string(&rule.antecedent, vocabulary)),
            quote(&Item::item_vec_to_string(&rule.consequent, vocabulary)),
            rule.support,
            rule.confidence,
            rule.lift
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{rank_itemsets_by_support, rank_rules_by_lift, write_rules_csv};
    use crate::encoder::encode;
    use crate::item::Item;
    use crate::itemset::Itemset;
    use crate::rule::Rule;

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&id| Item::with_id(id)).collect()
    }

    fn rule(antecedent: &[u32], consequent: &[u32], confidence: f64, lift: f64) -> Rule {
        Rule {
            antecedent: items(antecedent),
            consequent: items(consequent),
            support: 0.25,
            confidence,
            lift,
        }
    }

    #[test]
    fn test_rank_itemsets() {
        let itemsets = vec![
            Itemset::new(items(&[0, 1]), 0.5),
            Itemset::new(items(&[2]), 0.5),
            Itemset::new(items(&[0]), 0.75),
            Itemset::new(items(&[1]), 0.25),
        ];
        let ranked = rank_itemsets_by_support(&itemsets);
        let order: Vec<Vec<Item>> = ranked.into_iter().map(|i| i.items).collect();
        assert_eq!(
            order,
            vec![items(&[0]), items(&[2]), items(&[0, 1]), items(&[1])]
        );
    }

    #[test]
    fn test_rank_rules() {
        let rules = vec![
            rule(&[0], &[1], 0.5, 1.2),
            rule(&[2], &[1], 0.9, 2.0),
            rule(&[1], &[2], 0.6, 1.2),
        ];
        let ranked = rank_rules_by_lift(&rules);
        assert_eq!(ranked[0], rules[1]);
        assert_eq!(ranked[1], rules[2]);
        assert_eq!(ranked[2], rules[0]);
    }

    #[test]
    fn test_write_rules_csv() {
        let rows = vec![vec!["burger".to_owned(), "fries".to_owned(), "cola".to_owned()]];
        let (vocabulary, _) = encode(&rows);
        let burger = vocabulary.id_of("burger").unwrap();
        let cola = vocabulary.id_of("cola").unwrap();
        let fries = vocabulary.id_of("fries").unwrap();
        let rules = vec![Rule {
            antecedent: vec![burger, cola],
            consequent: vec![fries],
            support: 1.0,
            confidence: 1.0,
            lift: 1.0,
        }];

        let mut output: Vec<u8> = vec![];
        write_rules_csv(&mut output, &rules, &vocabulary).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Antecedent,Consequent,Support,Confidence,Lift\n\"burger, cola\",\"fries\",1,1,1\n"
        );
    }
}
