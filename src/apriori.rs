// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::item::Item;
use crate::itemset::Itemset;
use crate::matrix::MembershipMatrix;
use fnv::FnvHashSet;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

// Level-wise frequent itemset search. Level k candidates are joined from
// pairs of frequent (k-1)-itemsets sharing their first k-2 items, and are
// only counted if every (k-1)-subset is frequent.
//
// Output is level 1 first, then level 2, and so on; each level is in
// lexicographic item order. The result depends only on the matrix and the
// thresholds.
pub fn mine_frequent_itemsets(
    matrix: &MembershipMatrix,
    min_support: f64,
    max_len: usize,
) -> Vec<Itemset> {
    let mut itemsets: Vec<Itemset> = vec![];
    if matrix.num_transactions() == 0 || max_len == 0 {
        return itemsets;
    }

    let mut level: Vec<Itemset> = (0..matrix.num_items())
        .map(|index| vec![Item::with_id(index as u32)])
        .filter_map(|items| count_candidate(matrix, items, min_support))
        .collect();
    debug!(
        level = 1,
        candidates = matrix.num_items(),
        frequent = level.len(),
        "Counted itemsets"
    );

    let mut k = 2;
    while k <= max_len && !level.is_empty() {
        let candidates = generate_candidates(&level);
        let num_candidates = candidates.len();
        let next_level: Vec<Itemset> = candidates
            .into_par_iter()
            .filter_map(|items| count_candidate(matrix, items, min_support))
            .collect();
        debug!(
            level = k,
            candidates = num_candidates,
            frequent = next_level.len(),
            "Counted itemsets"
        );
        itemsets.append(&mut level);
        level = next_level;
        k += 1;
    }
    itemsets.append(&mut level);
    itemsets
}

fn count_candidate(matrix: &MembershipMatrix, items: Vec<Item>, min_support: f64) -> Option<Itemset> {
    let support = matrix.support(&items);
    if support >= min_support {
        Some(Itemset { items, support })
    } else {
        None
    }
}

// `frequent` holds sorted itemsets of one size, in lexicographic order.
fn generate_candidates(frequent: &[Itemset]) -> Vec<Vec<Item>> {
    let size = match frequent.first() {
        Some(itemset) => itemset.len(),
        None => return vec![],
    };
    let known: FnvHashSet<&[Item]> = frequent.iter().map(|i| i.items.as_slice()).collect();

    let mut candidates: Vec<Vec<Item>> = vec![];
    let groups = frequent
        .iter()
        .group_by(|itemset| itemset.items[..size - 1].to_vec());
    for (prefix, group) in &groups {
        let group: Vec<&Itemset> = group.collect();
        for (a, b) in group.iter().tuple_combinations() {
            let mut candidate: Vec<Item> = Vec::with_capacity(size + 1);
            candidate.extend_from_slice(&prefix);
            candidate.push(a.items[size - 1]);
            candidate.push(b.items[size - 1]);
            if all_subsets_frequent(&candidate, &known) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

// Removing either of the last two items gives one of the joined parents,
// so only the other subsets need checking.
fn all_subsets_frequent(candidate: &[Item], known: &FnvHashSet<&[Item]>) -> bool {
    let last_two = candidate.len().saturating_sub(2);
    (0..last_two).all(|skip| {
        let subset: Vec<Item> = candidate
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != skip)
            .map(|(_, &item)| item)
            .collect();
        known.contains(subset.as_slice())
    })
}
