use crate::item::Item;

// Boolean transaction x item matrix, stored by column: for each item, the
// ascending list of transaction ids containing it. cell[t][i] is true iff
// t appears in column i.
#[derive(Clone, Debug, Default)]
pub struct MembershipMatrix {
    columns: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl MembershipMatrix {
    pub fn new(num_items: usize) -> MembershipMatrix {
        MembershipMatrix {
            columns: vec![vec![]; num_items],
            transaction_count: 0,
        }
    }
    // Appends a row. `items` must be sorted and distinct.
    pub fn insert(&mut self, items: &[Item]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        for item in items {
            let item_index = item.as_index();
            if self.columns.len() <= item_index {
                self.columns.resize(item_index + 1, vec![]);
            }
            self.columns[item_index].push(tid);
        }
    }
    pub fn num_transactions(&self) -> usize {
        self.transaction_count
    }
    pub fn num_items(&self) -> usize {
        self.columns.len()
    }
    pub fn contains(&self, tid: usize, item: Item) -> bool {
        match self.columns.get(item.as_index()) {
            Some(column) => column.binary_search(&tid).is_ok(),
            None => false,
        }
    }
    pub fn row(&self, tid: usize) -> Vec<bool> {
        (0..self.columns.len())
            .map(|index| self.contains(tid, Item::with_id(index as u32)))
            .collect()
    }

    // Number of rows in which every column in `items` is set.
    pub fn count(&self, items: &[Item]) -> usize {
        if items.is_empty() {
            return 0;
        }

        let mut tid_lists: Vec<&Vec<usize>> = Vec::with_capacity(items.len());
        for item in items {
            match self.columns.get(item.as_index()) {
                Some(column) => tid_lists.push(column),
                None => return 0,
            }
        }
        if tid_lists.len() == 1 {
            return tid_lists[0].len();
        }
        // Walk the shortest list, so we probe as few tids as possible.
        tid_lists.sort_by_key(|list| list.len());

        let mut p: Vec<usize> = vec![0; tid_lists.len()];

        // For each tid in the first list of tids.
        let mut count = 0;
        for &tid in tid_lists[0].iter() {
            // Check whether all the other tid lists contain that tid.
            let mut tid_in_all_item_tid_lists = true;
            for i in 1..tid_lists.len() {
                while p[i] < tid_lists[i].len() && tid_lists[i][p[i]] < tid {
                    p[i] += 1;
                }
                if p[i] == tid_lists[i].len() || tid_lists[i][p[i]] != tid {
                    // This tidlist doesn't include that tid. So this tid cannot
                    // have all items in it.
                    tid_in_all_item_tid_lists = false;
                    break;
                }
            }
            if tid_in_all_item_tid_lists {
                count += 1
            }
        }
        count
    }

    pub fn support(&self, items: &[Item]) -> f64 {
        if self.transaction_count == 0 {
            return 0.0;
        }
        (self.count(items) as f64) / (self.transaction_count as f64)
    }
}
