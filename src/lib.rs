//! Frequent itemset mining and association rules over basket data.
//!
//! The pipeline is load, encode, mine, generate, dedupe:
//!
//! ```no_run
//! use basket::{mine, Dataset, MiningParams};
//! use std::path::Path;
//!
//! let dataset = Dataset::load(Path::new("baskets.csv"))?;
//! let result = mine(&dataset, &MiningParams::default())?;
//! for rule in basket::rank_rules_by_lift(&result.rules) {
//!     println!("{} lift={}", rule.to_string(dataset.vocabulary()), rule.lift);
//! }
//! # Ok::<(), basket::MiningError>(())
//! ```

pub mod apriori;
pub mod cache;
pub mod config;
pub mod dedupe;
pub mod encoder;
pub mod error;
pub mod filter;
pub mod generate_rules;
pub mod item;
pub mod itemset;
pub mod matrix;
pub mod pipeline;
pub mod report;
pub mod rule;
pub mod transaction_reader;
pub mod vec_sets;
pub mod vocabulary;

pub use apriori::mine_frequent_itemsets;
pub use cache::{CacheKey, MiningCache};
pub use config::MiningParams;
pub use dedupe::dedupe_rules;
pub use encoder::encode;
pub use error::{MiningError, Result};
pub use filter::filter_rules_by_items;
pub use generate_rules::generate_rules;
pub use item::Item;
pub use itemset::Itemset;
pub use matrix::MembershipMatrix;
pub use pipeline::{mine, Dataset, MiningResult};
pub use report::{rank_itemsets_by_support, rank_rules_by_lift, write_rules_csv, Summary};
pub use rule::Rule;
pub use transaction_reader::{load_transactions, read_transactions, Transaction};
pub use vocabulary::Vocabulary;
