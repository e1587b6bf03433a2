mod command_line_args;

use basket::{
    mine, rank_itemsets_by_support, rank_rules_by_lift, write_rules_csv, Dataset, Item, Result,
};
use command_line_args::{parse_args_or_exit, Arguments};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("basket={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Arguments) -> Result<()> {
    let start = Instant::now();
    info!(path = %args.input_file_path, "Mining data set");
    let dataset = Dataset::load(Path::new(&args.input_file_path))?;
    let vocabulary = dataset.vocabulary();

    let result = mine(&dataset, &args.params)?;
    let rules = result.select(vocabulary, args.selected_items.as_slice());
    let summary = result.summary(&dataset, &rules);

    println!("Transactions:       {}", summary.transactions);
    println!("Unique items:       {}", summary.items);
    println!("Frequent itemsets:  {}", summary.frequent_itemsets);
    println!("Rules:              {}", summary.rules);

    if !result.itemsets.is_empty() {
        println!();
        println!("Top {} frequent itemsets:", args.top);
        for itemset in rank_itemsets_by_support(&result.itemsets).iter().take(args.top) {
            println!(
                "  {:.3} ({:>6.2}%)  {}",
                itemset.support,
                itemset.support * 100.0,
                Item::item_vec_to_string(&itemset.items, vocabulary)
            );
        }
    }

    println!();
    let ranked = rank_rules_by_lift(&rules);
    if ranked.is_empty() {
        println!("No association rules found with current parameters. Try adjusting the thresholds.");
    } else {
        println!("Top {} association rules:", args.top);
        for rule in ranked.iter().take(args.top) {
            println!(
                "  {}  support={:.3} confidence={:.3} lift={:.2}",
                rule.to_string(vocabulary),
                rule.support,
                rule.confidence,
                rule.lift
            );
        }
    }

    if let Some(ref path) = args.output_rules_path {
        let mut output = BufWriter::new(File::create(path)?);
        write_rules_csv(&mut output, &ranked, vocabulary)?;
        output.flush()?;
        info!(path = %path, rules = ranked.len(), "Wrote rules");
    }

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "Total runtime");
    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();
    init_logging(arguments.verbose);

    if let Err(err) = run(&arguments) {
        error!(%err, "Mining failed");
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
