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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Collect, Store, StoreOption, StoreTrue};
use basket::MiningParams;

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: Option<String>,
    pub params: MiningParams,
    pub selected_items: Vec<String>,
    pub top: usize,
    pub verbose: bool,
}

pub fn parse_args_or_exit() -> Arguments {
    let defaults = MiningParams::default();
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        output_rules_path: None,
        params: defaults,
        selected_items: vec![],
        top: 10,
        verbose: false,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Association rule mining over basket data.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset in CSV format, one basket per row, no header.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                StoreOption,
                "File path in which to store output rules. \
                 Format: antecedent, consequent, support, confidence, lift.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.params.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range (0,1]. Default 0.05.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.params.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range (0,1]. Default 0.5.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.params.min_lift)
            .add_option(
                &["--min-lift"],
                Store,
                "Minimum rule lift threshold, in range [0,∞). Default 1.2.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.params.max_len)
            .add_option(
                &["--max-len"],
                Store,
                "Maximum number of items in an itemset. Default 3.",
            )
            .metavar("length");

        parser
            .refer(&mut args.selected_items)
            .add_option(
                &["--select"],
                Collect,
                "Only report rules mentioning this item. May be repeated.",
            )
            .metavar("item");

        parser
            .refer(&mut args.top)
            .add_option(
                &["--top"],
                Store,
                "Number of itemsets and rules to print. Default 10.",
            )
            .metavar("count");

        parser
            .refer(&mut args.verbose)
            .add_option(&["-v", "--verbose"], StoreTrue, "Log debug output.");

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap_or(());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    if let Err(err) = args.params.validate() {
        eprintln!("{}", err);
        process::exit(1);
    }

    args
}
