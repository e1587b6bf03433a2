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

use crate::error::{MiningError, Result};
use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

// One row of the input: the non-blank, trimmed cells in column order.
// Repeated labels are kept here; membership is decided by the encoder.
pub type Transaction = Vec<String>;

// Reads headerless CSV with any number of cells per row. Rows with no
// non-blank cells hold no items and are skipped, however they are written.
pub struct TransactionReader<R> {
    records: StringRecordsIntoIter<R>,
}

impl<R: io::Read> TransactionReader<R> {
    pub fn new(reader: R) -> TransactionReader<R> {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader)
            .into_records();
        TransactionReader { records }
    }
}

impl TransactionReader<File> {
    pub fn open(path: &Path) -> io::Result<TransactionReader<File>> {
        Ok(TransactionReader::new(File::open(path)?))
    }
}

impl<R: io::Read> Iterator for TransactionReader<R> {
    type Item = csv::Result<Transaction>;
    fn next(&mut self) -> Option<csv::Result<Transaction>> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(err) => return Some(Err(err)),
            };
            let transaction: Transaction = record
                .iter()
                .filter(|cell| !cell.is_empty())
                .map(String::from)
                .collect();
            if !transaction.is_empty() {
                return Some(Ok(transaction));
            }
        }
    }
}

pub fn read_transactions<R: io::Read>(reader: R) -> csv::Result<Vec<Transaction>> {
    TransactionReader::new(reader).collect()
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let data_format_error = |source: csv::Error| MiningError::DataFormat {
        path: path.to_path_buf(),
        source,
    };
    let reader = TransactionReader::open(path).map_err(|err| data_format_error(err.into()))?;
    let transactions = reader
        .collect::<csv::Result<Vec<Transaction>>>()
        .map_err(data_format_error)?;
    debug!(
        path = %path.display(),
        transactions = transactions.len(),
        "Loaded transactions"
    );
    Ok(transactions)
}
