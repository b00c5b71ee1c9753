use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use csv::ReaderBuilder;
use tracing::debug;

use crate::{config::LoaderConfig, error::Result, types::Transaction};

/// Read one transaction per line of CSV text.
///
/// Quoted fields may contain the delimiter but not a line break. Fields are
/// trimmed and blank fields dropped. A blank line becomes an empty
/// transaction.
pub fn read_transactions<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Vec<Transaction>> {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter);

    let transactions = reader
        .lines()
        .map(|line| -> Result<Transaction> { parse_record(&builder, &line?) })
        .collect::<Result<Vec<Transaction>>>()?;

    debug!(transactions = transactions.len(), "loaded transactions");
    Ok(transactions)
}

pub fn load_transactions<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    read_transactions(BufReader::new(file), config)
}

fn parse_record(builder: &ReaderBuilder, line: &str) -> Result<Transaction> {
    // the csv reader skips empty lines, so they never yield a record
    let record = match builder.from_reader(line.as_bytes()).records().next() {
        Some(record) => record?,
        None => return Ok(Transaction::new()),
    };

    Ok(record
        .iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn trims_and_drops_blank_fields() {
        let input = "bread, milk ,,\n  eggs ,\n";
        let transactions = read_transactions(Cursor::new(input), &LoaderConfig::default()).unwrap();

        assert_eq!(
            transactions,
            vec![vec!["bread", "milk"], vec!["eggs"]]
        );
    }

    #[test]
    fn blank_line_is_an_empty_transaction() {
        let input = "a,b\n\n , \nc\n";
        let transactions = read_transactions(Cursor::new(input), &LoaderConfig::default()).unwrap();

        assert_eq!(transactions.len(), 4);
        assert!(transactions[1].is_empty());
        assert!(transactions[2].is_empty());
        assert_eq!(transactions[3], vec!["c"]);
    }

    #[test]
    fn quoted_field_keeps_its_delimiter() {
        let input = "\"bread, whole\",milk\n\"say \"\"cheese\"\"\",eggs\n";
        let transactions = read_transactions(Cursor::new(input), &LoaderConfig::default()).unwrap();

        assert_eq!(
            transactions,
            vec![vec!["bread, whole", "milk"], vec!["say \"cheese\"", "eggs"]]
        );
    }

    #[test]
    fn custom_delimiter() {
        let config = LoaderConfig { delimiter: b';' };
        let transactions = read_transactions(Cursor::new("a;b,c\n"), &config).unwrap();

        assert_eq!(transactions, vec![vec!["a", "b,c"]]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "item1,item2,item3").unwrap();
        writeln!(file, "item2").unwrap();

        let transactions = load_transactions(file.path(), &LoaderConfig::default()).unwrap();

        assert_eq!(
            transactions,
            vec![vec!["item1", "item2", "item3"], vec!["item2"]]
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_transactions(dir.path().join("missing.csv"), &LoaderConfig::default())
            .unwrap_err();

        assert!(matches!(err, crate::error::MiningError::Io(_)));
    }
}
