use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use csv::StringRecord;
use tracing::{error, info, Dispatch};

use crate::error::{ImportError, Result};
use crate::patterns::{EmailPattern, EmailValidator};
use crate::record::{Record, RecordError};
use crate::rows::RowReader;
use crate::stats::{DomainCount, DomainCounter, TieBreak};

/// Reads customer CSV rows and counts customers per email domain.
///
/// Log output goes to the injected [`Dispatch`] rather than the global
/// subscriber. Read and validation failures are skipped unless fail-fast is
/// on; a row with the wrong number of fields always aborts the import.
pub struct CustomerImporter<V = EmailPattern> {
    log: Dispatch,
    validator: V,
    fail_fast: bool,
    tie_break: TieBreak,
}

impl<V: EmailValidator> CustomerImporter<V> {
    pub fn new(log: Dispatch, validator: V) -> Self {
        Self {
            log,
            validator,
            fail_fast: false,
            tie_break: TieBreak::default(),
        }
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Opens `path` and runs [`process`](Self::process) over it.
    pub fn load(&self, path: &Path) -> Result<Vec<DomainCount>> {
        let file = tracing::dispatcher::with_default(&self.log, || {
            File::open(path).map_err(|source| {
                error!(action = "open", component = "importer", file_path = ?path, error = %source, "Failed to open file");
                ImportError::FileOpen {
                    path: path.to_path_buf(),
                    source,
                }
            })
        })?;

        self.process(file)
    }

    /// Streams headerless CSV rows from `reader` and returns domains sorted by
    /// count, highest first.
    pub fn process<R: Read>(&self, reader: R) -> Result<Vec<DomainCount>> {
        tracing::dispatcher::with_default(&self.log, || self.run(reader))
    }

    fn run<R: Read>(&self, reader: R) -> Result<Vec<DomainCount>> {
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "importer",
            fail_fast = self.fail_fast,
            "Starting customer import"
        );

        let mut rows = RowReader::new(BufReader::new(reader));

        let mut row = StringRecord::new();
        let mut counter = DomainCounter::new();
        let mut records_read: u64 = 0;
        let mut records_skipped: u64 = 0;

        loop {
            let line = match rows.read_record(&mut row) {
                Ok(false) => break,
                Ok(true) => rows.line(),
                Err(source) => {
                    let line = rows.line();
                    error!(action = "read", component = "importer", line, error = %source, "Failed to read line");
                    if self.fail_fast {
                        return Err(ImportError::LineRead { line, source });
                    }
                    records_skipped += 1;
                    continue;
                }
            };
            records_read += 1;

            let record = Record::from_fields(row.iter()).map_err(|err| {
                error!(action = "parse", component = "importer", line, error = %err, "Malformed record");
                err.at_line(line)
            })?;

            let checked = record.validate(&self.validator).and_then(|()| {
                record
                    .domain()
                    .ok_or_else(|| RecordError::InvalidEmail(record.email().to_string()))
            });

            match checked {
                Ok(domain) => counter.add(domain),
                Err(err) => {
                    error!(action = "validate", component = "importer", line, email = record.email(), "Invalid email");
                    if self.fail_fast {
                        return Err(err.at_line(line));
                    }
                    records_skipped += 1;
                }
            }
        }

        info!(
            action = "complete",
            component = "importer",
            records_read,
            records_skipped,
            customers_counted = counter.total(),
            unique_domains = counter.unique_domains(),
            duration_ms = start_time.elapsed().as_millis(),
            "Customer import completed"
        );

        Ok(counter.into_sorted(self.tie_break))
    }
}
