// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use super::TransactionStore;
use crate::models::{RawTransaction, Transaction};

pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Flat file store. It has no notion of owners: the owner is neither written nor used
/// to filter.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_blank(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true)
    }

    /// Whether a non-empty file is missing its final line terminator, as happens when
    /// the file was last saved by hand.
    fn lacks_trailing_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path)
            .with_context(|| format!("Open CSV {}", self.path.display()))?;
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }

    /// Creates a header-only file if none exists yet.
    pub fn initialize(&self) -> Result<()> {
        if !self.is_blank() {
            return Ok(());
        }
        let mut wtr = WriterBuilder::new()
            .from_path(&self.path)
            .with_context(|| format!("Create CSV {}", self.path.display()))?;
        wtr.write_record(COLUMNS)?;
        wtr.flush()?;
        debug!(path = %self.path.display(), "initialized CSV store");
        Ok(())
    }
}

impl TransactionStore for CsvStore {
    fn append(&self, transaction: &Transaction) -> Result<()> {
        let needs_header = self.is_blank();
        let needs_newline = !needs_header && self.lacks_trailing_newline()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Open CSV {}", self.path.display()))?;
        if needs_newline {
            file.write_all(b"\n")?;
        }
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            wtr.write_record(COLUMNS)?;
        }
        let raw = transaction.to_raw();
        wtr.write_record([&raw.date, &raw.amount, &raw.category, &raw.description])?;
        wtr.flush()?;
        Ok(())
    }

    fn list_raw(&self, _owner: Option<&str>) -> Result<Vec<RawTransaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Open CSV {}", self.path.display()))?;
        let mut data = Vec::new();
        for result in rdr.records() {
            let rec = result.with_context(|| format!("Read CSV {}", self.path.display()))?;
            let field = |i: usize| rec.get(i).unwrap_or("").trim().to_string();
            data.push(RawTransaction {
                date: field(0),
                amount: field(1),
                category: field(2),
                description: field(3),
                owner: None,
            });
        }
        Ok(data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
