//! # CSV Table File
//!
//! One headered CSV file on disk. Both repositories are built on top of this
//! type: it knows how to create the file, read its data rows, append a row,
//! rewrite the whole table and compute the next free identifier. It knows
//! nothing about what the columns mean.

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writer settings shared by every CSV write in this crate
pub fn csv_writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'));
    builder
}

/// A CSV file with a fixed header line followed by data rows
#[derive(Debug, Clone)]
pub struct CsvTableFile {
    path: PathBuf,
    header: &'static [&'static str],
}

impl CsvTableFile {
    pub fn new(path: PathBuf, header: &'static [&'static str]) -> Self {
        Self { path, header }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header and the given rows if it does not exist
    /// Returns true if the file was created
    pub fn ensure_exists(&self, seed_rows: &[StringRecord]) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
        }

        self.write_table(&self.path, seed_rows)?;
        info!("Created {} with {} seed row(s)", self.path.display(), seed_rows.len());
        Ok(true)
    }

    /// Read every data row in file order
    ///
    /// Each line is parsed on its own, so a malformed line (an unclosed quote,
    /// invalid UTF-8) is skipped without affecting its neighbours. The first
    /// line is the header; blank lines are skipped; a missing file reads as an
    /// empty table.
    pub fn read_rows(&self) -> Result<Vec<StringRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read(&self.path).with_context(|| format!("Failed to read {}", self.path.display()))?;

        let mut rows = Vec::new();
        for (index, line) in content.split(|&byte| byte == b'\n').enumerate().skip(1) {
            if line.iter().all(|byte| byte.is_ascii_whitespace()) {
                continue;
            }

            match parse_line(line) {
                Some(record) if is_blank(&record) => continue,
                Some(record) => rows.push(record),
                None => debug!("Skipping unreadable line {} in {}", index + 1, self.path.display()),
            }
        }

        Ok(rows)
    }

    /// Append one data row, creating the file (with header) first if needed
    pub fn append_row(&self, row: &StringRecord) -> Result<()> {
        self.ensure_exists(&[])?;
        let needs_newline = !self.ends_with_newline()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {} for appending", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        // A hand-edited file may lack the final line break
        if needs_newline {
            writer.write_all(b"\n")?;
        }

        let mut csv_writer = csv_writer_builder().from_writer(writer);
        csv_writer
            .write_record(row)
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        csv_writer.flush()?;

        debug!("Appended row to {}", self.path.display());
        Ok(())
    }

    /// Replace the whole table with the header followed by `rows`
    pub fn rewrite(&self, rows: &[StringRecord]) -> Result<()> {
        // Atomic write using temp file
        let temp_path = self.path.with_extension("tmp");
        self.write_table(&temp_path, rows)?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!("Rewrote {} with {} row(s)", self.path.display(), rows.len());
        Ok(())
    }

    /// Highest id found in the first column plus one, or 1 for an empty table
    pub fn next_id(&self) -> Result<u32> {
        let max_id = self
            .read_rows()?
            .iter()
            .filter_map(|row| row.get(0))
            .filter_map(|field| field.trim().parse::<u32>().ok())
            .max();

        match max_id {
            None => Ok(1),
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or_else(|| anyhow!("No identifiers left in {}", self.path.display())),
        }
    }

    fn write_table(&self, path: &Path, rows: &[StringRecord]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;

        let mut csv_writer = csv_writer_builder().from_writer(BufWriter::new(file));
        csv_writer.write_record(self.header)?;
        for row in rows {
            csv_writer.write_record(row)?;
        }
        csv_writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    fn ends_with_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(true);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::Start(len - 1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }
}

/// Parse one line (without its `\n`) as a single CSV record
///
/// Quotes never span lines here: an unclosed quote ends with the line.
pub fn parse_line(line: &[u8]) -> Option<StringRecord> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line);

    reader.records().next()?.ok()
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
