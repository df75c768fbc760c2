//! Append-only line logs
//!
//! One file per entity type. Writes open the file, append a single line and
//! close it again. Reads scan the whole file and skip lines that fail to
//! decode, so one bad line never aborts a load.

use std::fs::{File, OpenOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use tracing::{debug, info, warn};

use crate::error::{RentalError, RentalResult};

use super::codec::LineCodec;

/// Result of scanning a log file
#[derive(Debug)]
pub struct LoadReport<T> {
    /// Successfully decoded entries, in file order
    pub items: Vec<T>,
    /// Number of lines that failed to decode
    pub skipped: usize,
    /// True if the file did not exist
    pub missing: bool,
}

impl<T> LoadReport<T> {
    fn missing() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
            missing: true,
        }
    }
}

/// An append-only file of `T` entries, one per line
pub struct LineLog<T> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T: LineCodec> LineLog<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line
    pub fn append(&self, item: &T) -> RentalResult<()> {
        let fields = item.encode()?;

        if fields.iter().any(|f| f.contains(',') || f.contains('\n')) {
            warn!(
                path = %self.path.display(),
                "{} field contains a separator; the stored line will not reload cleanly",
                T::ENTITY
            );
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                RentalError::Storage(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(file);

        writer.write_record(&fields).map_err(|e| {
            RentalError::Storage(format!("Failed to save {}: {}", T::ENTITY, e))
        })?;

        writer.flush().map_err(|e| {
            RentalError::Storage(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), "appended {}", T::ENTITY);
        Ok(())
    }

    /// Read every decodable entry from the file
    ///
    /// A missing file yields an empty report. Malformed lines are logged and
    /// counted. Only a failure to open an existing file is returned as an
    /// error.
    pub fn load(&self) -> RentalResult<LoadReport<T>> {
        if !self.path.exists() {
            info!(
                path = %self.path.display(),
                "No {} data found, starting empty",
                T::ENTITY
            );
            return Ok(LoadReport::missing());
        }

        let file = File::open(&self.path).map_err(|e| {
            RentalError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let mut items = Vec::new();
        let mut skipped = 0;

        for (index, result) in reader.records().enumerate() {
            let decoded = result
                .map_err(RentalError::from)
                .and_then(|fields| T::decode(&fields));

            match decoded {
                Ok(item) => items.push(item),
                Err(e) => {
                    skipped += 1;
                    warn!(
                        path = %self.path.display(),
                        record = index + 1,
                        "Skipping malformed {} line: {}",
                        T::ENTITY,
                        e
                    );
                }
            }
        }

        Ok(LoadReport {
            items,
            skipped,
            missing: false,
        })
    }

    /// Append raw text, bypassing the codec
    #[cfg(test)]
    pub(crate) fn append_raw(&self, text: &str) {
        use std::io::Write;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .unwrap();
        file.write_all(text.as_bytes()).unwrap();
    }
}
