//! Append-only CSV lead ledger

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};
use crate::{
    config::Config,
    errors::{NexusError, NexusResult},
    ledger::{ledger_timestamp, LedgerRow, LEDGER_COLUMNS},
    types::{LeadCandidate, LeadRecord, LeadStatus},
    validation::validate_lead,
};

/// Owns the backing file. Share it behind an `Arc` to serialise writers.
#[derive(Debug)]
pub struct LeadLedger {
    path: PathBuf,
    writer: Mutex<()>,
}

impl LeadLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates and stores one lead. The record is on disk when this returns.
    ///
    /// `submitted_at` is truncated to the minute, the resolution of the ledger's
    /// `Date` column, so the returned record equals the one `load_all` reads back.
    pub fn append(&self, candidate: &LeadCandidate) -> NexusResult<LeadRecord> {
        let lead = validate_lead(candidate)?;
        let record = LeadRecord {
            submitted_at: ledger_timestamp(Utc::now()),
            company: lead.company,
            industry: lead.industry,
            region: lead.region,
            material: lead.material,
            volume: lead.volume,
            status: LeadStatus::Pending,
        };

        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| NexusError::storage(parent, "failed to create ledger directory", e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| NexusError::storage(&self.path, "failed to open ledger for append", e))?;

        let layout = self.prepare_for_append(&file)?;
        let mut buf = Vec::new();
        if layout.needs_newline {
            buf.push(b'\n');
        }
        encode_record(&mut buf, &record, layout.needs_header)
            .map_err(|e| NexusError::storage(&self.path, "failed to encode lead", e))?;

        file.write_all(&buf)
            .map_err(|e| NexusError::storage(&self.path, "failed to write lead", e))?;
        file.sync_data()
            .map_err(|e| NexusError::storage(&self.path, "failed to flush ledger", e))?;

        info!(
            company = %record.company,
            material = %record.material,
            volume = %record.volume,
            path = %self.path.display(),
            "Appended lead to ledger"
        );

        Ok(record)
    }

    /// Every stored lead in append order. A missing file is an empty ledger.
    pub fn load_all(&self) -> NexusResult<Vec<LeadRecord>> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Ledger file not found, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(NexusError::storage(&self.path, "failed to read ledger", e)),
        };

        let readable = readable_prefix(&bytes);
        if readable.len() < bytes.len() {
            warn!(
                path = %self.path.display(),
                ignored_bytes = bytes.len() - readable.len(),
                "Ignoring partially written trailing record"
            );
        }
        if is_blank(readable) {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(readable);
        self.check_header(&mut reader)?;

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<LedgerRow>().enumerate() {
            // Line 1 is the header.
            let line = index + 2;
            let row = row.map_err(|e| {
                NexusError::storage(&self.path, format!("failed to parse line {}", line), e)
            })?;
            let record = LeadRecord::try_from(row).map_err(|reason| {
                NexusError::corrupt(&self.path, format!("line {}: {}", line, reason))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    pub fn len(&self) -> NexusResult<usize> {
        Ok(self.load_all()?.len())
    }

    pub fn is_empty(&self) -> NexusResult<bool> {
        Ok(self.len()? == 0)
    }

    fn check_header<R: io::Read>(&self, reader: &mut csv::Reader<R>) -> NexusResult<()> {
        let headers = reader
            .headers()
            .map_err(|e| NexusError::storage(&self.path, "failed to read ledger header", e))?;
        if !headers.iter().map(str::trim).eq(LEDGER_COLUMNS.iter().copied()) {
            return Err(NexusError::corrupt(
                &self.path,
                format!("unexpected ledger header: {:?}", headers),
            ));
        }
        Ok(())
    }

    /// Cuts a torn trailing record, resets a blank file and refuses a foreign
    /// header, so the next write always lands in a readable ledger.
    fn prepare_for_append(&self, file: &File) -> NexusResult<AppendLayout> {
        let len = file
            .metadata()
            .map_err(|e| NexusError::storage(&self.path, "failed to stat ledger", e))?
            .len();
        if len == 0 {
            return Ok(AppendLayout::fresh());
        }

        let bytes = fs::read(&self.path)
            .map_err(|e| NexusError::storage(&self.path, "failed to read ledger", e))?;
        let readable = readable_prefix(&bytes);

        if is_blank(readable) {
            warn!(
                path = %self.path.display(),
                discarded_bytes = len,
                "Resetting ledger holding no header before append"
            );
            file.set_len(0)
                .map_err(|e| NexusError::storage(&self.path, "failed to reset ledger", e))?;
            return Ok(AppendLayout::fresh());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(readable);
        self.check_header(&mut reader)?;

        let kept = readable.len() as u64;
        if kept < len {
            warn!(
                path = %self.path.display(),
                discarded_bytes = len - kept,
                "Discarding partially written trailing record before append"
            );
            file.set_len(kept)
                .map_err(|e| NexusError::storage(&self.path, "failed to truncate torn record", e))?;
        }

        Ok(AppendLayout {
            needs_header: false,
            needs_newline: !readable.ends_with(b"\n"),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct AppendLayout {
    needs_header: bool,
    needs_newline: bool,
}

impl AppendLayout {
    fn fresh() -> Self {
        Self {
            needs_header: true,
            needs_newline: false,
        }
    }
}

/// Header (for a fresh file) plus one row, encoded up front so it lands in a single write.
fn encode_record(buf: &mut Vec<u8>, record: &LeadRecord, with_header: bool) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(buf);
    if with_header {
        writer.write_record(LEDGER_COLUMNS)?;
    }
    writer.serialize(LedgerRow::from(record))?;
    writer.flush()?;
    Ok(())
}

/// The part of the file that holds whole lines. A last line without its
/// newline counts only when it is a complete header or record; anything else
/// is the remains of an interrupted write.
fn readable_prefix(bytes: &[u8]) -> &[u8] {
    let complete = match bytes.iter().rposition(|b| *b == b'\n') {
        Some(last) => &bytes[..=last],
        None => &[],
    };
    let tail = &bytes[complete.len()..];
    if tail.is_empty() {
        return bytes;
    }

    let whole = if is_blank(complete) {
        is_header_line(tail)
    } else {
        is_record_line(tail)
    };
    if whole { bytes } else { complete }
}

fn single_line_fields(line: &[u8]) -> Option<csv::StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line);
    let mut fields = csv::StringRecord::new();
    match reader.read_record(&mut fields) {
        Ok(true) if fields.len() == LEDGER_COLUMNS.len() => Some(fields),
        _ => None,
    }
}

fn is_header_line(line: &[u8]) -> bool {
    single_line_fields(line)
        .is_some_and(|fields| fields.iter().map(str::trim).eq(LEDGER_COLUMNS.iter().copied()))
}

fn is_record_line(line: &[u8]) -> bool {
    single_line_fields(line)
        .and_then(|fields| fields.deserialize::<LedgerRow>(None).ok())
        .is_some_and(|row| LeadRecord::try_from(row).is_ok())
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
