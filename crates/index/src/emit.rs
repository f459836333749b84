//! Table emission.
//!
//! The [`TableEmitter`] makes one forward pass over the catalogue and writes the
//! header followed by one CSV row per assigned instruction. It moves through
//! [`EmitterState::NotStarted`], [`EmitterState::Iterating`] and
//! [`EmitterState::Done`] exactly once.

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info};

use crate::catalogue::{self, Entry};
use crate::config::{Config, LineEnding};
use crate::error::{IndexError, Result};
use crate::pipeline::{HEADER, Pipeline};

/// Progress of an emitter through its single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    /// Nothing written yet.
    NotStarted,
    /// Header written, rows in progress.
    Iterating,
    /// All rows written and the sink flushed.
    Done,
}

/// Counts from a completed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Data rows written (header excluded).
    pub rows: usize,
    /// Reserved slots skipped.
    pub reserved: usize,
}

/// Writes the instruction index to a CSV sink.
#[derive(Debug)]
pub struct TableEmitter<W: Write> {
    writer: csv::Writer<W>,
    pipeline: Pipeline,
    state: EmitterState,
}

impl<W: Write> TableEmitter<W> {
    /// Wraps `sink` with the default `\r\n` record terminators.
    ///
    /// # Errors
    ///
    /// Fails only if a built-in rule pattern does not compile.
    pub fn new(sink: W) -> Result<Self> {
        Self::with_line_ending(sink, LineEnding::default())
    }

    /// Wraps `sink` with the given record terminator.
    ///
    /// # Errors
    ///
    /// Fails only if a built-in rule pattern does not compile.
    pub fn with_line_ending(sink: W, line_ending: LineEnding) -> Result<Self> {
        Ok(Self::with_pipeline(sink, Pipeline::new()?, line_ending))
    }

    /// Wraps `sink` around an already compiled pipeline.
    pub fn with_pipeline(sink: W, pipeline: Pipeline, line_ending: LineEnding) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(line_ending.terminator())
            .from_writer(sink);
        Self {
            writer,
            pipeline,
            state: EmitterState::NotStarted,
        }
    }

    /// Current state of the pass.
    pub const fn state(&self) -> EmitterState {
        self.state
    }

    /// Writes the header and one row per assigned entry, in order, then flushes.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::AlreadyEmitted`] if called a second time, or the
    /// underlying I/O or CSV error if the sink fails.
    pub fn emit<'a>(&mut self, entries: impl IntoIterator<Item = &'a Entry>) -> Result<Summary> {
        if self.state != EmitterState::NotStarted {
            return Err(IndexError::AlreadyEmitted);
        }
        self.state = EmitterState::Iterating;
        self.writer.write_record(HEADER)?;

        let mut summary = Summary::default();
        for entry in entries {
            match self.pipeline.project(entry) {
                Some(row) => {
                    self.writer.serialize(&row)?;
                    summary.rows += 1;
                }
                None => {
                    debug!(opcode = entry.opcode(), "skipping reserved slot");
                    summary.reserved += 1;
                }
            }
        }

        self.writer.flush()?;
        self.state = EmitterState::Done;
        Ok(summary)
    }

    /// Flushes and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns the flush error if buffered output cannot be written.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| IndexError::Io(err.into_error()))
    }
}

/// Regenerates the artifact described by `config` from the built-in catalogue.
///
/// The catalogue is checked for opcode collisions before the output file is
/// created, so a failed check leaves any previous artifact untouched.
///
/// # Errors
///
/// Returns [`IndexError::DuplicateOpcode`] for a malformed catalogue, or the
/// I/O or CSV error raised while writing.
pub fn generate(config: &Config) -> Result<Summary> {
    let path = &config.output.path;
    info!(path = %path.display(), "generating instruction index");

    let pipeline = Pipeline::new()?;
    pipeline.verify_unique_opcodes(catalogue::entries())?;

    let file = BufWriter::new(File::create(path)?);
    let mut emitter = TableEmitter::with_pipeline(file, pipeline, config.output.line_ending);
    let summary = emitter.emit(catalogue::entries())?;
    emitter.into_inner()?.flush()?;

    info!(
        rows = summary.rows,
        reserved = summary.reserved,
        "instruction index written"
    );
    Ok(summary)
}
