//! CSV export of simulation frames.
//!
//! The format has a `timestep,X,Y,Z` header followed by one row per frame.
//! `timestep` is the 0-based frame index and the numeric columns use a fixed
//! number of decimals ([`DEFAULT_PRECISION`] unless configured). Lines are
//! separated by `\n` with no terminator after the last row. The direction is
//! not exported.
//!
//! An empty frame sequence exports as an empty document, without a header.
//!
//! # Example
//!
//! ```
//! use zxyt_core::Frame;
//! use zxyt_observers::csv::CsvExport;
//!
//! let frames = [Frame::initial(0.6, 0.4), Frame::new(0.5, 0.5, -0.1)];
//! let text = CsvExport::new().precision(2).render(&frames);
//!
//! assert_eq!(text, "timestep,X,Y,Z\n0,0.60,0.40,0.00\n1,0.50,0.50,-0.10");
//! ```

use std::io::{self, Write};

use zxyt_core::{Frame, Observer};

use crate::traits::{CanStopEarly, HasFrame};

/// Decimals used for numeric columns unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 4;

/// The header line.
pub const HEADER: &str = "timestep,X,Y,Z";

/// Writes `frames` as CSV with the default precision.
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn write_csv<W: Write>(frames: &[Frame], writer: W) -> io::Result<()> {
    CsvExport::new().write(frames, writer)
}

/// CSV export settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvExport {
    precision: usize,
}

impl CsvExport {
    /// Creates an exporter with [`DEFAULT_PRECISION`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the number of decimals for the numeric columns.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Writes `frames` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write<W: Write>(&self, frames: &[Frame], mut writer: W) -> io::Result<()> {
        if frames.is_empty() {
            return Ok(());
        }
        write_header(&mut writer)?;
        for (timestep, frame) in frames.iter().enumerate() {
            self.write_row(&mut writer, timestep, frame)?;
        }
        writer.flush()
    }

    /// Renders `frames` to a string.
    #[must_use]
    pub fn render(&self, frames: &[Frame]) -> String {
        let mut buffer = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.write(frames, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn write_row<W: Write>(
        &self,
        writer: &mut W,
        timestep: usize,
        frame: &Frame,
    ) -> io::Result<()> {
        write!(
            writer,
            "\n{timestep},{:.prec$},{:.prec$},{:.prec$}",
            frame.x,
            frame.y,
            frame.z,
            prec = self.precision,
        )
    }
}

impl Default for CsvExport {
    fn default() -> Self {
        Self::new()
    }
}

fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writer.write_all(HEADER.as_bytes())
}

/// An observer that streams CSV rows while the engine runs.
///
/// The header is written with the first row. If the writer fails, the error
/// is kept, the observer asks the engine to stop, and [`finish`] reports it.
///
/// [`finish`]: CsvObserver::finish
///
/// # Example
///
/// ```
/// use zxyt_engine::{BoxMuller, SimulationConfig, feedback};
/// use zxyt_observers::csv::CsvObserver;
///
/// let config = SimulationConfig { timesteps: 3, ..SimulationConfig::default() };
/// let mut csv = CsvObserver::new(Vec::new());
///
/// feedback::solve(&config, &mut BoxMuller::seeded(1), &mut csv)?;
///
/// let text = String::from_utf8(csv.finish()?)?;
/// assert_eq!(text.lines().count(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct CsvObserver<W> {
    writer: W,
    export: CsvExport,
    rows: usize,
    error: Option<io::Error>,
}

impl<W: Write> CsvObserver<W> {
    /// Creates an observer with the default export settings.
    pub fn new(writer: W) -> Self {
        Self::with_export(writer, CsvExport::new())
    }

    /// Creates an observer with custom export settings.
    pub fn with_export(writer: W, export: CsvExport) -> Self {
        Self {
            writer,
            export,
            rows: 0,
            error: None,
        }
    }

    /// Returns the number of rows written so far.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen during the run, or a flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn record(&mut self, timestep: usize, frame: &Frame) -> io::Result<()> {
        if self.rows == 0 {
            write_header(&mut self.writer)?;
        }
        self.export.write_row(&mut self.writer, timestep, frame)?;
        self.rows += 1;
        Ok(())
    }
}

impl<W, E, A> Observer<E, A> for CsvObserver<W>
where
    W: Write,
    E: HasFrame,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        match self.record(event.step(), event.frame()) {
            Ok(()) => None,
            Err(error) => {
                log::warn!("csv export failed at timestep {}: {error}", event.step());
                self.error = Some(error);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut CsvObserver<W>` to be passed to engines that take an observer
/// by value, so [`CsvObserver::finish`] can be called after the run completes.
impl<W, E, A> Observer<E, A> for &mut CsvObserver<W>
where
    W: Write,
    E: HasFrame,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
