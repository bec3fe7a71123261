//! CLI logic for the Tracklane layout tool.
//!
//! Reads a TOML track of intervals, assigns rows, and writes one `id<TAB>row`
//! line per interval after a `# rows: N` header.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;
use serde::Deserialize;

use tracklane::{LayoutBuilder, TracklaneError, assignment::RowAssignment, interval::Interval};

/// Input document: a list of `[[intervals]]` tables.
#[derive(Debug, Default, Deserialize)]
struct Track {
    #[serde(default)]
    intervals: Vec<Interval>,
}

/// Run the Tracklane CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TracklaneError` for:
/// - File I/O errors
/// - Malformed input files
/// - Configuration loading errors
/// - Duplicate interval identities or an invalid tolerance
pub fn run(args: &Args) -> Result<(), TracklaneError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing track"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_overrides(&mut app_config, args);

    let intervals = read_intervals(&args.input)?;

    let assignment = LayoutBuilder::new(app_config).layout(&intervals)?;

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_assignment(&mut writer, &assignment)?;
            writer.flush()?;
            info!(output_file = path; "Rows exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_assignment(&mut stdout, &assignment)?;
        }
    }

    Ok(())
}

/// Read the intervals of a TOML track file, in file order.
///
/// # Errors
///
/// Returns [`TracklaneError::Io`] if the file cannot be read and
/// [`TracklaneError::Input`] if it is not a valid track document.
pub fn read_intervals(path: impl AsRef<Path>) -> Result<Vec<Interval>, TracklaneError> {
    let content = fs::read_to_string(path)?;
    let track: Track =
        toml::from_str(&content).map_err(|err| TracklaneError::Input(err.to_string()))?;
    Ok(track.intervals)
}

/// Write `assignment` as a `# rows: N` header followed by `id<TAB>row` lines.
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn write_assignment(writer: &mut impl Write, assignment: &RowAssignment) -> io::Result<()> {
    writeln!(writer, "# rows: {}", assignment.row_count())?;
    for (id, row) in assignment.iter() {
        writeln!(writer, "{id}\t{row}")?;
    }
    Ok(())
}
