//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Standardized missing/null value handling.
//! - Timestamp rendering for EdgeX millisecond and nanosecond fields.
//! - Delivering rendered output to stdout, a pager, or a file (atomic write).
//!
//! Does NOT handle:
//! - Format-specific logic (lives in respective formatter modules).

use anyhow::{Context, Result};
use chrono::DateTime;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::OutputFormat;

/// Default string representation for missing/null/empty values in tables.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

const DEFAULT_PAGER: &str = "less";

/// Output settings shared by every command of one invocation.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub verbose: bool,
    pub output_file: Option<PathBuf>,
    pub pager: bool,
    pub quiet: bool,
}

/// Format an optional string value, using the default missing value if None or empty.
///
/// ```rust,ignore
/// assert_eq!(format_missing(Some("value")), "value");
/// assert_eq!(format_missing(None), "N/A");
/// ```
pub fn format_missing(opt: Option<&str>) -> String {
    match opt {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => DEFAULT_MISSING_VALUE.to_string(),
    }
}

/// Format an optional value using Display, using the default missing value if None.
pub fn format_missing_display<T: std::fmt::Display>(opt: Option<T>) -> String {
    opt.map(|v| v.to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Join a list with ", ", or the missing value when empty.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        DEFAULT_MISSING_VALUE.to_string()
    } else {
        items.join(", ")
    }
}

/// `created`/`modified` fields are Unix milliseconds.
pub fn format_millis(millis: Option<i64>) -> String {
    millis
        .filter(|ms| *ms > 0)
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Event and reading `origin` fields are Unix nanoseconds.
pub fn format_nanos(nanos: i64) -> String {
    if nanos <= 0 {
        return DEFAULT_MISSING_VALUE.to_string();
    }
    DateTime::from_timestamp_nanos(nanos)
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

/// Write formatted output to a file, the pager, or stdout.
///
/// # Example
/// ```rust,ignore
/// let output = with_formatter!(opts.format, |f| f.format_list(&devices, opts.verbose))?;
/// output_result(&output, &opts)?;
/// ```
pub fn output_result(output: &str, opts: &OutputOptions) -> Result<()> {
    if let Some(path) = &opts.output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        if !opts.quiet {
            eprintln!(
                "Results written to {} ({:?} format)",
                path.display(),
                opts.format
            );
        }
    } else if opts.pager {
        page_output(output)?;
    } else {
        print!("{}", output);
        std::io::stdout().flush()?;
    }
    Ok(())
}

/// Pipe `output` through `$PAGER` (default `less`) and wait for it to exit.
fn page_output(output: &str) -> Result<()> {
    let pager = std::env::var("PAGER")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PAGER.to_string());

    let mut parts = pager.split_whitespace();
    let program = parts.next().unwrap_or(DEFAULT_PAGER);

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start pager '{}'", pager))?;

    if let Some(mut stdin) = child.stdin.take() {
        // The pager may exit before reading everything; a broken pipe is not an error
        match stdin.write_all(output.as_bytes()) {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                return Err(e).context("Failed to write to pager");
            }
            _ => {}
        }
    }

    child.wait().context("Failed to wait for pager")?;
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames
/// for atomicity.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::fs;
    use tempfile::NamedTempFile;

    // A bare file name has an empty parent; use the current directory
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
