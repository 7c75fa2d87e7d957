use std::io::Write;
use std::path::Path;

use pdns2unbound_domain::config::OutputConfig;
use pdns2unbound_domain::DomainError;
use tracing::info;

/// What `write_output` did with the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Written to standard output.
    Stdout,
    /// Previous file contents already match; nothing written.
    Unchanged,
    /// Existing file differed and was overwritten.
    Updated,
    /// No previous file; written fresh.
    Created,
}

/// Writes `rendered` to the configured destination.
///
/// File destinations are compared byte-for-byte against the previous
/// contents first, so an unchanged run leaves the file alone.
pub fn write_output(output: &OutputConfig, rendered: &str) -> Result<WriteOutcome, DomainError> {
    if output.is_stdout() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        return Ok(WriteOutcome::Stdout);
    }

    let path = Path::new(&output.name);
    let previous = match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(DomainError::IoError(e.to_string())),
    };

    if previous.as_deref() == Some(rendered.as_bytes()) {
        info!(path = %output.name, "Output unchanged");
        return Ok(WriteOutcome::Unchanged);
    }

    std::fs::write(path, rendered.as_bytes()).map_err(|e| DomainError::IoError(e.to_string()))?;

    let outcome = if previous.is_some() {
        WriteOutcome::Updated
    } else {
        WriteOutcome::Created
    };
    info!(path = %output.name, ?outcome, "Output written");
    Ok(outcome)
}
