//! `out`: publish nothing, report the materialized version

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use eyre::{WrapErr, bail};
use netbox_resource_api::Output;
use tracing::info;

use super::{VERSION_FILE, read_input, write_json};

/// Validate the request and echo the version stored under `source_dir`
///
/// The stored version wins over any `version` in the stdin request.
pub fn run(source_dir: &Path, stdin: impl Read, stdout: impl Write) -> eyre::Result<()> {
    let path = source_dir.join(VERSION_FILE);
    let raw = fs::read_to_string(&path)
        .wrap_err_with(|| format!("failed to read input file {}", path.display()))?;
    let stored: Output = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to decode version from {}", path.display()))?;

    let input = read_input(stdin).wrap_err("input validation failed")?;
    if input.source.url.trim().is_empty() {
        bail!("input validation failed: source.url containing the NetBox URL is required");
    }

    info!(id = %stored.version.id, "version reported");
    write_json(stdout, &Output::new(stored.version))
}
