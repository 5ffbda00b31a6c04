//! `in`: materialize a version without fetching anything

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use eyre::WrapErr;
use netbox_resource_api::Output;
use tracing::info;

use super::{VERSION_FILE, read_input, write_json};

/// Record the requested version in `destination` and echo it to `stdout`
pub fn run(destination: &Path, stdin: impl Read, stdout: impl Write) -> eyre::Result<()> {
    let input = read_input(stdin).wrap_err("input validation failed")?;
    let output = Output::new(input.version);

    let path = destination.join(VERSION_FILE);
    let file = fs::File::create(&path)
        .wrap_err_with(|| format!("failed to create output file {}", path.display()))?;
    write_json(file, &output)
        .wrap_err_with(|| format!("failed to write JSON output to {}", path.display()))?;

    info!(path = %path.display(), id = %output.version.id, "version materialized");
    write_json(stdout, &output)
}
