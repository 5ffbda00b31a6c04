//! check / in / out entry points

use std::io::{Read, Write};

use eyre::WrapErr;
use netbox_resource_api::Input;
use serde::Serialize;

pub mod check;
pub mod get;
pub mod put;

/// Name of the version file written by `in` and read by `out`
pub const VERSION_FILE: &str = "version.json";

/// Decode the request on stdin
///
/// Empty input decodes to an empty request; validation happens later.
pub fn read_input(mut reader: impl Read) -> eyre::Result<Input> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .wrap_err("failed to read stdin")?;

    if raw.trim().is_empty() {
        return Ok(Input::default());
    }
    serde_json::from_str(&raw).wrap_err("failed to decode stdin")
}

/// Write one JSON document followed by a newline
pub fn write_json<T: Serialize>(mut writer: impl Write, value: &T) -> eyre::Result<()> {
    serde_json::to_writer(&mut writer, value).wrap_err("failed to encode JSON")?;
    writeln!(writer).wrap_err("failed to write output")?;
    Ok(())
}
