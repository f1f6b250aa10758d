//! Machine-readable build reports

use std::io::{self, Write};

use crate::bundle::BuildResult;

/// Write the build result as prettified JSON followed by a newline.
pub fn write_json_pretty(result: &BuildResult, mut w: impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
