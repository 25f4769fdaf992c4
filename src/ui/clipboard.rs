use std::io::{self, Write};

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Build the OSC 52 escape sequence that asks the terminal to place `text`
/// on the system clipboard. Works locally and over SSH without a display
/// server.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write `text` to the system clipboard through the terminal.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(osc52_sequence(text).as_bytes())
        .context("Failed to write clipboard escape sequence")?;
    stdout
        .flush()
        .context("Failed to flush clipboard escape sequence")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_well_formed() {
        let seq = osc52_sequence("نص مصحح");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
    }

    #[test]
    fn payload_roundtrips_through_base64() {
        let seq = osc52_sequence("هذا نص لا يحتوي على أخطاء.");
        let payload = seq
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .expect("framed payload");
        let decoded = STANDARD.decode(payload).expect("valid base64");
        assert_eq!(decoded, "هذا نص لا يحتوي على أخطاء.".as_bytes());
    }
}
