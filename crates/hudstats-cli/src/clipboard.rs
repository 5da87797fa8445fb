use std::io::Write;

use hudstats_core::{Clipboard, Error};

/// Clipboard that prints the copied text on stdout, for piping into a
/// platform clipboard tool.
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> hudstats_core::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|_| stdout.flush())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}
