use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the rendered deck list to `path`, one line per card, replacing
/// any existing file content.
pub fn write_decklist(path: &Path, lines: &[String]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line)?;
    }

    writer.flush()
}
