use crate::models::{Compression, SaveReport, Screenshot};
use std::{
    fmt,
    io::{self, Write},
    path::Path,
};

impl fmt::Display for Screenshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} ({} channels)",
            self.width, self.height, self.channels
        )
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::None => f.write_str("none"),
            Compression::Lz4 {
                uncompressed_len,
                compressed_len,
            } => write!(
                f,
                "lz4 ({} -> {} bytes)",
                compressed_len, uncompressed_len
            ),
        }
    }
}

/// Line oriented report, one field per line in file order
impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        writeln!(f, "Engine Version: {}", header.engine_version)?;
        writeln!(f, "Save Number: {}", header.save_number)?;
        writeln!(f, "Character Name: {}", header.character_name)?;
        writeln!(f, "Character Level: {}", header.character_level)?;
        writeln!(f, "Character Location: {}", header.character_location)?;
        writeln!(f, "Character Playtime: {}", header.character_playtime)?;
        writeln!(f, "Character Race: {}", header.character_race)?;
        writeln!(f, "Character Sex: {}", header.character_sex)?;
        writeln!(f, "Filetime: {}", header.filetime)?;
        writeln!(f, "Screenshot: {}", self.screenshot)?;
        writeln!(f, "Compression: {}", self.compression)?;
        writeln!(f, "Format Version: {}", self.format_version)?;

        for (i, plugin) in self.plugins.iter().enumerate() {
            writeln!(f, "Plugins [{:03}]: {}", i, plugin)?;
        }

        for (i, plugin) in self.light_plugins.iter().flatten().enumerate() {
            writeln!(f, "Light Plugins [{:05}]: {}", i, plugin)?;
        }

        Ok(())
    }
}

/// Write the report for a single file, framed by a header line and a
/// trailing blank line.
pub fn write_file_report<W: Write>(
    mut writer: W,
    path: &Path,
    report: &SaveReport,
) -> io::Result<()> {
    writeln!(writer, "== File \"{}\" ==", path.display())?;
    write!(writer, "{}", report)?;
    writeln!(writer)
}
