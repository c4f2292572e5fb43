/*!
# Fos Save

Fos Save decodes the header of Fallout 4 saves (`.fos`): the character
summary, the embedded screenshot dimensions, and the plugin load order.

```no_run
let data = fossave::read_save("Save1_Nora_Sanctuary.fos")?;
let save = fossave::SaveReport::from_slice(&data)?;
println!("{} is level {}", save.header.character_name, save.header.character_level);
for (i, plugin) in save.plugins.iter().enumerate() {
    println!("[{:03}] {}", i, plugin);
}
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Layout

Every save starts with the 13 byte magic `TESV_SAVEGAME`, followed by the
character summary, a screenshot, and the plugin lists. Engine version 12
introduced RGBA screenshots, light plugins, and the option of storing
everything after the screenshot as an lz4 block at the end of the file.
When that block is present, the plugin lists are read from the
decompressed data instead of the file.

The decode limits can be adjusted with [`SaveDecoder`]:

```
use fossave::{FosErrorKind, SaveDecoder};
let mut decoder = SaveDecoder::new();
decoder.max_decompressed_len(64 * 1024 * 1024);
let err = decoder.decode(b"not a save").unwrap_err();
assert!(matches!(err.kind(), FosErrorKind::BadMagic));
```
*/

mod decode;
mod errors;
mod file;
mod filetime;
pub mod models;
mod reader;
mod report;

pub use decode::*;
pub use errors::*;
pub use file::read_save;
pub use filetime::FileTime;
pub use models::{Compression, SaveHeader, SaveReport, SaveString, Screenshot, Sex};
pub use reader::Reader;
pub use report::write_file_report;
