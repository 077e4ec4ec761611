//! Print the version string and glyph count of the embedded Anton Regular font.

use read_fonts::{FontRef, ReadError, TableProvider, types::NameId};

fn main() -> Result<(), ReadError> {
    let font = FontRef::new(anton::antonregular::TTF)?;

    let name = font.name()?;
    let version = name
        .name_record()
        .iter()
        .find(|record| record.name_id() == NameId::VERSION_STRING)
        .and_then(|record| record.string(name.string_data()).ok())
        .map(|s| s.to_string())
        .unwrap_or_default();

    println!("version:    {version}");
    println!("num glyphs: {}", font.maxp()?.num_glyphs());
    Ok(())
}
