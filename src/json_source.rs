use std::io::Read;

use anyhow::{
    Context,
    Result,
};
use unicode_reader::CodePoints;

/// Reads everything from `reader` as UTF-8 code points.
///
/// Fails on the first I/O error or invalid UTF-8 sequence.
pub fn read_json_text<R>(reader: R) -> Result<String>
    where R: Read
{
    let mut text = String::new();
    for (i, item) in CodePoints::from(reader).enumerate() {
        let c = item.with_context(|| format!("failed to read JSON text at code point {}", i))?;
        text.push(c);
    }

    log::trace!("read {} byte(s) of JSON text", text.len());
    Ok(text)
}
