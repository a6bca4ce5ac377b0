//! Spool files: uniquely-named temporary ZPL documents handed to the
//! print helper.
//!
//! Uniqueness comes from the per-dispatcher sequence number in the file
//! prefix combined with the random suffix `tempfile` appends, so names
//! are collision-free across concurrent dispatchers without consulting
//! the clock. The caller removes the file through
//! [`NamedTempFile::close`]; RAII drop covers every early-return path.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Create a spool file under `dir` and write `payload` into it.
///
/// Any failure here aborts the job before the helper is invoked; the
/// partially-written file is removed on drop.
pub(crate) fn write_spool(dir: &Path, seq: u64, payload: &str) -> io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(&format!("label-{seq:05}-"))
        .suffix(".zpl")
        .tempfile_in(dir)?;
    file.write_all(payload.as_bytes())?;
    file.flush()?;
    Ok(file)
}
