//! Checksums over readers and files, consumed in fixed-size chunks.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::crc::{finalize, update_slice, CrcTable, Options};
use crate::error::Error;

/// Bytes requested from the reader per read call.
pub const CHUNK_SIZE: usize = 1024;

/// Checksum of everything `reader` yields until end of stream.
pub fn compute_reader<R: Read>(mut reader: R, table: &CrcTable, options: Options) -> io::Result<u16> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut crc = options.initial;
    let mut total = 0usize;

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                crc = update_slice(crc, &buffer[..n], table);
                total += n;
            }
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    debug!("Folded {} bytes", total);
    Ok(finalize(crc, options.invert))
}

/// Checksum of the file at `path`.
///
/// Failing to open the file yields [`Error::NotFound`]; a fault while reading
/// it yields [`Error::Io`]. The handle is closed on return either way.
pub fn compute_file<P: AsRef<Path>>(path: P, table: &CrcTable, options: Options) -> Result<u16, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        debug!("Failed to open {}: {}", path.display(), source);
        Error::NotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Opened {}", path.display());
    compute_reader(file, table, options).map_err(Error::Io)
}
