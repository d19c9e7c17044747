//! Table-driven CRC-16 checksums over buffers and files.

pub mod crc;
pub mod error;
pub mod file;

pub use crate::crc::{
    append_checksum, compute, finalize, generate_table, update, update_slice, verify_trailer,
    Crc16, CrcTable, Options, DEFAULT_INITIAL, DEFAULT_POLYNOMIAL,
};
pub use crate::error::Error;
pub use crate::file::{compute_file, compute_reader, CHUNK_SIZE};
