//! Table-driven CRC-16 over a configurable polynomial.
//!
//! The table is built once by [`generate_table`] and handed by reference to
//! every computation. All entry points fold bytes through [`update`].

use byteorder::{BigEndian, ByteOrder};
use std::path::Path;

use crate::error::Error;
use crate::file;

/// Generator polynomial used when none is given (x^16 + x^12 + x^5 + 1).
pub const DEFAULT_POLYNOMIAL: u16 = 0x1021;

/// Register value before the first byte is folded in.
pub const DEFAULT_INITIAL: u16 = 0xFFFF;

/// Lookup table indexed by byte value.
pub type CrcTable = [u16; 256];

/// Per-computation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub initial: u16,
    /// Complement the register before returning it.
    pub invert: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            invert: false,
        }
    }
}

/// Builds the 256-entry lookup table for `polynomial`.
///
/// `table[b]` is the remainder of `b << 8` after eight rounds of
/// shift-and-conditional-xor, so `table[0]` is always zero.
pub fn generate_table(polynomial: u16) -> CrcTable {
    let mut table = [0u16; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let mut r = (i as u16) << 8;
        for _ in 0..8 {
            if (r & 0x8000) != 0 {
                r = (r << 1) ^ polynomial;
            } else {
                r <<= 1;
            }
        }
        *entry = r;
    }
    table
}

/// Folds a single byte into the register.
#[inline]
pub fn update(crc: u16, byte: u8, table: &CrcTable) -> u16 {
    let index = ((crc >> 8) as u8) ^ byte;
    table[index as usize] ^ ((crc & 0xFF) << 8)
}

/// Folds every byte of `data` into the register without finalizing.
#[inline]
pub fn update_slice(crc: u16, data: &[u8], table: &CrcTable) -> u16 {
    data.iter().fold(crc, |crc, &byte| update(crc, byte, table))
}

#[inline]
pub fn finalize(crc: u16, invert: bool) -> u16 {
    if invert {
        !crc
    } else {
        crc
    }
}

/// Checksum of an in-memory buffer.
pub fn compute(data: &[u8], table: &CrcTable, options: Options) -> u16 {
    let crc = update_slice(options.initial, data, table);
    finalize(crc, options.invert)
}

/// Appends the checksum of `frame` to it, high byte first.
pub fn append_checksum(frame: &mut Vec<u8>, table: &CrcTable, options: Options) {
    let crc = compute(frame, table, options);
    let mut trailer = [0u8; 2];
    BigEndian::write_u16(&mut trailer, crc);
    frame.extend_from_slice(&trailer);
}

/// Checks a frame whose last two bytes are the big-endian checksum of the rest.
pub fn verify_trailer(frame: &[u8], table: &CrcTable, options: Options) -> bool {
    if frame.len() < 2 {
        return false;
    }
    let (body, trailer) = frame.split_at(frame.len() - 2);
    BigEndian::read_u16(trailer) == compute(body, table, options)
}

/// A table bundled with its options.
pub struct Crc16 {
    table: CrcTable,
    options: Options,
}

impl Crc16 {
    pub fn new(polynomial: u16, options: Options) -> Self {
        Self {
            table: generate_table(polynomial),
            options,
        }
    }

    pub fn table(&self) -> &CrcTable {
        &self.table
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn checksum(&self, data: &[u8]) -> u16 {
        compute(data, &self.table, self.options)
    }

    pub fn checksum_file<P: AsRef<Path>>(&self, path: P) -> Result<u16, Error> {
        file::compute_file(path, &self.table, self.options)
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new(DEFAULT_POLYNOMIAL, Options::default())
    }
}

#[cfg(test)]
mod proptests;
