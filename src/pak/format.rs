#![forbid(unsafe_code)]

use std::io::Write;

use crate::pak::error::PakResult;
use crate::pak::io::write_u32_be;
use crate::pak::name::BaseName;

/// Maximum base-name length in bytes; each name length is one trailer byte.
pub const NAME_MAX: usize = 255;

/// Fixed part of the trailer: two length bytes plus the big-endian u32 size.
pub const TRAILER_FIXED_LEN: u64 = 6;

/// Bundle layout:
/// - payload A (raw bytes of the image file, `size_a` bytes)
/// - payload B (raw bytes of the model file, size unrecorded)
/// - trailer:
///   - [name_a bytes]
///   - [name_b bytes]
///   - [u8 len of name_a]
///   - [u8 len of name_b]
///   - [u32 size_a, big-endian]
///
/// There is no magic, version tag, or checksum; a reader locates the
/// payload split from the fixed trailer shape and the container length
/// alone. Payload B's size is derived, never stored.
#[derive(Debug, Clone)]
pub struct Trailer {
    pub name_a: BaseName,
    pub name_b: BaseName,
    pub size_a: u32,
}

impl Trailer {
    pub fn encode(&self, w: &mut dyn Write) -> PakResult<()> {
        w.write_all(self.name_a.as_bytes())?;
        w.write_all(self.name_b.as_bytes())?;
        w.write_all(&[self.name_a.len_u8(), self.name_b.len_u8()])?;
        write_u32_be(w, self.size_a)?;
        Ok(())
    }

    pub fn encoded_len(&self) -> u64 {
        self.name_a.as_bytes().len() as u64
            + self.name_b.as_bytes().len() as u64
            + TRAILER_FIXED_LEN
    }
}
