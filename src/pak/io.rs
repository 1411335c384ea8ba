#![forbid(unsafe_code)]

use std::io::{Read, Seek, SeekFrom, Write};

use crate::pak::error::{PakError, PakResult};

/// Number of bytes between the stream's current position and its end.
///
/// The read position is unchanged afterwards; the stream can be consumed
/// from its original position as if this was never called.
pub fn remaining_len<S: Seek>(s: &mut S) -> PakResult<u32> {
    let from = s.stream_position()?;
    let to = s.seek(SeekFrom::End(0))?;

    // End before the current position means the stream state is corrupt.
    let len = to.checked_sub(from).ok_or(PakError::NegativeSize)?;

    s.seek(SeekFrom::Start(from))?;

    if len > u64::from(u32::MAX) {
        return Err(PakError::SizeOverflow(len));
    }
    Ok(len as u32)
}

pub fn write_u32_be(w: &mut dyn Write, v: u32) -> PakResult<()> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

pub fn read_exact<const N: usize>(r: &mut dyn Read) -> PakResult<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

pub fn read_u8(r: &mut dyn Read) -> PakResult<u8> {
    Ok(read_exact::<1>(r)?[0])
}

pub fn read_u32_be(r: &mut dyn Read) -> PakResult<u32> {
    Ok(u32::from_be_bytes(read_exact::<4>(r)?))
}
