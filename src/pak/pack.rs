#![forbid(unsafe_code)]

use std::io::{Read, Seek, Write};

use crate::pak::error::PakResult;
use crate::pak::format::Trailer;
use crate::pak::io::remaining_len;
use crate::pak::name::BaseName;

/// Writes a complete bundle: payload A, payload B, then the trailer.
///
/// Payload A is measured before anything is written, so a size failure
/// leaves the sink untouched.
pub(crate) fn write_bundle<A, B, W>(
    image: &mut A,
    model: &mut B,
    out: &mut W,
    name_a: BaseName,
    name_b: BaseName,
) -> PakResult<()>
where
    A: Read + Seek,
    B: Read,
    W: Write,
{
    let size_a = remaining_len(image)?;

    std::io::copy(image, out)?;
    std::io::copy(model, out)?;

    let trailer = Trailer {
        name_a,
        name_b,
        size_a,
    };
    trailer.encode(out)?;

    out.flush()?;
    Ok(())
}
