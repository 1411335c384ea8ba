#![forbid(unsafe_code)]

use std::io::{Read, Seek, SeekFrom};

use crate::pak::error::{PakError, PakResult};
use crate::pak::format::{Trailer, TRAILER_FIXED_LEN};
use crate::pak::io::{read_u32_be, read_u8};
use crate::pak::name::BaseName;

/// Decodes the trailer from the end of a bundle and derives the size of
/// payload B from the container length.
///
/// Returns the trailer plus `size_b`. The stream position afterwards is
/// unspecified; callers seek before reading payloads.
pub(crate) fn read_trailer<R: Read + Seek>(r: &mut R) -> PakResult<(Trailer, u64)> {
    let total = r.seek(SeekFrom::End(0))?;
    if total < TRAILER_FIXED_LEN {
        return Err(PakError::Invalid("file too small for a trailer".into()));
    }

    r.seek(SeekFrom::End(-(TRAILER_FIXED_LEN as i64)))?;
    let len_a = u64::from(read_u8(r)?);
    let len_b = u64::from(read_u8(r)?);
    let size_a = read_u32_be(r)?;

    let trailer_len = TRAILER_FIXED_LEN + len_a + len_b;
    if total < trailer_len {
        return Err(PakError::Invalid("name lengths exceed the container".into()));
    }
    let payloads_len = total - trailer_len;

    let size_b = payloads_len
        .checked_sub(u64::from(size_a))
        .ok_or_else(|| PakError::Invalid("recorded size exceeds the container".into()))?;

    r.seek(SeekFrom::Start(payloads_len))?;
    let mut name_a = vec![0u8; len_a as usize];
    r.read_exact(&mut name_a)?;
    let mut name_b = vec![0u8; len_b as usize];
    r.read_exact(&mut name_b)?;

    Ok((
        Trailer {
            name_a: BaseName::from_trailer(name_a)?,
            name_b: BaseName::from_trailer(name_b)?,
            size_a,
        },
        size_b,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_a_well_formed_bundle() {
        let mut bundle = Vec::new();
        bundle.extend_from_slice(&[0x41, 0x42, 0x43]);
        bundle.extend_from_slice(&[0x53, 0x54]);
        bundle.extend_from_slice(b"img.png");
        bundle.extend_from_slice(b"model.stl");
        bundle.extend_from_slice(&[7, 9]);
        bundle.extend_from_slice(&[0, 0, 0, 3]);

        let (trailer, size_b) = read_trailer(&mut Cursor::new(bundle)).unwrap();
        assert_eq!(trailer.name_a.as_bytes(), b"img.png");
        assert_eq!(trailer.name_b.as_bytes(), b"model.stl");
        assert_eq!(trailer.size_a, 3);
        assert_eq!(size_b, 2);
    }

    #[test]
    fn decodes_empty_payloads_and_names() {
        let bundle = vec![0, 0, 0, 0, 0, 0];
        let (trailer, size_b) = read_trailer(&mut Cursor::new(bundle)).unwrap();
        assert!(trailer.name_a.is_empty());
        assert!(trailer.name_b.is_empty());
        assert_eq!(trailer.size_a, 0);
        assert_eq!(size_b, 0);
    }

    #[test]
    fn rejects_file_smaller_than_the_fixed_trailer() {
        let err = read_trailer(&mut Cursor::new(vec![0u8; 5])).unwrap_err();
        assert!(matches!(err, PakError::Invalid(_)));
    }

    #[test]
    fn rejects_name_lengths_past_the_container() {
        // Claims 200 + 200 name bytes inside a 6-byte file.
        let bundle = vec![200, 200, 0, 0, 0, 0];
        let err = read_trailer(&mut Cursor::new(bundle)).unwrap_err();
        assert!(matches!(err, PakError::Invalid(_)));
    }

    #[test]
    fn rejects_recorded_size_past_the_container() {
        // One payload byte available but size_a says four.
        let mut bundle = vec![0xAA];
        bundle.extend_from_slice(&[0, 0, 0, 0, 0, 4]);
        let err = read_trailer(&mut Cursor::new(bundle)).unwrap_err();
        assert!(matches!(err, PakError::Invalid(_)));
    }
}
