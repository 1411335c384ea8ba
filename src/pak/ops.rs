#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::pak::error::{PakError, PakResult};
use crate::pak::name::BaseName;
use crate::pak::pack::write_bundle;
use crate::pak::read::read_trailer;

/// Packs an image file and a model file into one bundle.
pub fn pack(image: &Path, model: &Path, output: &Path) -> PakResult<()> {
    let name_a = base_name_of(image);
    let name_b = base_name_of(model);

    let mut a = File::open(image)?;
    let mut b = File::open(model)?;
    let mut out = BufWriter::new(File::create(output)?);

    write_bundle(&mut a, &mut b, &mut out, name_a, name_b)
}

/// Splits a bundle back into its two original files inside `output`.
pub fn unpack(pak: &Path, output: &Path) -> PakResult<()> {
    let mut f = File::open(pak)?;
    let (trailer, size_b) = read_trailer(&mut f)?;

    let path_a = entry_path(output, &trailer.name_a)?;
    let path_b = entry_path(output, &trailer.name_b)?;
    std::fs::create_dir_all(output)?;

    f.seek(SeekFrom::Start(0))?;
    copy_payload(&mut f, &path_a, u64::from(trailer.size_a))?;
    copy_payload(&mut f, &path_b, size_b)?;

    Ok(())
}

/// Prints the recorded names and both payload sizes.
pub fn info(pak: &Path) -> PakResult<()> {
    let mut f = File::open(pak)?;
    let (trailer, size_b) = read_trailer(&mut f)?;

    println!("image: {}  ({} bytes)", trailer.name_a.display(), trailer.size_a);
    println!("model: {}  ({} bytes)", trailer.name_b.display(), size_b);
    println!("trailer: {} bytes", trailer.encoded_len());
    Ok(())
}

fn base_name_of(path: &Path) -> BaseName {
    let raw = path.to_string_lossy();
    let name = BaseName::from_path(&raw);
    if name.was_truncated() {
        eprintln!(
            "warning: file name in \"{raw}\" is longer than 255 bytes, keeping the trailing 255: \"{}\"",
            name.display()
        );
    }
    name
}

fn entry_path(dir: &Path, name: &BaseName) -> PakResult<PathBuf> {
    let s = name
        .to_str()
        .ok_or_else(|| PakError::Invalid("name is not utf8".into()))?;
    if s.is_empty() {
        return Err(PakError::Invalid("empty file name in trailer".into()));
    }
    if s.contains('/') || s.contains('\\') {
        return Err(PakError::Invalid(format!("name contains a path separator: {s}")));
    }
    Ok(dir.join(s))
}

fn copy_payload(f: &mut File, dest: &Path, len: u64) -> PakResult<()> {
    let mut out = BufWriter::new(File::create(dest)?);
    let copied = std::io::copy(&mut std::io::Read::by_ref(f).take(len), &mut out)?;
    if copied != len {
        return Err(PakError::Invalid(format!(
            "payload truncated: expected {len} bytes, got {copied}"
        )));
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn pack_then_unpack_restores_both_files() {
        let dir = tempdir().unwrap();
        let img = dir.path().join("img.png");
        let stl = dir.path().join("model.stl");
        let out = dir.path().join("bundle.pak");

        let img_bytes: Vec<u8> = (0..4096u32).map(|i| (i % 253) as u8).collect();
        let stl_bytes = b"solid cube\nendsolid cube\n".to_vec();
        fs::write(&img, &img_bytes).unwrap();
        fs::write(&stl, &stl_bytes).unwrap();

        pack(&img, &stl, &out).unwrap();

        let extracted = dir.path().join("extracted");
        unpack(&out, &extracted).unwrap();

        assert_eq!(fs::read(extracted.join("img.png")).unwrap(), img_bytes);
        assert_eq!(fs::read(extracted.join("model.stl")).unwrap(), stl_bytes);
    }

    #[test]
    fn bundle_length_matches_the_layout() {
        let dir = tempdir().unwrap();
        let img = dir.path().join("a.png");
        let stl = dir.path().join("b.stl");
        let out = dir.path().join("out.pak");

        fs::write(&img, [0x41, 0x42, 0x43]).unwrap();
        fs::write(&stl, [0x53, 0x54]).unwrap();

        pack(&img, &stl, &out).unwrap();

        let bytes = fs::read(&out).unwrap();
        let mut expected = vec![0x41, 0x42, 0x43, 0x53, 0x54];
        expected.extend_from_slice(b"a.png");
        expected.extend_from_slice(b"b.stl");
        expected.extend_from_slice(&[5, 5]);
        expected.extend_from_slice(&[0, 0, 0, 3]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn unpack_rejects_names_with_separators() {
        let dir = tempdir().unwrap();
        let pak = dir.path().join("evil.pak");

        // Payloads "abc" / "m", name A is "a/b".
        let mut bytes = b"abcm".to_vec();
        bytes.extend_from_slice(b"a/b");
        bytes.extend_from_slice(b"m");
        bytes.extend_from_slice(&[3, 1]);
        bytes.extend_from_slice(&[0, 0, 0, 3]);
        fs::write(&pak, bytes).unwrap();

        let err = unpack(&pak, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, PakError::Invalid(_)));
    }

    #[test]
    fn unpack_rejects_empty_names() {
        let dir = tempdir().unwrap();
        let pak = dir.path().join("anon.pak");

        let mut bytes = b"xy".to_vec();
        bytes.extend_from_slice(&[0, 0, 0, 0, 0, 1]);
        fs::write(&pak, bytes).unwrap();

        let err = unpack(&pak, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, PakError::Invalid(_)));
    }
}
