#![forbid(unsafe_code)]

use std::borrow::Cow;

use crate::pak::error::{PakError, PakResult};
use crate::pak::format::NAME_MAX;

/// Base file name of an input, as recorded in the trailer.
///
/// The byte length is always <= [`NAME_MAX`], so it fits the trailer's
/// one-byte length fields by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseName {
    bytes: Vec<u8>,
    truncated: bool,
}

impl BaseName {
    /// Extracts the base name (file name with extension) from a path string.
    ///
    /// The name is the substring after the last `'/'`, or the whole input
    /// when no separator is present. A path ending in `'/'` yields an empty
    /// name, which is not an error.
    ///
    /// Names longer than [`NAME_MAX`] bytes keep their *trailing* 255 bytes
    /// and drop the leading prefix. Existing bundles depend on this, so the
    /// suffix-keeping direction must not change.
    ///
    /// TODO: split at the last unescaped `'/'` instead of the last `'/'`
    /// (e.g. `"/home/user/my\/file.png"` currently yields `"file.png"`).
    pub fn from_path(path: &str) -> Self {
        let name = match path.rfind('/') {
            Some(p) => &path[p + 1..],
            None => path,
        };

        let bytes = name.as_bytes();
        if bytes.len() > NAME_MAX {
            Self {
                bytes: bytes[bytes.len() - NAME_MAX..].to_vec(),
                truncated: true,
            }
        } else {
            Self {
                bytes: bytes.to_vec(),
                truncated: false,
            }
        }
    }

    /// Wraps name bytes decoded from an existing trailer.
    pub(crate) fn from_trailer(bytes: Vec<u8>) -> PakResult<Self> {
        if bytes.len() > NAME_MAX {
            return Err(PakError::Invalid(format!(
                "name is {} bytes, over the {NAME_MAX}-byte limit",
                bytes.len()
            )));
        }
        Ok(Self { bytes, truncated: false })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len_u8(&self) -> u8 {
        // Always valid: the length invariant is enforced at construction.
        self.bytes.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when `from_path` had to drop a leading prefix to fit.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub fn display(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}
