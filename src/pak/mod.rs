#![forbid(unsafe_code)]

mod error;
mod format;
mod io;
mod name;
mod ops;
mod pack;
mod read;

pub use error::{PakError, PakResult};
pub use format::{Trailer, NAME_MAX, TRAILER_FIXED_LEN};
pub use name::BaseName;

pub use ops::{info, pack, unpack};
