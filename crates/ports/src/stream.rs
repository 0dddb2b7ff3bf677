// crates/ports/src/stream.rs
use std::{io::Read, path::Path};

use email_domains_shared_kernel::Result;

/// Owned, readable input handed to a [`crate::RecordSource`].
pub type ByteStream = Box<dyn Read>;

/// Port for opening the input named by a path.
///
/// Failures must surface as I/O errors that keep the original
/// [`std::io::ErrorKind`], so callers can tell "not found" apart.
pub trait StreamOpener {
    fn open(&self, path: &Path) -> Result<ByteStream>;
}
