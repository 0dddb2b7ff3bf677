use std::{fs::File, io::BufReader, path::Path};

use email_domains_ports::{ByteStream, StreamOpener};
use email_domains_shared_kernel::{InfraResult, InfrastructureError, Result};
use log::debug;

/// Filesystem adapter for [`StreamOpener`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`, keeping the path in the error.
    pub fn open_file(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| InfrastructureError::Open { path: path.to_path_buf(), source })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open_file(path).map(BufReader::new)
    }
}

impl StreamOpener for FileReader {
    fn open(&self, path: &Path) -> Result<ByteStream> {
        let reader = Self::open_buffered(path)?;
        debug!("opened {}", path.display());
        Ok(Box::new(reader))
    }
}
