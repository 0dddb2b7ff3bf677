// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use email_domains_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing report files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        Self::write_via_temp(path, data).map_err(|source| InfrastructureError::Output {
            message: format!("failed to write '{}'", path.display()),
            source: Some(source),
        })
    }

    fn write_via_temp(path: &Path, data: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = (|| {
            let file = File::create(&tmp)?;
            let mut w = BufWriter::new(file);
            w.write_all(data)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            fs::rename(&tmp, path)
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
