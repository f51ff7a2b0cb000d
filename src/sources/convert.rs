//! PCF to BDF conversion
//!
//! X11 ships fonts as gzip-compressed PCF. The font engine and the header
//! scanner both read BDF, so every candidate is decompressed and run
//! through `pcf2bdf` into the scratch directory first.

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to decompress {path}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {executable}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: io::Error,
    },

    #[error("{executable} exited with {status}: {stderr}")]
    Failed {
        executable: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("conversion produced no output at {0}")]
    EmptyOutput(PathBuf),
}

/// Turns one source font file into a BDF file
pub trait BitmapConverter {
    fn convert(&mut self, source: &Path, bdf: &Path) -> Result<(), ConvertError>;
}

/// gunzip in-process, then the `pcf2bdf` utility
#[derive(Debug, Clone)]
pub struct Pcf2Bdf {
    executable: PathBuf,
}

impl Pcf2Bdf {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for Pcf2Bdf {
    fn default() -> Self {
        Self::new("pcf2bdf")
    }
}

impl BitmapConverter for Pcf2Bdf {
    fn convert(&mut self, source: &Path, bdf: &Path) -> Result<(), ConvertError> {
        let pcf = bdf.with_extension("pcf");
        gunzip(source, &pcf)?;

        let executable = self.executable.display().to_string();
        let output = Command::new(&self.executable)
            .arg("-o")
            .arg(bdf)
            .arg(&pcf)
            .output();

        if let Err(e) = fs::remove_file(&pcf) {
            tracing::debug!("Could not remove {}: {}", pcf.display(), e);
        }

        let output = output.map_err(|source| ConvertError::Spawn {
            executable: executable.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                executable,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        ensure_non_empty(bdf)
    }
}

/// Decompress a gzip file to `dest`
pub fn gunzip(source: &Path, dest: &Path) -> Result<(), ConvertError> {
    let decompress_err = |source_err: io::Error| ConvertError::Decompress {
        path: source.to_path_buf(),
        source: source_err,
    };

    let input = File::open(source).map_err(decompress_err)?;
    let mut decoder = GzDecoder::new(input);
    let mut out = File::create(dest).map_err(decompress_err)?;
    io::copy(&mut decoder, &mut out).map_err(decompress_err)?;
    Ok(())
}

pub fn ensure_non_empty(path: &Path) -> Result<(), ConvertError> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        _ => Err(ConvertError::EmptyOutput(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn gunzip_restores_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("helvR10.pcf.gz");
        let mut encoder = GzEncoder::new(File::create(&source).unwrap(), Compression::default());
        encoder.write_all(b"\x01fcp pcf payload").unwrap();
        encoder.finish().unwrap();

        let dest = dir.path().join("helvR10.pcf");
        gunzip(&source, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"\x01fcp pcf payload");
    }

    #[test]
    fn corrupt_gzip_is_a_decompress_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.pcf.gz");
        fs::write(&source, b"definitely not gzip").unwrap();

        let err = gunzip(&source, &dir.path().join("broken.pcf")).unwrap_err();
        assert!(matches!(err, ConvertError::Decompress { .. }));
    }

    #[test]
    fn missing_tool_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("6x13.pcf.gz");
        let mut encoder = GzEncoder::new(File::create(&source).unwrap(), Compression::fast());
        encoder.write_all(b"pcf").unwrap();
        encoder.finish().unwrap();

        let mut converter = Pcf2Bdf::new(dir.path().join("no-such-pcf2bdf"));
        let bdf = dir.path().join("misc_6x13.bdf");
        let err = converter.convert(&source, &bdf).unwrap_err();
        assert!(matches!(err, ConvertError::Spawn { .. }), "{err}");
        assert!(!dir.path().join("misc_6x13.pcf").exists());
    }

    #[test]
    fn empty_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bdf = dir.path().join("empty.bdf");
        fs::write(&bdf, b"").unwrap();
        assert!(matches!(
            ensure_non_empty(&bdf),
            Err(ConvertError::EmptyOutput(_))
        ));
        assert!(ensure_non_empty(&dir.path().join("absent.bdf")).is_err());
    }
}
