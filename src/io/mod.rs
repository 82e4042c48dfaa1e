//! Serialization of a finished [`Mesh`] to STL and OBJ.

use crate::mesh::Mesh;
use std::path::Path;

pub mod obj;
pub mod stl;

/// Decimal places used for coordinates unless a caller asks otherwise.
pub const DEFAULT_PRECISION: usize = 5;

/// Generic I/O and format‑conversion errors.
///
/// Binary STL is behind the `stl-io` feature flag. When it is disabled,
/// requesting it yields [`IoError::Unimplemented`].
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Feature is not implemented: {0}")]
    Unimplemented(String),
}

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    StlAscii,
    StlBinary,
    Obj,
}

impl Format {
    /// Pick a format from the file extension: `.stl` is ASCII STL, `.obj` is OBJ.
    pub fn from_path(path: &Path) -> Result<Format, IoError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("stl") => Ok(Format::StlAscii),
            Some("obj") => Ok(Format::Obj),
            _ => Err(IoError::UnknownFormat(path.display().to_string())),
        }
    }
}

impl Mesh {
    /// Serialize the active faces in `format`.
    pub fn encode(&self, format: Format) -> Result<Vec<u8>, IoError> {
        match format {
            Format::StlAscii => Ok(self.to_stl_ascii().into_bytes()),
            Format::Obj => Ok(self.to_obj().into_bytes()),
            #[cfg(feature = "stl-io")]
            Format::StlBinary => Ok(self.to_stl_binary()?),
            #[cfg(not(feature = "stl-io"))]
            Format::StlBinary => Err(IoError::Unimplemented(
                "binary STL requires the `stl-io` feature".to_string(),
            )),
        }
    }

    /// Serialize and write to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>, format: Format) -> Result<(), IoError> {
        let bytes = self.encode(format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
