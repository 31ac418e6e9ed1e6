use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ResolveError, Result};

/// Reads a local artifact file, mapping a missing file to `ArtifactNotFound`
/// so the operator sees exactly which input is absent.
pub(crate) fn read_artifact(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ResolveError::ArtifactNotFound {
            path: path.to_path_buf(),
        },
        _ => ResolveError::malformed(path, format!("could not read file: {}", err)),
    })
}
