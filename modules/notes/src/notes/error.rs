use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NoteStoreError {
    #[error("I/O error on {}: {}", path.display(), source)]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid notes file {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl NoteStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
