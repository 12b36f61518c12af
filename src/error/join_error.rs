use std::path::PathBuf;

use crate::error::PreprocessError;

#[derive(Debug)]
/// Represents all errors that can occur while collecting, preprocessing and
/// merging a source directory.
pub enum JoinError {
    /// The input directory does not exist.
    InputNotFound {
        /// The path that was given.
        path: PathBuf,
    },
    /// The input path exists but is not a directory.
    InputNotDirectory {
        /// The path that was given.
        path: PathBuf,
    },
    /// The output file does not carry the source extension.
    OutputExtension {
        /// The source extension, without the dot.
        expected: String,
        /// The extension that was found, empty if there was none.
        found:    String,
    },
    /// Reading or writing a file failed.
    Io {
        /// The file involved.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// Walking the input directory failed.
    Walk {
        /// The underlying traversal error.
        source: walkdir::Error,
    },
    /// A source file was rejected by the preprocessor.
    Preprocess {
        /// The file being preprocessed.
        path:   PathBuf,
        /// The preprocessor failure.
        source: PreprocessError,
    },
}

impl std::fmt::Display for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputNotFound { path } => {
                write!(f, "{}: input folder does not exist.", path.display())
            },
            Self::InputNotDirectory { path } => {
                write!(f, "{}: input is not a folder.", path.display())
            },
            Self::OutputExtension { expected, found } => write!(f,
                                                                "Expected '.{expected}' as extension for output file, but was '{found}'."),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Walk { source } => write!(f, "Failed to scan input folder: {source}"),
            Self::Preprocess { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for JoinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Walk { source } => Some(source),
            Self::Preprocess { source, .. } => Some(source),
            Self::InputNotFound { .. }
            | Self::InputNotDirectory { .. }
            | Self::OutputExtension { .. } => None,
        }
    }
}

impl From<walkdir::Error> for JoinError {
    fn from(source: walkdir::Error) -> Self {
        Self::Walk { source }
    }
}
