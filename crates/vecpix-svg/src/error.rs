use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a file or string into a [`Document`](crate::Document).
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot load document `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not well-formed XML.
    #[error("cannot load document `{}`", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The root element is not `<svg>`.
    #[error("cannot load document `{}`: root element is <{tag}>, expected <svg>", path.display())]
    UnexpectedRoot { path: PathBuf, tag: String },
}

impl LoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Xml { path, .. }
            | LoadError::UnexpectedRoot { path, .. } => path,
        }
    }
}
