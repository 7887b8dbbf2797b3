use std::fmt;

/// Why a snapshot could not be loaded. `Display` is the user-facing status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request never produced a response.
    Request { file: &'static str, detail: String },
    /// The server answered with a non-success status.
    Status { file: &'static str, status: u16 },
    /// The body was not a JSON document.
    Parse { file: &'static str, detail: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { file, .. } => write!(f, "No se pudo cargar {file}"),
            Self::Request { file, detail } | Self::Parse { file, detail } => {
                write!(f, "No se pudo cargar {file} ({detail})")
            }
        }
    }
}

impl std::error::Error for LoadError {}
