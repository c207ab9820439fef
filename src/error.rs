use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The request path holds no segments but is not the root `/`.
    BadPath { path: String },
    /// No edge or no declaration satisfies the request.
    NotFound { path: String },
    /// A constraint source failed to compile.
    InvalidConstraint { name: String, source: regex::Error },
    InvalidMethod { method: String },
}

impl Error {
    pub fn bad_path<S: AsRef<str>>(path: S) -> Self {
        Self::BadPath {
            path: path.as_ref().to_string(),
        }
    }

    pub fn not_found<S: AsRef<str>>(path: S) -> Self {
        Self::NotFound {
            path: path.as_ref().to_string(),
        }
    }

    pub fn invalid_constraint<S: AsRef<str>>(name: S, source: regex::Error) -> Self {
        Self::InvalidConstraint {
            name: name.as_ref().to_string(),
            source,
        }
    }

    pub fn invalid_method<S: AsRef<str>>(method: S) -> Self {
        Self::InvalidMethod {
            method: method.as_ref().to_string(),
        }
    }

    /// Both lookup failures surface as "no such path".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BadPath { .. } | Self::NotFound { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadPath { path } | Self::NotFound { path } => {
                write!(f, "No such path -- {path}")
            }
            Self::InvalidConstraint { name, source } => {
                write!(f, "Invalid constraint for '{name}': {source}")
            }
            Self::InvalidMethod { method } => write!(f, "Invalid method '{method}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConstraint { source, .. } => Some(source),
            _ => None,
        }
    }
}
