use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, UtilErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum UtilErr {
    /// A length invariant was violated (e.g. dot product operands, ragged rows).
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A column has zero range and the normalizer was told to reject it.
    DegenerateColumn { column: usize, value: f64 },
    /// At least one element was required.
    EmptyInput { what: &'static str },
    /// A named resource could not be opened or read.
    Resource { path: PathBuf, source: io::Error },
    Io(io::Error),
    /// A field could not be parsed as a number.
    Parse {
        record: usize,
        column: usize,
        field: String,
    },
    Config(serde_json::Error),
}

impl Display for UtilErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            UtilErr::DegenerateColumn { column, value } => write!(
                f,
                "column {column} is degenerate, every value equals {value}"
            ),
            UtilErr::EmptyInput { what } => write!(f, "empty input: {what} must not be empty"),
            UtilErr::Resource { path, source } => {
                write!(f, "cannot read resource '{}': {source}", path.display())
            }
            UtilErr::Io(e) => write!(f, "io error: {e}"),
            UtilErr::Parse {
                record,
                column,
                field,
            } => write!(
                f,
                "record {record}, column {column}: cannot parse '{field}' as a number"
            ),
            UtilErr::Config(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for UtilErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UtilErr::Resource { source, .. } => Some(source),
            UtilErr::Io(e) => Some(e),
            UtilErr::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for UtilErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for UtilErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}
