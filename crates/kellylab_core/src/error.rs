use std::fmt;

/// Errors detected while validating parameter ranges, before any tuple
/// is generated
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Two ranges declare the same parameter name
    DuplicateParameter(String),
    /// The range name is empty or not a valid identifier
    InvalidParameterName(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DuplicateParameter(name) => {
                write!(f, "duplicate parameter name {name:?}")
            }
            GridError::InvalidParameterName(name) => {
                write!(f, "parameter name {name:?} is not a valid identifier")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The strategy source text failed to parse
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    /// Underlying parser message
    pub message: String,
}

impl CompileError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error in strategy code: {}", self.message)
    }
}

impl std::error::Error for CompileError {}

/// Top-level failure of a sweep run
///
/// A run either produces the complete result collection or exactly one of
/// these. `Grid`, `Config`, and `Compile` are rejected before any thread
/// is spawned; `Strategy` and `Worker` abort the whole run.
#[derive(Debug, Clone)]
pub enum SweepError {
    /// Invalid parameter ranges (caught pre-dispatch)
    Grid(GridError),
    /// Invalid simulation configuration (caught pre-dispatch)
    Config(String),
    /// Strategy source failed to compile (blocks run start)
    Compile(CompileError),
    /// The strategy function raised an error mid-trial
    Strategy(String),
    /// An execution context failed to start or never reported back
    Worker(String),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Grid(e) => write!(f, "{e}"),
            SweepError::Config(msg) => write!(f, "configuration error: {msg}"),
            SweepError::Compile(e) => write!(f, "{e}"),
            SweepError::Strategy(msg) => {
                write!(f, "runtime error in strategy function: {msg}")
            }
            SweepError::Worker(msg) => write!(f, "worker error: {msg}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Grid(e) => Some(e),
            SweepError::Compile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SweepError {
    fn from(e: GridError) -> Self {
        SweepError::Grid(e)
    }
}

impl From<CompileError> for SweepError {
    fn from(e: CompileError) -> Self {
        SweepError::Compile(e)
    }
}
