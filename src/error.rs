use std::backtrace::Backtrace;

use crate::solver::variable::Variable;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Ways in which a caller-supplied problem or puzzle can be malformed.
///
/// These are caller programming errors and are surfaced immediately. An
/// unsatisfiable problem is *not* an error; the solver reports it as a
/// normal no-solution outcome.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("constraint references `{0}`, which is not a declared variable")]
    UnknownVariable(Variable),
    #[error("variable `{0}` is declared but has no domain")]
    MissingDomain(Variable),
    #[error("variable `{0}` is declared more than once")]
    DuplicateVariable(Variable),
    #[error("binary constraint references `{0}` on both ends")]
    DegenerateConstraint(Variable),
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The underlying [`SolverError`], without the captured backtrace.
    pub fn inner(&self) -> &SolverError {
        let Error::Inner { inner, .. } = self;
        inner
    }
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}
