use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// An opaque identifier for a decision variable, unique within a
/// [`Problem`](crate::solver::problem::Problem).
///
/// Variables are named by the problem frontend (a letter in a
/// cryptarithmetic puzzle, a region in a map, a cell in a grid) and the
/// solver never looks inside the name. Cloning is cheap: the name is
/// reference-counted.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(Arc<str>);

impl Variable {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable({:?})", &*self.0)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// Serialized as a bare string so that assignments come out as plain JSON
// objects keyed by variable name.
impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
