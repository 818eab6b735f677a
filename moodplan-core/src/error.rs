//! Error taxonomy shared by the planner core.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Blank title, absent mood/effort, unknown enumeration name.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("no activity with id {0}")]
    NotFound(u32),

    /// The id counter cannot advance without reusing an id.
    #[error("no ids left after {0}")]
    IdsExhausted(u32),

    #[error("activity {0} has no due date to export")]
    MissingDueDate(u32),

    /// File unreadable/unwritable. The file's state is undefined after a failed write.
    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlannerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
