//! Failures of the fixture load/store cycle.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal resource errors. Each one ends the run with a nonzero exit code.
#[derive(Debug, Error)]
pub enum AugmentError {
    #[error("read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The `TEST_CSV_RAW` literal is missing, unterminated, or blank.
    #[error("could not find TEST_CSV_RAW in {}", path.display())]
    NotFound { path: PathBuf },

    #[error("write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
