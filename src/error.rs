//! Errors arising at the solver-configuration boundary
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlmNetError>;

/// An error produced while checking a solver configuration or by a solver
/// engine consuming one.
///
/// Building a parameter set never fails; the `Invalid*` variants are raised
/// when the finished record is checked, which happens at the latest when a
/// fit operation is invoked. The engine-side variants are reserved for
/// [`GlmSolver`](crate::GlmSolver) implementations.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Error)]
pub enum GlmNetError {
    /// The thread count hint must be positive when present
    #[error("thread count must be positive, got {0}")]
    InvalidThreadCount(usize),
    /// Cross validation needs at least one fold
    #[error("number of folds must be positive, got {0}")]
    InvalidFoldCount(usize),
    /// The convergence tolerance must be positive
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f32),
    /// The early stopping threshold is relative and lives in the unit range
    #[error("early stopping error fraction must lie in (0, 1], got {0}")]
    InvalidErrorFraction(f32),
    /// The solver needs at least one iteration
    #[error("maximum number of iterations must be positive, got {0}")]
    InvalidMaxIterations(u32),
    /// The smallest path lambda is a fraction of the largest
    #[error("lambda min ratio must lie in [0, 1), got {0}")]
    InvalidLambdaMinRatio(f32),
    /// The lambda path cannot be empty
    #[error("number of lambdas must be positive, got {0}")]
    InvalidLambdaCount(u32),
    /// The alpha grid cannot be empty
    #[error("number of alphas must be positive, got {0}")]
    InvalidAlphaCount(u32),
    /// The L1 blend bounds must be ordered and inside the unit range
    #[error("alpha range [{0}, {1}] must be ordered and lie within [0, 1]")]
    InvalidAlphaRange(f32, f32),
    /// An explicit lambda cap cannot be negative
    #[error("lambda max must be non-negative, got {0}")]
    InvalidLambdaMax(f32),
    /// Raised by engines when fewer devices are present than requested
    #[error("requested {requested} devices but only {available} are available")]
    DeviceUnavailable { requested: u32, available: u32 },
    /// Raised by engines that exhaust their iteration budget
    #[error("solver did not converge within {0} iterations")]
    ConvergenceFailure(u32),
    #[error(transparent)]
    BaseCrate(#[from] linfa::Error),
}
