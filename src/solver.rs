//! The solver-facing side of the crate: the full configuration record handed
//! to an engine, the vocabulary types it is built from, and the engine trait
//! itself.
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use linfa::Float;
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{GlmNetError, Result};

/// Model family of the underlying solver interface.
///
/// Every estimator in this crate pins the family to [`ElasticNet`](Family::ElasticNet);
/// the variant only ever varies across the wider solver interface this record
/// is written against.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Squared loss with a blended L1/L2 penalty
    ElasticNet,
    /// Logistic loss with a blended L1/L2 penalty
    Logistic,
}

/// Number of accelerator devices an engine may use.
///
/// `All` asks the engine to spread work over every device it can see, while
/// `Count(0)` disables accelerators entirely; an engine must not conflate the
/// two signals.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCount {
    /// Use every available device
    All,
    /// Use exactly this many devices; zero means CPU only
    Count(u32),
}

impl Default for DeviceCount {
    fn default() -> Self {
        DeviceCount::All
    }
}

/// Memory layout of the feature matrix as seen by the engine.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrder {
    RowMajor,
    ColumnMajor,
}

/// The complete parameter record of the elastic-net family solver interface.
///
/// A `SolverConfig` is produced by one of the estimator parameter sets
/// ([`LinearRegressionParams`](crate::LinearRegressionParams),
/// [`RidgeParams`](crate::RidgeParams), [`LassoParams`](crate::LassoParams),
/// [`ElasticNetParams`](crate::ElasticNetParams)), is immutable from then on,
/// and is passed by value to a [`GlmSolver`] when a fit operation is invoked.
/// Which of its fields were user-settable and which were baked to constants
/// depends on the estimator that built it; the record itself makes no such
/// distinction.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig<F> {
    pub(crate) n_threads: Option<usize>,
    pub(crate) device_count: DeviceCount,
    pub(crate) fit_intercept: bool,
    pub(crate) n_folds: usize,
    pub(crate) tolerance: F,
    pub(crate) early_stop: bool,
    pub(crate) early_stop_error_fraction: F,
    pub(crate) max_iterations: u32,
    pub(crate) verbosity: u32,
    pub(crate) family: Family,
    pub(crate) lambda_min_ratio: F,
    pub(crate) n_lambdas: u32,
    pub(crate) n_alphas: u32,
    pub(crate) lambda_stop_early: bool,
    pub(crate) lambda_max: Option<F>,
    pub(crate) alpha_max: F,
    pub(crate) alpha_min: F,
    pub(crate) order: Option<DataOrder>,
}

impl<F: Float> SolverConfig<F> {
    /// Thread count hint; `None` leaves the choice to the engine
    pub fn n_threads(&self) -> Option<usize> {
        self.n_threads
    }

    pub fn device_count(&self) -> DeviceCount {
        self.device_count
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn early_stop(&self) -> bool {
        self.early_stop
    }

    pub fn early_stop_error_fraction(&self) -> F {
        self.early_stop_error_fraction
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn verbosity(&self) -> u32 {
        self.verbosity
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn lambda_min_ratio(&self) -> F {
        self.lambda_min_ratio
    }

    pub fn n_lambdas(&self) -> u32 {
        self.n_lambdas
    }

    pub fn n_alphas(&self) -> u32 {
        self.n_alphas
    }

    pub fn lambda_stop_early(&self) -> bool {
        self.lambda_stop_early
    }

    /// Largest lambda on the regularization path; `None` asks the engine to
    /// derive it from the data
    pub fn lambda_max(&self) -> Option<F> {
        self.lambda_max
    }

    pub fn alpha_max(&self) -> F {
        self.alpha_max
    }

    pub fn alpha_min(&self) -> F {
        self.alpha_min
    }

    pub fn order(&self) -> Option<DataOrder> {
        self.order
    }

    /// Check every field of the record against its documented range.
    ///
    /// Runs at the fit boundary, immediately before an engine receives the
    /// record. Fields baked by the estimator constructors always pass.
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(0) = self.n_threads {
            Err(GlmNetError::InvalidThreadCount(0))
        } else if self.n_folds == 0 {
            Err(GlmNetError::InvalidFoldCount(self.n_folds))
        } else if self.tolerance <= F::zero() {
            Err(GlmNetError::InvalidTolerance(
                self.tolerance.to_f32().unwrap(),
            ))
        } else if self.early_stop_error_fraction <= F::zero()
            || self.early_stop_error_fraction > F::one()
        {
            Err(GlmNetError::InvalidErrorFraction(
                self.early_stop_error_fraction.to_f32().unwrap(),
            ))
        } else if self.max_iterations == 0 {
            Err(GlmNetError::InvalidMaxIterations(self.max_iterations))
        } else if self.lambda_min_ratio < F::zero() || self.lambda_min_ratio >= F::one() {
            Err(GlmNetError::InvalidLambdaMinRatio(
                self.lambda_min_ratio.to_f32().unwrap(),
            ))
        } else if self.n_lambdas == 0 {
            Err(GlmNetError::InvalidLambdaCount(self.n_lambdas))
        } else if self.n_alphas == 0 {
            Err(GlmNetError::InvalidAlphaCount(self.n_alphas))
        } else if self.alpha_min < F::zero()
            || self.alpha_max > F::one()
            || self.alpha_min > self.alpha_max
        {
            Err(GlmNetError::InvalidAlphaRange(
                self.alpha_min.to_f32().unwrap(),
                self.alpha_max.to_f32().unwrap(),
            ))
        } else if let Some(lambda_max) = self.lambda_max.filter(|l| *l < F::zero()) {
            Err(GlmNetError::InvalidLambdaMax(lambda_max.to_f32().unwrap()))
        } else {
            Ok(())
        }
    }
}

/// What a [`GlmSolver`] hands back after fitting.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutput<F> {
    /// Fitted coefficients, one per feature
    pub coefficients: Array1<F>,
    /// Fitted intercept, zero when the configuration disabled it
    pub intercept: F,
    /// Iterations the engine spent
    pub n_iterations: u32,
}

/// An elastic-net family solver engine.
///
/// The crate never runs a solver of its own; it prepares a [`SolverConfig`]
/// and hands it to an implementation of this trait when a fit operation is
/// invoked, together with the training records and targets. An engine is
/// expected to honor the tolerance, iteration and early stopping knobs of the
/// record, to fit an intercept exactly when `fit_intercept` is set, and to
/// report failures through [`GlmNetError`].
///
/// The trait is object safe; estimators take the engine as
/// `&dyn GlmSolver<F>` at the fit call.
pub trait GlmSolver<F: Float> {
    /// Run the engine on the given problem under a finished configuration.
    fn solve(
        &self,
        config: SolverConfig<F>,
        records: ArrayView2<F>,
        targets: ArrayView1<F>,
    ) -> Result<SolverOutput<F>>;
}
