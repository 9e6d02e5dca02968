//! Estimator parameter sets for the elastic-net solver family.
//!
//! Each parameter set exposes builder methods for the knobs its model variant
//! leaves to the caller and bakes everything else into the record at
//! construction time, so the finished [`SolverConfig`](crate::SolverConfig)
//! always lies on the variant's point of the family no matter what the caller
//! does. Construction is infallible; ranges are checked when the set is
//! verified, at the latest when a fit operation is invoked.
use linfa::{Float, ParamGuard};

use crate::error::{GlmNetError, Result};
use crate::solver::{DataOrder, DeviceCount, Family, SolverConfig};

/// Macro that implements the data handling and engine builder methods every
/// variant of the family exposes, to avoid some code duplication.
macro_rules! impl_shared_knobs {
    ($params:ident) => {
        impl<F: Float> $params<F> {
            /// Hint how many threads the engine should use.
            ///
            /// Unset by default, which leaves the choice to the engine.
            pub fn n_threads(mut self, n_threads: usize) -> Self {
                self.0.n_threads = Some(n_threads);
                self
            }

            /// Set how many accelerator devices the engine may use.
            ///
            /// Defaults to [`DeviceCount::All`]; `DeviceCount::Count(0)` keeps
            /// the engine on the CPU.
            pub fn device_count(mut self, device_count: DeviceCount) -> Self {
                self.0.device_count = device_count;
                self
            }

            /// Configure the model to fit an intercept.
            ///
            /// Defaults to `true` if not set.
            pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
                self.0.fit_intercept = fit_intercept;
                self
            }

            /// Set the number of cross validation folds.
            ///
            /// Defaults to `1` if not set.
            pub fn n_folds(mut self, n_folds: usize) -> Self {
                self.0.n_folds = n_folds;
                self
            }

            /// Set the convergence tolerance of the engine.
            ///
            /// Defaults to `1e-2` if not set.
            pub fn tolerance(mut self, tolerance: F) -> Self {
                self.0.tolerance = tolerance;
                self
            }

            /// Stop early when the residuals show no more relative improvement.
            ///
            /// Defaults to `true` if not set.
            pub fn early_stop(mut self, early_stop: bool) -> Self {
                self.0.early_stop = early_stop;
                self
            }

            /// Set the relative improvement below which the engine stops early.
            ///
            /// Defaults to `1.0` if not set; must lie in `(0, 1]`.
            pub fn early_stop_error_fraction(mut self, fraction: F) -> Self {
                self.0.early_stop_error_fraction = fraction;
                self
            }

            /// Set the maximum number of iterations.
            ///
            /// Defaults to `5000` if not set.
            pub fn max_iterations(mut self, max_iterations: u32) -> Self {
                self.0.max_iterations = max_iterations;
                self
            }

            /// Set how much the engine prints to the console; zero keeps it quiet.
            ///
            /// Defaults to `0` if not set.
            pub fn verbosity(mut self, verbosity: u32) -> Self {
                self.0.verbosity = verbosity;
                self
            }
        }
    };
}

/// Macro that implements the lambda path builder methods shared by the
/// regularized variants.
macro_rules! impl_lambda_path_knobs {
    ($params:ident) => {
        impl<F: Float> $params<F> {
            /// Set the smallest path lambda as a fraction of the largest.
            ///
            /// Defaults to `1e-7` if not set; must lie in `[0, 1)`.
            pub fn lambda_min_ratio(mut self, lambda_min_ratio: F) -> Self {
                self.0.lambda_min_ratio = lambda_min_ratio;
                self
            }

            /// Set how many lambdas the regularization path visits.
            ///
            /// Defaults to `100` if not set.
            pub fn n_lambdas(mut self, n_lambdas: u32) -> Self {
                self.0.n_lambdas = n_lambdas;
                self
            }

            /// Leave the lambda path early when validation scores stop improving.
            ///
            /// Defaults to `true` if not set.
            pub fn lambda_stop_early(mut self, lambda_stop_early: bool) -> Self {
                self.0.lambda_stop_early = lambda_stop_early;
                self
            }

            /// Cap the lambda path explicitly instead of deriving the cap from data.
            ///
            /// Unset by default.
            pub fn lambda_max(mut self, lambda_max: F) -> Self {
                self.0.lambda_max = Some(lambda_max);
                self
            }
        }
    };
}

/// Macro that implements [`ParamGuard`] and [`Default`] for a parameter set
/// wrapping a [`SolverConfig`].
macro_rules! impl_param_guard {
    ($params:ident) => {
        impl<F: Float> ParamGuard for $params<F> {
            type Checked = SolverConfig<F>;
            type Error = GlmNetError;

            fn check_ref(&self) -> Result<&Self::Checked> {
                self.0.validate()?;
                Ok(&self.0)
            }

            fn check(self) -> Result<Self::Checked> {
                self.check_ref()?;
                Ok(self.0)
            }
        }

        impl<F: Float> Default for $params<F> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// An ordinary least squares parameter set.
///
/// The produced configuration always describes unregularized least squares:
/// the regularization region of the record is pinned to a single zero lambda
/// and a zero alpha blend and is not reachable from this surface.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [n_threads](Self::n_threads) | unset | Engine thread count hint | `[1, inf)` |
/// | [device_count](Self::device_count) | `All` | Accelerator devices to use | `All` or `Count(n)` |
/// | [fit_intercept](Self::fit_intercept) | `true` | Fit a constant term | `false`, `true` |
/// | [n_folds](Self::n_folds) | `1` | Cross validation folds | `[1, inf)` |
/// | [tolerance](Self::tolerance) | `1e-2` | Convergence tolerance | `(0, inf)` |
/// | [early_stop](Self::early_stop) | `true` | Stop on stalled residuals | `false`, `true` |
/// | [early_stop_error_fraction](Self::early_stop_error_fraction) | `1.0` | Relative improvement threshold | `(0, 1]` |
/// | [max_iterations](Self::max_iterations) | `5000` | Iteration cap | `[1, inf)` |
/// | [verbosity](Self::verbosity) | `0` | Engine console chatter | `[0, inf)` |
///
/// The fixed remainder of the record: `family = ElasticNet`,
/// `lambda_min_ratio = 0`, `n_lambdas = 1`, `n_alphas = 1`,
/// `lambda_stop_early = false`, `lambda_max = Some(0)`,
/// `alpha_max = alpha_min = 0`, `order` unset.
///
/// # Example
///
/// ```rust
/// use linfa::ParamGuard;
/// use linfa_glmnet::{Family, GlmModel, GlmNetError};
///
/// let config = GlmModel::<f64>::ols()
///     .n_folds(5)
///     .tolerance(1e-3)
///     .check()?;
///
/// assert_eq!(config.family(), Family::ElasticNet);
/// assert_eq!(config.n_lambdas(), 1);
/// assert_eq!(config.lambda_max(), Some(0.0));
/// # Ok::<(), GlmNetError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionParams<F>(SolverConfig<F>);

/// Configure an ordinary least squares model
impl<F: Float> LinearRegressionParams<F> {
    /// Create a parameter set with every knob at its documented default.
    pub fn new() -> LinearRegressionParams<F> {
        Self(SolverConfig {
            n_threads: None,
            device_count: DeviceCount::All,
            fit_intercept: true,
            n_folds: 1,
            tolerance: F::cast(1e-2),
            early_stop: true,
            early_stop_error_fraction: F::one(),
            max_iterations: 5000,
            verbosity: 0,
            family: Family::ElasticNet,
            lambda_min_ratio: F::zero(),
            n_lambdas: 1,
            n_alphas: 1,
            lambda_stop_early: false,
            lambda_max: Some(F::zero()),
            alpha_max: F::zero(),
            alpha_min: F::zero(),
            order: None,
        })
    }
}

impl_shared_knobs!(LinearRegressionParams);
impl_param_guard!(LinearRegressionParams);

/// A ridge regression parameter set.
///
/// Pins the alpha blend to the pure L2 point (`alpha_min = alpha_max = 0`,
/// a single alpha) and opens up the lambda path on top of the shared knobs of
/// [`LinearRegressionParams`]:
///
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [lambda_min_ratio](Self::lambda_min_ratio) | `1e-7` | Smallest path lambda as a fraction of the largest | `[0, 1)` |
/// | [n_lambdas](Self::n_lambdas) | `100` | Lambda path length | `[1, inf)` |
/// | [lambda_stop_early](Self::lambda_stop_early) | `true` | Leave the path when scores stop improving | `false`, `true` |
/// | [lambda_max](Self::lambda_max) | unset | Largest path lambda; unset lets the engine derive it | `[0, inf)` |
#[derive(Clone, Debug, PartialEq)]
pub struct RidgeParams<F>(SolverConfig<F>);

/// Configure a ridge regression model
impl<F: Float> RidgeParams<F> {
    /// Create a parameter set with every knob at its documented default.
    pub fn new() -> RidgeParams<F> {
        Self(SolverConfig {
            n_threads: None,
            device_count: DeviceCount::All,
            fit_intercept: true,
            n_folds: 1,
            tolerance: F::cast(1e-2),
            early_stop: true,
            early_stop_error_fraction: F::one(),
            max_iterations: 5000,
            verbosity: 0,
            family: Family::ElasticNet,
            lambda_min_ratio: F::cast(1e-7),
            n_lambdas: 100,
            n_alphas: 1,
            lambda_stop_early: true,
            lambda_max: None,
            alpha_max: F::zero(),
            alpha_min: F::zero(),
            order: None,
        })
    }
}

impl_shared_knobs!(RidgeParams);
impl_lambda_path_knobs!(RidgeParams);
impl_param_guard!(RidgeParams);

/// A lasso parameter set.
///
/// Identical surface to [`RidgeParams`], but pins the alpha blend to the pure
/// L1 point (`alpha_min = alpha_max = 1`, a single alpha).
#[derive(Clone, Debug, PartialEq)]
pub struct LassoParams<F>(SolverConfig<F>);

/// Configure a lasso model
impl<F: Float> LassoParams<F> {
    /// Create a parameter set with every knob at its documented default.
    pub fn new() -> LassoParams<F> {
        Self(SolverConfig {
            n_threads: None,
            device_count: DeviceCount::All,
            fit_intercept: true,
            n_folds: 1,
            tolerance: F::cast(1e-2),
            early_stop: true,
            early_stop_error_fraction: F::one(),
            max_iterations: 5000,
            verbosity: 0,
            family: Family::ElasticNet,
            lambda_min_ratio: F::cast(1e-7),
            n_lambdas: 100,
            n_alphas: 1,
            lambda_stop_early: true,
            lambda_max: None,
            alpha_max: F::one(),
            alpha_min: F::one(),
            order: None,
        })
    }
}

impl_shared_knobs!(LassoParams);
impl_lambda_path_knobs!(LassoParams);
impl_param_guard!(LassoParams);

/// An elastic net parameter set.
///
/// The widest surface of the family: on top of the ridge/lasso knobs it opens
/// the alpha grid, so the engine can search blends between the L1 and L2
/// points, and the data order hint. Only the model family itself stays fixed.
///
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [n_alphas](Self::n_alphas) | `5` | Alpha grid size | `[1, inf)` |
/// | [alpha_max](Self::alpha_max) | `1.0` | Upper L1 blend bound | `[alpha_min, 1]` |
/// | [alpha_min](Self::alpha_min) | `0.0` | Lower L1 blend bound | `[0, alpha_max]` |
/// | [order](Self::order) | unset | Feature matrix layout hint | row/column major |
#[derive(Clone, Debug, PartialEq)]
pub struct ElasticNetParams<F>(SolverConfig<F>);

/// Configure an elastic net model
impl<F: Float> ElasticNetParams<F> {
    /// Create a parameter set with every knob at its documented default.
    pub fn new() -> ElasticNetParams<F> {
        Self(SolverConfig {
            n_threads: None,
            device_count: DeviceCount::All,
            fit_intercept: true,
            n_folds: 1,
            tolerance: F::cast(1e-2),
            early_stop: true,
            early_stop_error_fraction: F::one(),
            max_iterations: 5000,
            verbosity: 0,
            family: Family::ElasticNet,
            lambda_min_ratio: F::cast(1e-7),
            n_lambdas: 100,
            n_alphas: 5,
            lambda_stop_early: true,
            lambda_max: None,
            alpha_max: F::one(),
            alpha_min: F::zero(),
            order: None,
        })
    }

    /// Set how many alpha blends the engine searches between the bounds.
    ///
    /// Defaults to `5` if not set.
    pub fn n_alphas(mut self, n_alphas: u32) -> Self {
        self.0.n_alphas = n_alphas;
        self
    }

    /// Set the upper bound of the L1 blend grid.
    ///
    /// Defaults to `1.0` if not set; setting both bounds to the same value
    /// pins the blend.
    pub fn alpha_max(mut self, alpha_max: F) -> Self {
        self.0.alpha_max = alpha_max;
        self
    }

    /// Set the lower bound of the L1 blend grid.
    ///
    /// Defaults to `0.0` if not set.
    pub fn alpha_min(mut self, alpha_min: F) -> Self {
        self.0.alpha_min = alpha_min;
        self
    }

    /// Tell the engine how the feature matrix is laid out in memory.
    ///
    /// Unset by default, which lets the engine probe the data itself.
    pub fn order(mut self, order: DataOrder) -> Self {
        self.0.order = Some(order);
        self
    }
}

impl_shared_knobs!(ElasticNetParams);
impl_lambda_path_knobs!(ElasticNetParams);
impl_param_guard!(ElasticNetParams);
