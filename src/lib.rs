#![doc = include_str!("../README.md")]

mod algorithm;
mod error;
mod hyperparams;
mod solver;

pub use error::{GlmNetError, Result};
pub use hyperparams::{ElasticNetParams, LassoParams, LinearRegressionParams, RidgeParams};
pub use solver::{DataOrder, DeviceCount, Family, GlmSolver, SolverConfig, SolverOutput};

use linfa::Float;
use ndarray::Array1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Generalized linear model
///
/// This struct holds the parameters of a model fitted by a [`GlmSolver`]
/// engine: the coefficient for each feature, the intercept and the number of
/// iterations the engine spent. It predicts through the usual traits and is
/// the entry point for building the parameter sets of the family, one per
/// model variant.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct GlmModel<F> {
    pub(crate) coefficients: Array1<F>,
    pub(crate) intercept: F,
    pub(crate) n_iterations: u32,
}

impl<F: Float> GlmModel<F> {
    /// Create a default parameter set for an ordinary least squares model
    ///
    /// The returned set only exposes data handling and engine knobs; the
    /// regularization region of the configuration is fixed to zero.
    pub fn ols() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// Create a default parameter set for a ridge regression model
    ///
    /// Adds the lambda path on top of the least squares knobs and pins the
    /// penalty blend to the pure L2 point.
    pub fn ridge() -> RidgeParams<F> {
        RidgeParams::new()
    }

    /// Create a default parameter set for a lasso model
    ///
    /// Adds the lambda path on top of the least squares knobs and pins the
    /// penalty blend to the pure L1 point.
    pub fn lasso() -> LassoParams<F> {
        LassoParams::new()
    }

    /// Create a default parameter set for an elastic net model
    ///
    /// The full surface of the family, including the alpha grid between the
    /// L1 and L2 points.
    pub fn elastic_net() -> ElasticNetParams<F> {
        ElasticNetParams::new()
    }
}
