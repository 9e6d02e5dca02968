//! Fitting and prediction for the estimators of this crate.
//!
//! Fitting is delegated: the checked [`SolverConfig`] implements
//! [`FitWith`] with an engine reference as the incoming object, so the same
//! code path serves every estimator variant and any [`GlmSolver`]
//! implementation. The blanket impls of the base crate extend this to the
//! unchecked parameter sets, verifying them on the way.
use linfa::dataset::AsSingleTargets;
use linfa::traits::{FitWith, PredictInplace};
use linfa::{DatasetBase, Float};
use ndarray::{Array1, ArrayBase, Data, Ix2};

use crate::error::Result;
use crate::solver::{GlmSolver, SolverConfig, SolverOutput};
use crate::GlmModel;

impl<'a, F, D, T> FitWith<'a, ArrayBase<D, Ix2>, T, crate::error::GlmNetError>
    for SolverConfig<F>
where
    F: Float,
    D: Data<Elem = F>,
    T: AsSingleTargets<Elem = F>,
{
    type ObjectIn = &'a dyn GlmSolver<F>;
    type ObjectOut = GlmModel<F>;

    /// Fit a generalized linear model by handing this configuration, the
    /// feature matrix `x` of shape `(n_samples, n_features)` and the target
    /// variable `y` of shape `(n_samples)` to the given engine.
    ///
    /// Returns the fitted [`GlmModel`] on success and the engine's error
    /// unchanged otherwise.
    fn fit_with(
        &self,
        engine: Self::ObjectIn,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
    ) -> Result<Self::ObjectOut> {
        let SolverOutput {
            coefficients,
            intercept,
            n_iterations,
        } = engine.solve(
            self.clone(),
            dataset.records().view(),
            dataset.as_single_targets(),
        )?;

        Ok(GlmModel {
            coefficients,
            intercept,
            n_iterations,
        })
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>> for GlmModel<F> {
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to the linear map
    /// learned from the training data distribution.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );

        assert_eq!(
            x.ncols(),
            self.coefficients.len(),
            "Number of data features must match the number of features the model was trained with."
        );

        *y = x.dot(&self.coefficients) + self.intercept;
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}

/// View the fitted parameters and make predictions with a fitted generalized
/// linear model
impl<F: Float> GlmModel<F> {
    /// Get the fitted coefficients, one per feature
    pub fn coefficients(&self) -> &Array1<F> {
        &self.coefficients
    }

    /// Get the fitted intercept; zero when the configuration disabled it
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Get the number of iterations the engine spent fitting
    pub fn n_iterations(&self) -> u32 {
        self.n_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlmNetError;
    use crate::hyperparams::{LassoParams, LinearRegressionParams};
    use approx::assert_abs_diff_eq;
    use linfa::prelude::Predict;
    use linfa::{Dataset, ParamGuard};
    use ndarray::{array, ArrayView1, ArrayView2, Ix1};
    use std::cell::RefCell;

    /// Engine double that records the configuration it was handed
    struct RecordingSolver {
        seen: RefCell<Option<SolverConfig<f64>>>,
        output: SolverOutput<f64>,
    }

    impl RecordingSolver {
        fn returning(output: SolverOutput<f64>) -> Self {
            RecordingSolver {
                seen: RefCell::new(None),
                output,
            }
        }
    }

    impl GlmSolver<f64> for RecordingSolver {
        fn solve(
            &self,
            config: SolverConfig<f64>,
            _records: ArrayView2<f64>,
            _targets: ArrayView1<f64>,
        ) -> Result<SolverOutput<f64>> {
            *self.seen.borrow_mut() = Some(config);
            Ok(self.output.clone())
        }
    }

    /// Engine double that always refuses to run
    struct FailingSolver;

    impl GlmSolver<f64> for FailingSolver {
        fn solve(
            &self,
            _config: SolverConfig<f64>,
            _records: ArrayView2<f64>,
            _targets: ArrayView1<f64>,
        ) -> Result<SolverOutput<f64>> {
            Err(GlmNetError::DeviceUnavailable {
                requested: 4,
                available: 1,
            })
        }
    }

    // single target, so the target dimension is `Ix1` rather than the default
    fn toy_dataset() -> Dataset<f64, f64, Ix1> {
        Dataset::new(
            array![[1.0, 2.0], [2.0, 3.0], [3.0, 5.0]],
            array![1.0, 2.0, 3.0],
        )
    }

    fn toy_output() -> SolverOutput<f64> {
        SolverOutput {
            coefficients: array![0.5, -0.25],
            intercept: 1.5,
            n_iterations: 12,
        }
    }

    #[test]
    fn fit_hands_the_checked_record_to_the_engine() {
        let params = LinearRegressionParams::<f64>::new().n_folds(3).tolerance(1e-4);
        let expected = params.clone().check().unwrap();

        let engine = RecordingSolver::returning(toy_output());
        let model = params.fit_with(&engine, &toy_dataset()).unwrap();

        assert_eq!(engine.seen.borrow().as_ref(), Some(&expected));
        assert_eq!(model.coefficients(), &array![0.5, -0.25]);
        assert_abs_diff_eq!(model.intercept(), 1.5);
        assert_eq!(model.n_iterations(), 12);
    }

    #[test]
    fn invalid_params_fail_before_the_engine_runs() {
        let engine = RecordingSolver::returning(toy_output());
        let result = LinearRegressionParams::<f64>::new()
            .tolerance(-3.0)
            .fit_with(&engine, &toy_dataset());

        assert!(matches!(
            result.unwrap_err(),
            GlmNetError::InvalidTolerance(_)
        ));
        assert!(engine.seen.borrow().is_none());
    }

    #[test]
    fn engine_errors_surface_unchanged() {
        let result = LassoParams::<f64>::new().fit_with(&FailingSolver, &toy_dataset());
        assert!(matches!(
            result.unwrap_err(),
            GlmNetError::DeviceUnavailable {
                requested: 4,
                available: 1
            }
        ));
    }

    #[test]
    fn exhausted_iteration_budgets_surface_as_convergence_failures() {
        // engine double that never meets its tolerance within the budget
        struct StallingSolver;

        impl GlmSolver<f64> for StallingSolver {
            fn solve(
                &self,
                config: SolverConfig<f64>,
                _records: ArrayView2<f64>,
                _targets: ArrayView1<f64>,
            ) -> Result<SolverOutput<f64>> {
                Err(GlmNetError::ConvergenceFailure(config.max_iterations()))
            }
        }

        let result = LinearRegressionParams::<f64>::new()
            .max_iterations(7)
            .fit_with(&StallingSolver, &toy_dataset());
        assert!(matches!(
            result.unwrap_err(),
            GlmNetError::ConvergenceFailure(7)
        ));
    }

    #[test]
    fn prediction_is_a_linear_map() {
        let model = GlmModel {
            coefficients: array![1.0, 2.0],
            intercept: 0.5,
            n_iterations: 1,
        };

        let predictions = model.predict(&array![[1.0, 1.0], [2.0, 0.0], [0.0, 0.0]]);
        assert_abs_diff_eq!(predictions, array![3.5, 2.5, 0.5], epsilon = 1e-12);
    }

    #[test]
    fn default_target_matches_sample_count() {
        let model = GlmModel {
            coefficients: array![1.0, 2.0],
            intercept: 0.0,
            n_iterations: 1,
        };

        let target = model.default_target(&array![[1.0, 1.0], [2.0, 0.0]]);
        assert_eq!(target, array![0.0, 0.0]);
    }
}
