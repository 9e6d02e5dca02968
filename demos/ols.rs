use linfa::prelude::*;
use linfa_glmnet::{
    DeviceCount, GlmModel, GlmNetError, GlmSolver, Result, SolverConfig, SolverOutput,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Plain single threaded coordinate descent over the least squares objective.
///
/// Stands in for the multi-threaded and accelerator backed engines a
/// [`SolverConfig`] is usually handed to; it honors the intercept, tolerance,
/// iteration cap and early stopping knobs of the record and ignores the rest.
struct CoordinateDescent;

impl GlmSolver<f64> for CoordinateDescent {
    fn solve(
        &self,
        config: SolverConfig<f64>,
        records: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> Result<SolverOutput<f64>> {
        let (x, y, x_mean, y_mean) = center(config.fit_intercept(), records, targets);

        let n_features = x.ncols();
        let norm_cols_x = x.map_axis(Axis(0), |col| col.dot(&col));

        let mut w = Array1::<f64>::zeros(n_features);
        let mut r = y;
        let mut n_iterations = 0;
        let mut converged = false;

        while n_iterations < config.max_iterations() {
            let mut w_max: f64 = 0.0;
            let mut d_w_max: f64 = 0.0;

            for ii in 0..n_features {
                if norm_cols_x[ii] == 0.0 {
                    continue;
                }
                let w_ii = w[ii];
                if w_ii != 0.0 {
                    r.scaled_add(w_ii, &x.column(ii));
                }
                w[ii] = x.column(ii).dot(&r) / norm_cols_x[ii];
                if w[ii] != 0.0 {
                    r.scaled_add(-w[ii], &x.column(ii));
                }
                d_w_max = d_w_max.max((w[ii] - w_ii).abs());
                w_max = w_max.max(w[ii].abs());
            }

            n_iterations += 1;
            if w_max == 0.0 || d_w_max / w_max < config.tolerance() {
                converged = true;
                if config.early_stop() {
                    break;
                }
            }
        }

        if !converged {
            return Err(GlmNetError::ConvergenceFailure(config.max_iterations()));
        }

        let intercept = if config.fit_intercept() {
            y_mean - x_mean.dot(&w)
        } else {
            0.0
        };

        Ok(SolverOutput {
            coefficients: w,
            intercept,
            n_iterations,
        })
    }
}

/// Center records and targets so the intercept can be recovered afterwards
fn center(
    fit_intercept: bool,
    records: ArrayView2<f64>,
    targets: ArrayView1<f64>,
) -> (Array2<f64>, Array1<f64>, Array1<f64>, f64) {
    let mut x = records.to_owned();
    let mut y = targets.to_owned();

    if !fit_intercept {
        return (x, y, Array1::zeros(records.ncols()), 0.0);
    }

    let x_mean = x
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(records.ncols()));
    let y_mean = y.mean().unwrap_or_default();
    x -= &x_mean;
    y -= y_mean;

    (x, y, x_mean, y_mean)
}

fn main() -> Result<()> {
    // load Diabetes dataset
    let (train, valid) = linfa_datasets::diabetes().split_with_ratio(0.90);

    // unregularized least squares, kept off the accelerators
    let model = GlmModel::<f64>::ols()
        .device_count(DeviceCount::Count(0))
        .tolerance(1e-4)
        .max_iterations(10_000)
        .fit_with(&CoordinateDescent, &train)?;

    println!("intercept:  {}", model.intercept());
    println!("params: {}", model.coefficients());
    println!("iterations: {}", model.n_iterations());

    // validate
    let y_est = model.predict(valid.records());
    println!("predicted variance: {}", y_est.r2(&valid)?);

    Ok(())
}
