use linfa::ParamGuard;
use linfa_glmnet::{DataOrder, DeviceCount, GlmModel, Result};

fn main() -> Result<()> {
    // every estimator variant normalizes into the same record shape
    let ols = GlmModel::<f64>::ols().n_folds(5).tolerance(1e-3).check()?;
    println!("ordinary least squares:\n{:#?}\n", ols);

    let ridge = GlmModel::<f64>::ridge().n_lambdas(20).check()?;
    println!("ridge:\n{:#?}\n", ridge);

    let lasso = GlmModel::<f64>::lasso().lambda_max(0.5).check()?;
    println!("lasso:\n{:#?}\n", lasso);

    let elastic_net = GlmModel::<f64>::elastic_net()
        .n_alphas(8)
        .alpha_min(0.2)
        .alpha_max(0.8)
        .order(DataOrder::RowMajor)
        .device_count(DeviceCount::Count(2))
        .check()?;
    println!("elastic net:\n{:#?}\n", elastic_net);

    // out of range settings only surface once the set is checked
    if let Err(err) = GlmModel::<f64>::elastic_net().alpha_min(1.5).check() {
        println!("rejected: {}", err);
    }

    Ok(())
}
