//! Fit an ordinary least squares model on a single feature of the diabetes dataset, report
//! the coefficient, mean squared error and coefficient of determination on the held out
//! samples and chart the fit.
//!
//! The pipeline runs once, top to bottom:
//!
//! ```text
//! load -> select feature -> split off the tail -> fit -> predict -> metrics -> chart
//! ```

pub mod chart;
pub mod config;
mod report;

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use linreg::prelude::*;
use linreg_ols::LinearRegression;
use log::info;

pub use config::{Config, ConfigError};
pub use report::{format_coefficients, Report};

/// Run the whole pipeline for the given configuration
pub fn run(config: &Config) -> anyhow::Result<Report> {
    let dataset = match &config.data_dir {
        Some(dir) => linreg_datasets::diabetes(dir).with_context(|| {
            format!("failed to load the diabetes dataset from {}", dir.display())
        })?,
        None => linreg_datasets::diabetes_bundled()
            .context("failed to load the bundled diabetes dataset")?,
    };

    let dataset = dataset
        .select_feature(config.feature)
        .context("failed to select the regressor")?;
    info!("using feature {:?}", dataset.feature_names());

    let (train, test) = dataset
        .split_tail(config.test_size)
        .context("failed to split off the test samples")?;
    info!(
        "split into {} training and {} test samples",
        train.nsamples(),
        test.nsamples()
    );

    let model = LinearRegression::new()
        .fit(&train)
        .context("failed to fit the linear model")?;
    let pred = model.predict(&test);

    let report = Report {
        coefficients: model.params().clone(),
        intercept: model.intercept(),
        mean_squared_error: pred
            .mean_squared_error(&test)
            .context("failed to compute the mean squared error")?,
        r2: pred
            .r2(&test)
            .context("failed to compute the coefficient of determination")?,
    };
    info!(
        "fitted intercept {} and coefficients {}",
        report.intercept, report.coefficients
    );

    if let Some(path) = &config.model_json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &model)
            .with_context(|| format!("failed to write the model to {}", path.display()))?;
        info!("model written to {}", path.display());
    }

    chart::render(
        test.records().column(0),
        test.targets().view(),
        pred.view(),
        &config.plot_path,
    )
    .with_context(|| format!("failed to render {}", config.plot_path.display()))?;
    info!("chart written to {}", config.plot_path.display());

    Ok(report)
}
