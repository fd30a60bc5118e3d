//! Scatter of the held out samples with the fitted regression line

use std::cmp::Ordering;
use std::path::Path;

use log::debug;
use ndarray::ArrayView1;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

pub const CAPTION: &str = "Simple Linear Regression Model";
pub const X_DESC: &str = "X_test";
pub const Y_DESC: &str = "Predicted y_test";
pub const POINTS_LABEL: &str = "Test Data Points";
pub const LINE_LABEL: &str = "Regression Line";

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("nothing to plot")]
    Empty,
    #[error("{x} x values, {y} y values and {pred} predictions do not line up")]
    MismatchedShapes { x: usize, y: usize, pred: usize },
    #[error("drawing failed: {0}")]
    Drawing(#[from] DrawingAreaErrorKind<std::io::Error>),
}

/// Render the test samples as points and the predictions as a line into an SVG file.
///
/// # Arguments
/// * `x` - Values of the single feature for the test samples.
/// * `y` - Actual targets of the test samples.
/// * `y_pred` - Predicted targets of the test samples.
/// * `path` - Filename where the plot will be saved.
pub fn render<P: AsRef<Path>>(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    y_pred: ArrayView1<f64>,
    path: P,
) -> Result<()> {
    if x.len() != y.len() || x.len() != y_pred.len() {
        return Err(ChartError::MismatchedShapes {
            x: x.len(),
            y: y.len(),
            pred: y_pred.len(),
        });
    }
    if x.is_empty() {
        return Err(ChartError::Empty);
    }

    let (x_min, x_max) = padded_range(x.iter());
    let (y_min, y_max) = padded_range(y.iter().chain(y_pred.iter()));

    let root = SVGBackend::new(path.as_ref(), (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CAPTION, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // axes with descriptions, but neither grid nor tick labels
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(0)
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .draw()?;

    chart
        .draw_series(
            x.iter()
                .zip(y.iter())
                .map(|(x, y)| Circle::new((*x, *y), 3, SKY_BLUE.filled())),
        )?
        .label(POINTS_LABEL)
        .legend(|(x, y)| Circle::new((x, y), 3, SKY_BLUE.filled()));

    let mut line: Vec<(f64, f64)> = x.iter().copied().zip(y_pred.iter().copied()).collect();
    line.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    chart
        .draw_series(LineSeries::new(line, RED.stroke_width(1)))?
        .label(LINE_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(1)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    debug!("chart written to {}", path.as_ref().display());

    Ok(())
}

// min and max with 5% headroom, a degenerate range is widened to unit size
fn padded_range<'a, I: Iterator<Item = &'a f64>>(values: I) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), x| {
        (min.min(*x), max.max(*x))
    });

    if max > min {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else {
        (min - 0.5, max + 0.5)
    }
}
