use std::fmt;

use ndarray::Array1;

/// Outcome of a run, printed in the layout of the classic tutorial
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub coefficients: Array1<f64>,
    pub intercept: f64,
    pub mean_squared_error: f64,
    pub r2: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coefficients: ")?;
        writeln!(f, " {}", format_coefficients(&self.coefficients))?;
        writeln!(f, "Mean squared error: {:.2}", self.mean_squared_error)?;
        writeln!(f, "Coefficient of determination: {:.2}", self.r2)
    }
}

/// Bracketed, space separated, eight decimals with trailing zeros dropped
///
/// For a single coefficient this is the text numpy prints. Several coefficients are joined by
/// one space without numpy's common-width padding, and values are always written in
/// positional notation, never in scientific notation.
pub fn format_coefficients(coefficients: &Array1<f64>) -> String {
    let values = coefficients
        .iter()
        .map(|x| {
            let s = format!("{:.8}", x);
            s.trim_end_matches('0').to_string()
        })
        .collect::<Vec<_>>();

    format!("[{}]", values.join(" "))
}
