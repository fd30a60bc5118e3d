use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use linreg::Dataset;
use log::{debug, info};
use ndarray::{Array2, Axis};
use ndarray_csv::{Array2Reader, ReadError};

use crate::error::{DatasetError, Result};

/// Names of the ten baseline variables of the diabetes dataset, in column order
pub const DIABETES_FEATURE_NAMES: [&str; 10] = [
    "age",
    "sex",
    "body mass index",
    "blood pressure",
    "t-cells",
    "low-density lipoproteins",
    "high-density lipoproteins",
    "thyroid stimulating hormone",
    "lamotrigine",
    "blood sugar level",
];

/// Convert Gzipped CSV bytes into 2D array
pub fn array_from_gz_csv<R: Read>(
    gz: R,
    has_headers: bool,
    separator: u8,
) -> std::result::Result<Array2<f64>, ReadError> {
    // unzip file
    let file = GzDecoder::new(gz);
    array_from_csv(file, has_headers, separator)
}

/// Convert CSV bytes into 2D array
pub fn array_from_csv<R: Read>(
    csv: R,
    has_headers: bool,
    separator: u8,
) -> std::result::Result<Array2<f64>, ReadError> {
    // parse CSV
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .trim(Trim::All)
        .from_reader(csv);

    // extract ndarray
    reader.deserialize_array2_dynamic()
}

/// On-disk layouts of the diabetes files, neither of them has a header row
#[derive(Debug, Clone, Copy, PartialEq)]
enum Layout {
    /// `diabetes_data.*`, comma separated, features already scaled
    Scaled,
    /// `diabetes_data_raw.*`, space separated, features in clinical units
    Raw,
}

impl Layout {
    fn separator(self) -> u8 {
        match self {
            Layout::Scaled => b',',
            Layout::Raw => b' ',
        }
    }
}

/// Read in the diabetes dataset from a directory
///
/// The directory holds a feature file and a target file, either gzipped (`.csv.gz`) or plain
/// (`.csv`):
///
/// * `diabetes_data` + `diabetes_target`: comma separated, the features are mean centered and
///   scaled
/// * `diabetes_data_raw` + `diabetes_target`: space separated, the features are in their
///   original units and get scaled on load, see [`scale_columns`]
///
/// Neither layout has a header row, the first line holds the first patient.
///
/// The scaled layout is preferred when both are present. Feature names are attached when the
/// file has the expected ten columns.
pub fn diabetes<P: AsRef<Path>>(dir: P) -> Result<Dataset<f64, f64>> {
    let dir = dir.as_ref();

    let (layout, data_path) = if let Some(path) = find_file(dir, "diabetes_data") {
        (Layout::Scaled, path)
    } else if let Some(path) = find_file(dir, "diabetes_data_raw") {
        (Layout::Raw, path)
    } else {
        return Err(DatasetError::MissingFile(dir.join("diabetes_data.csv.gz")));
    };
    let target_path = find_file(dir, "diabetes_target")
        .ok_or_else(|| DatasetError::MissingFile(dir.join("diabetes_target.csv.gz")))?;
    debug!(
        "reading diabetes {:?} layout from {} and {}",
        layout,
        data_path.display(),
        target_path.display()
    );

    let mut records = read_array(&data_path, layout)?;
    if layout == Layout::Raw {
        scale_columns(&mut records);
    }
    let targets = read_array(&target_path, layout)?;

    assemble_diabetes(records, targets, target_path)
}

#[cfg(feature = "diabetes")]
/// Read in the diabetes dataset shipped with this crate
///
/// These are the scaled features of `data/diabetes_data.csv.gz`, embedded at compile time.
pub fn diabetes_bundled() -> Result<Dataset<f64, f64>> {
    let data = include_bytes!("../data/diabetes_data.csv.gz");
    let records = array_from_gz_csv(&data[..], false, b',')?;

    let targets = include_bytes!("../data/diabetes_target.csv.gz");
    let targets = array_from_gz_csv(&targets[..], false, b',')?;

    assemble_diabetes(records, targets, PathBuf::from("diabetes_target.csv.gz"))
}

fn assemble_diabetes(
    records: Array2<f64>,
    targets: Array2<f64>,
    target_path: PathBuf,
) -> Result<Dataset<f64, f64>> {
    if targets.ncols() == 0 {
        return Err(DatasetError::EmptyTargets(target_path));
    }
    let targets = targets.column(0).to_owned();

    let mut dataset = Dataset::try_new(records, targets)?;
    if dataset.records().ncols() == DIABETES_FEATURE_NAMES.len() {
        dataset = dataset.with_feature_names(DIABETES_FEATURE_NAMES.to_vec());
    }
    info!(
        "loaded diabetes dataset with {} samples and {} features",
        dataset.records().nrows(),
        dataset.records().ncols()
    );

    Ok(dataset)
}

/// Center every column and scale it to unit norm
///
/// Each column is shifted by its mean, divided by its population standard deviation and then
/// by `sqrt(nsamples)`, so the sum of squares of every column is one. Constant columns are
/// only centered.
pub fn scale_columns(records: &mut Array2<f64>) {
    let nsamples = records.nrows() as f64;
    if records.nrows() == 0 {
        return;
    }

    for mut column in records.axis_iter_mut(Axis(1)) {
        let mean = column.sum() / nsamples;
        column.mapv_inplace(|x| x - mean);

        let std = (column.mapv(|x| x * x).sum() / nsamples).sqrt();
        let std = if std == 0.0 { 1.0 } else { std };
        column.mapv_inplace(|x| x / std / nsamples.sqrt());
    }
}

fn find_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    ["csv.gz", "csv"]
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file())
}

fn read_array(path: &Path, layout: Layout) -> Result<Array2<f64>> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_gz = path.extension().map_or(false, |ext| ext == "gz");
    let array = if is_gz {
        array_from_gz_csv(file, false, layout.separator())?
    } else {
        array_from_csv(file, false, layout.separator())?
    };

    Ok(array)
}
