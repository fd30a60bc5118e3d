use std::env;
use std::error::Error;

use linreg::prelude::*;
use linreg_ols::LinearRegression;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    // load Diabetes dataset, from LINREG_DATA_DIR if given
    let dataset = match env::var("LINREG_DATA_DIR") {
        Ok(dir) => linreg_datasets::diabetes(dir)?,
        Err(_) => linreg_datasets::diabetes_bundled()?,
    };

    // keep the body mass index only
    let dataset = dataset.select_feature(2)?;
    let (train, test) = dataset.split_tail(20)?;

    let model = LinearRegression::new().fit(&train)?;
    let pred = model.predict(&test);

    println!("intercept:  {}", model.intercept());
    println!("parameters: {}", model.params());
    println!("mse:        {:.2}", pred.mean_squared_error(&test)?);
    println!("r2:         {:.2}", pred.r2(&test)?);

    Ok(())
}
