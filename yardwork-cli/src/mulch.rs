use anyhow::Result;
use inquire::{CustomType, Text};

use yardwork_core::mulch::{MulchRecord, ShapeData, ShapeKind, parse_dimension};
use yardwork_core::store::{DATA_PATH, MulchStore};

use crate::report;

/// Interactive mulch calculator flow.
///
/// The store is opened before the first prompt: a missing `data.json`
/// aborts the run without asking anything.
pub fn run() -> Result<()> {
    let mut store = MulchStore::open(DATA_PATH)?;

    println!("Mulch Calculator");
    println!();

    let kind = CustomType::<ShapeKind>::new("Circular or Rectangular figure (Enter R or C)")
        .with_error_message("Invalid Entry.")
        .prompt()?;

    println!();
    println!("Note: All data entered should be in inches.");

    let vol_data = match kind {
        ShapeKind::Circle => collect_circle()?,
        ShapeKind::Rectangle => collect_rectangle()?,
    };

    let record = MulchRecord::new(vol_data);

    println!();
    println!("{}", report::mulch_report(&record));

    store.commit(record)?;

    Ok(())
}

fn collect_circle() -> Result<ShapeData> {
    let radius = dimension("Enter the radius of the figure")?;
    let depth = dimension("Enter the depth of the figure")?;

    Ok(ShapeData::circle(radius, depth))
}

fn collect_rectangle() -> Result<ShapeData> {
    let length = dimension("Enter the length of the figure")?;
    let width = dimension("Enter the width of the figure")?;
    let depth = dimension("Enter the depth of the figure")?;

    Ok(ShapeData::rectangle(length, width, depth))
}

/// Free-text prompt for one dimension. Malformed numbers are not re-asked;
/// they come back as NaN.
fn dimension(message: &str) -> Result<f64> {
    let raw = Text::new(message).prompt()?;
    Ok(parse_dimension(&raw))
}
