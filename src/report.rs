//! Drives the engine the way the command line presents it: echo the input, sort it, then select every
//! rank in turn.

use std::io::Write;

use rand::Rng;

use crate::element::{DataType, Element};
use crate::error::Result;
use crate::sort::{randomized_quickselect_with_rng, randomized_quicksort_with_rng};

fn join<T: Element>(values: &[T]) -> String {
    values
        .iter()
        .map(Element::render)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses `text` as elements of type `T` and writes the report to `out`.
///
/// Returns the sorted elements.
pub fn process<T, R, W>(text: &str, rng: &mut R, out: &mut W) -> Result<Vec<T>>
where
    T: Element,
    R: Rng + ?Sized,
    W: Write,
{
    let mut values = T::parse(text)?;
    log::info!("read {} {} elements", values.len(), T::DATA_TYPE);
    writeln!(out, "Original Array: {}", join(&values))?;

    randomized_quicksort_with_rng(&mut values, rng, T::compare);
    writeln!(out, "Sorted Array: {}", join(&values))?;

    writeln!(out)?;
    let mut scratch = values.clone();
    for k in 0..scratch.len() {
        let kth = randomized_quickselect_with_rng(&mut scratch, k, rng, T::compare)?;
        writeln!(out, "Selected element at index {}: {}", k, kth.render())?;
    }
    Ok(values)
}

/// Runs [`process`] for the element type named by `data_type`.
pub fn run<R, W>(data_type: DataType, text: &str, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    match data_type {
        DataType::Int => process::<i64, _, _>(text, rng, out).map(drop),
        DataType::Double => process::<f64, _, _>(text, rng, out).map(drop),
        DataType::Char => process::<char, _, _>(text, rng, out).map(drop),
        DataType::String => process::<String, _, _>(text, rng, out).map(drop),
    }
}
