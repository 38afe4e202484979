//! Canonicalize command implementation.

use dataid_canonical::{standardize, Standardized, Value};

use super::read_json;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::from_json(read_json(input)?);

    match standardize(&value) {
        Standardized::Canonical(text) => println!("{}", text),
        // Scalars are not canonicalized; echo them back as JSON.
        Standardized::Scalar(scalar) => println!("{}", serde_json::to_string(&scalar)?),
    }
    Ok(())
}
