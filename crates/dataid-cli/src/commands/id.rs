//! Id command implementation.

use dataid_canonical::Value;
use dataid_core::{derive_id, IdMethod};

use super::{read_input, read_json};

pub fn run(input: Option<String>, method: String, raw: bool) -> Result<(), Box<dyn std::error::Error>> {
    let method: IdMethod = method.parse()?;

    let value = if raw {
        Value::Bytes(read_input(input)?)
    } else {
        Value::from_json(read_json(input)?)
    };

    match derive_id(&value, method) {
        Some(id) => {
            println!("{}", id);
            Ok(())
        }
        None => {
            eprintln!("No identifier: input has no byte form");
            std::process::exit(1);
        }
    }
}
