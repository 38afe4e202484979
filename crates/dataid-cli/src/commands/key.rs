//! Key command implementation.

use dataid_canonical::convert_text_to_key;

pub fn run(text: String) -> Result<(), Box<dyn std::error::Error>> {
    match convert_text_to_key(&text) {
        Some(key) => {
            println!("{}", key);
            Ok(())
        }
        None => Err("text is empty".into()),
    }
}
