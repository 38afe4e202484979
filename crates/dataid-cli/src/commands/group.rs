//! Group command implementation.

use dataid_canonical::EmptyValues;
use dataid_linkage::{build_graph, group, ObservationTable};
use tracing::info;

use super::read_json;
use crate::output;

pub fn run(
    input: Option<String>,
    json: bool,
    empty_values: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let empty = match empty_values {
        Some(source) => EmptyValues::load(&source)
            .map_err(|e| format!("Invalid empty-value list: {}", e))?,
        None => EmptyValues::default(),
    };

    let table = ObservationTable::from_json(read_json(input)?)
        .map_err(|e| format!("Invalid observations: {}", e))?;
    let groups = group(&build_graph(&table, &empty));
    info!(
        rows = table.len(),
        groups = groups.group_count(),
        "grouped observations"
    );

    if json {
        println!("{}", output::format_json(&groups));
    } else {
        output::print_table_header();
        for row in groups.rows() {
            println!("{}", output::format_table_row(row));
        }
    }
    Ok(())
}
