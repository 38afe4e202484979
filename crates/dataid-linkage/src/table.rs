use dataid_canonical::{sort_key, SortKey, Value};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::errors::LinkageError;

/// Column names used by [`ObservationTable::pairs`].
pub const PAIR_COLUMNS: [&str; 2] = ["a", "b"];

/// Rectangular table of observations; each cell may be missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<Value>>>,
}

impl ObservationTable {
    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a two-column table from paired observations.
    pub fn pairs<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Option<Value>, Option<Value>)>,
    {
        Self {
            columns: PAIR_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows.into_iter().map(|(a, b)| vec![a, b]).collect(),
        }
    }

    /// Parses a JSON array of two-element arrays; `null` cells are missing.
    pub fn from_json(json: serde_json::Value) -> Result<Self, LinkageError> {
        let serde_json::Value::Array(rows) = json else {
            return Err(LinkageError::InvalidShape(
                "expected an array of rows".to_string(),
            ));
        };
        let mut table = Self::pairs(std::iter::empty());
        for (idx, row) in rows.into_iter().enumerate() {
            let serde_json::Value::Array(cells) = row else {
                return Err(LinkageError::InvalidShape(format!(
                    "row {} is not an array",
                    idx
                )));
            };
            let cells = cells
                .into_iter()
                .map(|cell| match cell {
                    serde_json::Value::Null => None,
                    other => Some(Value::from_json(other)),
                })
                .collect();
            table.push_row(cells)?;
        }
        Ok(table)
    }

    /// Parses JSON text; see [`ObservationTable::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, LinkageError> {
        Self::from_json(serde_json::from_str(text)?)
    }

    /// Appends a row, checking its width against the columns.
    pub fn push_row(&mut self, row: Vec<Option<Value>>) -> Result<(), LinkageError> {
        if row.len() != self.columns.len() {
            return Err(LinkageError::ColumnCount {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Vec<Option<Value>>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps only rows with at least one cell in `values`.
    fn filter_by(&self, values: &BTreeSet<SortKey>) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|row| row.iter().flatten().any(|v| values.contains(&sort_key(v))))
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// One member of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    /// Group identifier, stable within one grouping call.
    pub group_id: u64,
    /// Member value.
    pub value: Value,
}

/// Result of grouping: one row per group member.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct GroupTable {
    rows: Vec<GroupRow>,
}

impl GroupTable {
    /// Column names of the result.
    pub const COLUMNS: [&'static str; 2] = ["group_id", "value"];

    /// Wraps rows produced by grouping.
    pub fn new(rows: Vec<GroupRow>) -> Self {
        Self { rows }
    }

    /// Rows: components first, then singletons.
    pub fn rows(&self) -> &[GroupRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no group was formed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct group identifiers, ascending.
    pub fn group_ids(&self) -> Vec<u64> {
        let ids: BTreeSet<u64> = self.rows.iter().map(|row| row.group_id).collect();
        ids.into_iter().collect()
    }

    /// Number of distinct groups.
    pub fn group_count(&self) -> usize {
        self.group_ids().len()
    }

    /// Members of one group, in row order.
    pub fn members(&self, group_id: u64) -> Vec<&Value> {
        self.rows
            .iter()
            .filter(|row| row.group_id == group_id)
            .map(|row| &row.value)
            .collect()
    }

    /// Group identifier of `value`, if it was grouped.
    pub fn group_of(&self, value: &Value) -> Option<u64> {
        let key = sort_key(value);
        self.rows
            .iter()
            .find(|row| sort_key(&row.value) == key)
            .map(|row| row.group_id)
    }

    /// Rows of `source` touching any member of `group_id`.
    ///
    /// Grouping the result again yields exactly one group with the same members.
    pub fn restrict(&self, source: &ObservationTable, group_id: u64) -> ObservationTable {
        let members: BTreeSet<SortKey> = self.members(group_id).into_iter().map(sort_key).collect();
        source.filter_by(&members)
    }
}
