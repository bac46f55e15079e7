//! # Common Types
//!
//! This module contains the input types accepted by every chart builder: a
//! single named [`Series`] or a multi-column [`Table`], unified behind
//! [`ChartData`].

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ChartError, ChartResult};

/// One entry of an ordered index (x axis position, category or slice label).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Label::Int(value.into())
    }
}

impl From<usize> for Label {
    fn from(value: usize) -> Self {
        Label::Int(value as i64)
    }
}

impl From<f64> for Label {
    fn from(value: f64) -> Self {
        Label::Float(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

impl From<NaiveDate> for Label {
    fn from(value: NaiveDate) -> Self {
        Label::Date(value)
    }
}

impl From<NaiveDateTime> for Label {
    fn from(value: NaiveDateTime) -> Self {
        Label::DateTime(value)
    }
}

/// A named sequence of values aligned to an ordered index.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    index: Vec<Label>,
    values: Vec<f64>,
}

impl Series {
    /// Create a series, failing when index and values differ in length.
    pub fn new<L: Into<Label>>(
        name: impl Into<String>,
        index: impl IntoIterator<Item = L>,
        values: impl IntoIterator<Item = f64>,
    ) -> ChartResult<Self> {
        let name = name.into();
        let index: Vec<Label> = index.into_iter().map(Into::into).collect();
        let values: Vec<f64> = values.into_iter().collect();
        if index.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                name,
                expected: index.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            name,
            index,
            values,
        })
    }

    /// Create a series indexed by position (`0..n`).
    pub fn from_values(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        Self {
            name: name.into(),
            index: (0..values.len()).map(Label::from).collect(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> &[Label] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Wrap the series in a one-column table named after it.
    pub fn into_table(self) -> Table {
        let mut columns = IndexMap::with_capacity(1);
        columns.insert(self.name, self.values);
        Table {
            index: self.index,
            columns,
        }
    }
}

/// An ordered set of named columns sharing one index.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: Vec<Label>,
    columns: IndexMap<String, Vec<f64>>,
}

impl Table {
    /// Create an empty table over `index`; add columns with [`Table::with_column`].
    pub fn new<L: Into<Label>>(index: impl IntoIterator<Item = L>) -> Self {
        Self {
            index: index.into_iter().map(Into::into).collect(),
            columns: IndexMap::new(),
        }
    }

    /// Append a column. Order of insertion is the order of the traces.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> ChartResult<Self> {
        let name = name.into();
        let values: Vec<f64> = values.into_iter().collect();
        if values.len() != self.index.len() {
            return Err(ChartError::LengthMismatch {
                name,
                expected: self.index.len(),
                actual: values.len(),
            });
        }
        if self.columns.contains_key(&name) {
            return Err(ChartError::DuplicateColumn(name));
        }
        self.columns.insert(name, values);
        Ok(self)
    }

    /// Build a table from series that all share the same index.
    pub fn from_series(series: impl IntoIterator<Item = Series>) -> ChartResult<Self> {
        let mut series = series.into_iter();
        let Some(first) = series.next() else {
            return Ok(Self::new(Vec::<Label>::new()));
        };
        let mut table = first.into_table();
        for next in series {
            if next.index != table.index {
                return Err(ChartError::IndexMismatch(next.name));
            }
            table = table.with_column(next.name, next.values)?;
        }
        Ok(table)
    }

    pub fn index(&self) -> &[Label] {
        &self.index
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate `(name, values)` in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Extract one column as a series over the table index.
    pub fn column(&self, name: &str) -> Option<Series> {
        self.columns.get(name).map(|values| Series {
            name: name.to_string(),
            index: self.index.clone(),
            values: values.clone(),
        })
    }
}

/// Input accepted by the multi-series builders.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Series(Series),
    Table(Table),
}

/// A table plus whether it started life as a single series.
///
/// The flag drives the default legend visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub table: Table,
    pub is_series: bool,
}

impl ChartData {
    pub fn normalize(self) -> Normalized {
        match self {
            ChartData::Series(series) => Normalized {
                table: series.into_table(),
                is_series: true,
            },
            ChartData::Table(table) => Normalized {
                table,
                is_series: false,
            },
        }
    }
}

impl From<Series> for ChartData {
    fn from(series: Series) -> Self {
        ChartData::Series(series)
    }
}

impl From<&Series> for ChartData {
    fn from(series: &Series) -> Self {
        ChartData::Series(series.clone())
    }
}

impl From<Table> for ChartData {
    fn from(table: Table) -> Self {
        ChartData::Table(table)
    }
}

impl From<&Table> for ChartData {
    fn from(table: &Table) -> Self {
        ChartData::Table(table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_series_length_mismatch() {
        let err = Series::new("A", [0, 1, 2], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ChartError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_series_normalizes_to_single_column() {
        let series = Series::new("Fund", ["a", "b"], vec![1.0, 2.0]).unwrap();
        let normalized = ChartData::from(series).normalize();

        assert!(normalized.is_series);
        assert_eq!(normalized.table.width(), 1);
        let columns: Vec<_> = normalized.table.columns().collect();
        assert_eq!(columns, vec![("Fund", &[1.0, 2.0][..])]);
        assert_eq!(
            normalized.table.index(),
            &[Label::from("a"), Label::from("b")]
        );
    }

    #[test]
    fn test_table_keeps_column_order() {
        let table = Table::new([0, 1])
            .with_column("z", vec![1.0, 2.0])
            .unwrap()
            .with_column("a", vec![3.0, 4.0])
            .unwrap();
        let names: Vec<&str> = table.columns().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert!(!ChartData::from(&table).normalize().is_series);
    }

    #[test]
    fn test_table_rejects_duplicates_and_bad_lengths() {
        let table = Table::new([0, 1]).with_column("a", vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            table.clone().with_column("a", vec![1.0, 2.0]),
            Err(ChartError::DuplicateColumn(_))
        ));
        assert!(matches!(
            table.with_column("b", vec![1.0]),
            Err(ChartError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_from_series_requires_shared_index() {
        let a = Series::new("a", [0, 1], vec![1.0, 2.0]).unwrap();
        let b = Series::new("b", [0, 1], vec![3.0, 4.0]).unwrap();
        let c = Series::new("c", [5, 6], vec![3.0, 4.0]).unwrap();

        let table = Table::from_series([a.clone(), b]).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.column("b").unwrap().values(), &[3.0, 4.0]);
        assert!(matches!(
            Table::from_series([a, c]),
            Err(ChartError::IndexMismatch(name)) if name == "c"
        ));
    }

    #[test]
    fn test_label_serialization() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        let labels = vec![
            Label::from(3),
            Label::from(1.5),
            Label::from("Stocks"),
            Label::from(date),
        ];
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"[3,1.5,"Stocks","2023-01-31"]"#);
    }
}
