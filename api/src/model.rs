//! Production records and the columnar table that holds them.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::dataset::DatasetError;

/// Product category (nomenclature group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Switches,
    RepairKits,
    Frogs,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Switches, Category::RepairKits, Category::Frogs];

    pub fn key(self) -> &'static str {
        match self {
            Category::Switches => "switches",
            Category::RepairKits => "repair_kits",
            Category::Frogs => "frogs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workshop {
    MechanicalAssembly,
    MechanicalFabrication,
}

impl Workshop {
    pub const ALL: [Workshop; 2] = [Workshop::MechanicalAssembly, Workshop::MechanicalFabrication];

    pub fn key(self) -> &'static str {
        match self {
            Workshop::MechanicalAssembly => "mechanical_assembly",
            Workshop::MechanicalFabrication => "mechanical_fabrication",
        }
    }
}

/// Sales market a batch is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    Rzd,
    Other,
}

impl Market {
    pub fn key(self) -> &'static str {
        match self {
            Market::Rzd => "rzd",
            Market::Other => "other",
        }
    }
}

/// One row of the production table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub date: Date,
    pub category: Category,
    pub workshop: Workshop,
    pub planned: u32,
    pub actual: u32,
    pub project: String,
    pub market: Market,
}

/// Raw column vectors, one per record attribute.
#[derive(Debug, Clone, Default)]
pub struct Columns {
    pub dates: Vec<Date>,
    pub categories: Vec<Category>,
    pub workshops: Vec<Workshop>,
    pub planned: Vec<u32>,
    pub actual: Vec<u32>,
    pub projects: Vec<String>,
    pub markets: Vec<Market>,
}

impl Columns {
    fn lengths(&self) -> [(&'static str, usize); 7] {
        [
            ("date", self.dates.len()),
            ("category", self.categories.len()),
            ("workshop", self.workshops.len()),
            ("planned", self.planned.len()),
            ("actual", self.actual.len()),
            ("project", self.projects.len()),
            ("market", self.markets.len()),
        ]
    }
}

/// Immutable production table. Every column has the same length.
#[derive(Debug, Clone, Default)]
pub struct ProductionTable {
    columns: Columns,
}

impl ProductionTable {
    /// Wraps the given columns, rejecting any column whose length differs from
    /// the date column.
    pub fn from_columns(columns: Columns) -> Result<Self, DatasetError> {
        let expected = columns.dates.len();
        if let Some((column, actual)) = columns
            .lengths()
            .into_iter()
            .find(|(_, len)| *len != expected)
        {
            return Err(DatasetError::ColumnLength {
                column,
                expected,
                actual,
            });
        }
        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn record(&self, index: usize) -> Option<ProductionRecord> {
        let c = &self.columns;
        Some(ProductionRecord {
            date: *c.dates.get(index)?,
            category: *c.categories.get(index)?,
            workshop: *c.workshops.get(index)?,
            planned: *c.planned.get(index)?,
            actual: *c.actual.get(index)?,
            project: c.projects.get(index)?.clone(),
            market: *c.markets.get(index)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductionRecord> + '_ {
        (0..self.len()).filter_map(|index| self.record(index))
    }

    pub fn date_bounds(&self) -> Option<(Date, Date)> {
        let min = self.columns.dates.iter().min()?;
        let max = self.columns.dates.iter().max()?;
        Some((*min, *max))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        distinct(&self.columns.categories)
    }

    /// Distinct workshops in first-seen order.
    pub fn workshops(&self) -> Vec<Workshop> {
        distinct(&self.columns.workshops)
    }

    pub fn total_planned(&self) -> i64 {
        self.columns.planned.iter().map(|v| i64::from(*v)).sum()
    }

    pub fn total_actual(&self) -> i64 {
        self.columns.actual.iter().map(|v| i64::from(*v)).sum()
    }
}

fn distinct<T: Copy + PartialEq>(values: &[T]) -> Vec<T> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(value) {
            seen.push(*value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn columns(rows: usize) -> Columns {
        Columns {
            dates: vec![date!(2024 - 07 - 01); rows],
            categories: vec![Category::Frogs; rows],
            workshops: vec![Workshop::MechanicalAssembly; rows],
            planned: vec![200; rows],
            actual: vec![190; rows],
            projects: vec!["Project C".to_string(); rows],
            markets: vec![Market::Rzd; rows],
        }
    }

    #[test]
    fn equal_columns_are_accepted() {
        let table = ProductionTable::from_columns(columns(4)).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.iter().count(), 4);
        assert_eq!(table.total_planned(), 800);
        assert_eq!(table.total_actual(), 760);
    }

    #[test]
    fn short_column_is_named_in_error() {
        let mut cols = columns(3);
        cols.markets.pop();
        let err = ProductionTable::from_columns(cols).unwrap_err();
        match err {
            DatasetError::ColumnLength {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, "market");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_table_has_no_bounds() {
        let table = ProductionTable::from_columns(Columns::default()).unwrap();
        assert!(table.is_empty());
        assert!(table.date_bounds().is_none());
        assert!(table.categories().is_empty());
    }

    #[test]
    fn distinct_keeps_first_seen_order() {
        let mut cols = columns(3);
        cols.categories = vec![Category::Frogs, Category::Switches, Category::Frogs];
        let table = ProductionTable::from_columns(cols).unwrap();
        assert_eq!(table.categories(), vec![Category::Frogs, Category::Switches]);
    }
}
