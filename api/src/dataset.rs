//! Synthetic production dataset generated once at startup.
//!
//! One row is emitted per day and category plan. Workshops and markets are
//! cycled by row index purely to fill their columns; the only structural
//! guarantee is that every column ends up the same length.

use thiserror::Error;
use time::{macros::date, Date};

use crate::model::{Category, Columns, Market, ProductionTable, Workshop};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("date span is inverted: start {start} is after end {end}")]
    InvertedSpan { start: Date, end: Date },

    #[error("no {0} configured for dataset generation")]
    EmptyEnumeration(&'static str),

    #[error("column `{column}` has {actual} rows, expected {expected}")]
    ColumnLength {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Fixed daily plan for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPlan {
    pub category: Category,
    pub planned: u32,
    pub actual: u32,
    pub project: String,
}

impl CategoryPlan {
    pub fn new(category: Category, planned: u32, actual: u32, project: &str) -> Self {
        Self {
            category,
            planned,
            actual,
            project: project.to_string(),
        }
    }
}

/// Generation constants for the production table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSpec {
    pub start: Date,
    pub end: Date,
    pub plans: Vec<CategoryPlan>,
    pub workshops: Vec<Workshop>,
    pub markets: Vec<Market>,
}

pub const DEFAULT_START: Date = date!(2024 - 07 - 01);
pub const DEFAULT_END: Date = date!(2024 - 11 - 30);

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            plans: vec![
                CategoryPlan::new(Category::Switches, 100, 90, "Project A"),
                CategoryPlan::new(Category::RepairKits, 150, 140, "Project B"),
                CategoryPlan::new(Category::Frogs, 200, 190, "Project C"),
            ],
            workshops: Workshop::ALL.to_vec(),
            markets: vec![Market::Rzd, Market::Other],
        }
    }
}

impl DatasetSpec {
    pub fn with_span(mut self, start: Date, end: Date) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Number of calendar days in the span, inclusive.
    pub fn day_count(&self) -> usize {
        if self.start > self.end {
            return 0;
        }
        (self.end - self.start).whole_days() as usize + 1
    }

    pub fn build(&self) -> Result<ProductionTable, DatasetError> {
        if self.start > self.end {
            return Err(DatasetError::InvertedSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.plans.is_empty() {
            return Err(DatasetError::EmptyEnumeration("categories"));
        }
        if self.workshops.is_empty() {
            return Err(DatasetError::EmptyEnumeration("workshops"));
        }
        if self.markets.is_empty() {
            return Err(DatasetError::EmptyEnumeration("markets"));
        }

        let rows = self.day_count() * self.plans.len();
        let mut columns = Columns {
            dates: Vec::with_capacity(rows),
            categories: Vec::with_capacity(rows),
            workshops: Vec::with_capacity(rows),
            planned: Vec::with_capacity(rows),
            actual: Vec::with_capacity(rows),
            projects: Vec::with_capacity(rows),
            markets: Vec::with_capacity(rows),
        };

        let mut day = Some(self.start);
        while let Some(current) = day.filter(|d| *d <= self.end) {
            for plan in &self.plans {
                columns.dates.push(current);
                columns.categories.push(plan.category);
                columns.planned.push(plan.planned);
                columns.actual.push(plan.actual);
                columns.projects.push(plan.project.clone());
            }
            day = current.next_day();
        }

        columns.workshops = self.workshops.iter().copied().cycle().take(rows).collect();
        columns.markets = self.markets.iter().copied().cycle().take(rows).collect();

        ProductionTable::from_columns(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_span_covers_july_to_november() {
        let spec = DatasetSpec::default();
        assert_eq!(spec.day_count(), 153);
        let table = spec.build().unwrap();
        assert_eq!(table.len(), 153 * 3);
        assert_eq!(table.date_bounds(), Some((DEFAULT_START, DEFAULT_END)));
    }

    #[test]
    fn every_day_has_one_row_per_category() {
        let table = DatasetSpec::default().build().unwrap();
        let first_day: Vec<_> = table.iter().filter(|r| r.date == DEFAULT_START).collect();
        assert_eq!(first_day.len(), 3);
        let categories: Vec<_> = first_day.iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn workshops_and_markets_cycle_by_row() {
        let table = DatasetSpec::default().build().unwrap();
        let rows: Vec<_> = table.iter().take(4).collect();
        assert_eq!(rows[0].workshop, Workshop::MechanicalAssembly);
        assert_eq!(rows[1].workshop, Workshop::MechanicalFabrication);
        assert_eq!(rows[2].workshop, Workshop::MechanicalAssembly);
        assert_eq!(rows[3].market, Market::Other);
    }

    #[test]
    fn single_day_span_is_valid() {
        let day = date!(2024 - 08 - 15);
        let table = DatasetSpec::default().with_span(day, day).build().unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn inverted_span_fails() {
        let err = DatasetSpec::default()
            .with_span(DEFAULT_END, DEFAULT_START)
            .build()
            .unwrap_err();
        assert!(matches!(err, DatasetError::InvertedSpan { .. }));
    }

    #[test]
    fn missing_workshops_fail_fast() {
        let spec = DatasetSpec {
            workshops: Vec::new(),
            ..DatasetSpec::default()
        };
        assert_eq!(
            spec.build().unwrap_err(),
            DatasetError::EmptyEnumeration("workshops")
        );
    }
}
