//! Filter-and-aggregate handler behind the dashboard.
//!
//! Everything here is a pure transform over a borrowed [`ProductionTable`];
//! the server functions and tests call it the same way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::model::{Category, ProductionRecord, ProductionTable, Workshop};

/// Current state of the four filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilters {
    pub start: Date,
    pub end: Date,
    pub categories: Vec<Category>,
    pub workshops: Vec<Workshop>,
}

impl DashboardFilters {
    /// Full date span with every option selected.
    pub fn full_range(options: &FilterOptions) -> Option<Self> {
        Some(Self {
            start: options.min_date?,
            end: options.max_date?,
            categories: options.categories.clone(),
            workshops: options.workshops.clone(),
        })
    }

    pub fn matches(&self, record: &ProductionRecord) -> bool {
        record.date >= self.start
            && record.date <= self.end
            && self.categories.contains(&record.category)
            && self.workshops.contains(&record.workshop)
    }
}

/// Values the filter controls are populated from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub min_date: Option<Date>,
    pub max_date: Option<Date>,
    pub categories: Vec<Category>,
    pub workshops: Vec<Workshop>,
}

impl FilterOptions {
    pub fn from_table(table: &ProductionTable) -> Self {
        let bounds = table.date_bounds();
        Self {
            min_date: bounds.map(|(min, _)| min),
            max_date: bounds.map(|(_, max)| max),
            categories: table.categories(),
            workshops: table.workshops(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: Date,
    pub planned: i64,
    pub actual: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub actual: i64,
    /// Fraction of the selection's total actual output, `0.0..=1.0`.
    pub fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub planned: i64,
    pub actual: i64,
    /// `planned - actual`; positive means output fell short of plan.
    pub deviation: i64,
}

impl Summary {
    pub fn from_records(records: &[ProductionRecord]) -> Self {
        let planned: i64 = records.iter().map(|r| i64::from(r.planned)).sum();
        let actual: i64 = records.iter().map(|r| i64::from(r.actual)).sum();
        Self {
            planned,
            actual,
            deviation: planned - actual,
        }
    }
}

/// The three display artifacts plus the rows they were derived from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardView {
    pub series: Vec<SeriesPoint>,
    pub shares: Vec<CategoryShare>,
    pub summary: Summary,
    pub records: Vec<ProductionRecord>,
}

pub fn select_rows(table: &ProductionTable, filters: &DashboardFilters) -> Vec<ProductionRecord> {
    if filters.start > filters.end || filters.categories.is_empty() || filters.workshops.is_empty()
    {
        return Vec::new();
    }
    table.iter().filter(|record| filters.matches(record)).collect()
}

pub fn update_dashboard(table: &ProductionTable, filters: &DashboardFilters) -> DashboardView {
    let records = select_rows(table, filters);
    DashboardView {
        series: time_series(&records),
        shares: category_shares(&records),
        summary: Summary::from_records(&records),
        records,
    }
}

/// Planned and actual totals per date, ascending.
pub fn time_series(records: &[ProductionRecord]) -> Vec<SeriesPoint> {
    let mut by_date: BTreeMap<Date, (i64, i64)> = BTreeMap::new();
    for record in records {
        let entry = by_date.entry(record.date).or_default();
        entry.0 += i64::from(record.planned);
        entry.1 += i64::from(record.actual);
    }
    by_date
        .into_iter()
        .map(|(date, (planned, actual))| SeriesPoint {
            date,
            planned,
            actual,
        })
        .collect()
}

/// Actual output per category present in `records`, in category order.
pub fn category_shares(records: &[ProductionRecord]) -> Vec<CategoryShare> {
    let mut totals: BTreeMap<Category, i64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.category).or_default() += i64::from(record.actual);
    }
    let grand_total: i64 = totals.values().sum();
    totals
        .into_iter()
        .map(|(category, actual)| CategoryShare {
            category,
            actual,
            fraction: if grand_total > 0 {
                actual as f64 / grand_total as f64
            } else {
                0.0
            },
        })
        .collect()
}
