//! Filter invariants checked across a sweep of filter states over the default dataset.

use api::dataset::DatasetSpec;
use api::{
    update_dashboard, Category, DashboardFilters, FilterOptions, ProductionTable, Summary, Workshop,
};
use time::{macros::date, Date, Duration};

fn table() -> ProductionTable {
    DatasetSpec::default().build().expect("default dataset builds")
}

fn subsets<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    (0..(1u32 << items.len()))
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| *item)
                .collect()
        })
        .collect()
}

fn ranges() -> Vec<(Date, Date)> {
    let start = date!(2024 - 07 - 01);
    vec![
        (start, date!(2024 - 11 - 30)),
        (start, start),
        (date!(2024 - 08 - 10), date!(2024 - 08 - 20)),
        (date!(2024 - 11 - 25), date!(2024 - 12 - 31)),
        (date!(2024 - 06 - 01), start - Duration::days(1)),
        (date!(2024 - 10 - 01), date!(2024 - 09 - 01)),
    ]
}

fn every_filter_state() -> Vec<DashboardFilters> {
    let mut states = Vec::new();
    for (start, end) in ranges() {
        for categories in subsets(&Category::ALL) {
            for workshops in subsets(&Workshop::ALL) {
                states.push(DashboardFilters {
                    start,
                    end,
                    categories: categories.clone(),
                    workshops,
                });
            }
        }
    }
    states
}

#[test]
fn every_selected_row_satisfies_all_clauses() {
    let table = table();
    for filters in every_filter_state() {
        let view = update_dashboard(&table, &filters);
        for row in &view.records {
            assert!(row.date >= filters.start && row.date <= filters.end);
            assert!(filters.categories.contains(&row.category));
            assert!(filters.workshops.contains(&row.workshop));
        }
        let expected = table.iter().filter(|r| filters.matches(r)).count();
        let expected = if filters.start > filters.end { 0 } else { expected };
        assert_eq!(view.records.len(), expected, "filters: {filters:?}");
    }
}

#[test]
fn summary_matches_selection_column_sums() {
    let table = table();
    for filters in every_filter_state() {
        let view = update_dashboard(&table, &filters);
        let planned: i64 = view.records.iter().map(|r| i64::from(r.planned)).sum();
        let actual: i64 = view.records.iter().map(|r| i64::from(r.actual)).sum();
        assert_eq!(view.summary.planned, planned);
        assert_eq!(view.summary.actual, actual);
        assert_eq!(view.summary.deviation, planned - actual);
    }
}

#[test]
fn empty_selections_give_zero_aggregates() {
    let table = table();
    for filters in every_filter_state()
        .into_iter()
        .filter(|f| f.categories.is_empty() || f.workshops.is_empty())
    {
        let view = update_dashboard(&table, &filters);
        assert!(view.records.is_empty());
        assert_eq!(view.summary, Summary::default());
    }
}

#[test]
fn full_selection_matches_whole_table() {
    let table = table();
    let filters = DashboardFilters::full_range(&FilterOptions::from_table(&table)).unwrap();
    let view = update_dashboard(&table, &filters);
    assert_eq!(view.records.len(), table.len());
    assert_eq!(view.summary.planned, table.total_planned());
    assert_eq!(view.summary.actual, table.total_actual());
}

#[test]
fn each_category_keeps_its_fixed_daily_values() {
    let table = table();
    let day = date!(2024 - 10 - 05);
    let expected = [
        (Category::Switches, 100, 90),
        (Category::RepairKits, 150, 140),
        (Category::Frogs, 200, 190),
    ];
    for (category, planned, actual) in expected {
        let filters = DashboardFilters {
            start: day,
            end: day,
            categories: vec![category],
            workshops: Workshop::ALL.to_vec(),
        };
        let view = update_dashboard(&table, &filters);
        assert_eq!(view.records.len(), 1);
        assert_eq!(view.records[0].planned, planned);
        assert_eq!(view.records[0].actual, actual);
        assert_eq!(view.summary.deviation, i64::from(planned - actual));
    }
}

#[test]
fn view_serializes_for_the_wire() {
    let table = table();
    let filters = DashboardFilters {
        start: date!(2024 - 07 - 01),
        end: date!(2024 - 07 - 02),
        categories: vec![Category::Switches],
        workshops: Workshop::ALL.to_vec(),
    };
    let view = update_dashboard(&table, &filters);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["summary"]["planned"], 200);
    assert_eq!(json["shares"][0]["category"], "switches");
    assert_eq!(json["records"].as_array().map(Vec::len), Some(2));
}
