mod filters;
pub use filters::FilterPanel;

mod summary;
pub use summary::SummaryTable;

mod export;
pub use export::ExportPanel;

pub mod labels;

/// Adds or removes `item`, keeping `selection` sorted and free of duplicates.
pub(crate) fn toggle<T: Ord + Copy>(selection: &mut Vec<T>, item: T, selected: bool) {
    match (selection.binary_search(&item), selected) {
        (Err(pos), true) => selection.insert(pos, item),
        (Ok(pos), false) => {
            selection.remove(pos);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;
    use api::Category;

    #[test]
    fn toggle_keeps_selection_sorted() {
        let mut selection = vec![Category::Frogs];
        toggle(&mut selection, Category::Switches, true);
        assert_eq!(selection, vec![Category::Switches, Category::Frogs]);
        toggle(&mut selection, Category::Switches, true);
        assert_eq!(selection.len(), 2);
        toggle(&mut selection, Category::Frogs, false);
        assert_eq!(selection, vec![Category::Switches]);
        toggle(&mut selection, Category::RepairKits, false);
        assert_eq!(selection, vec![Category::Switches]);
    }
}
