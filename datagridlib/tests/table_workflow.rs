//! End-to-end table workflows through the public API

use std::fs;
use std::time::{Duration, Instant};

use datagridlib::{
    demo_rows, shared, CheckState, ColumnDrag, CsvExporter, DeferredLoad, LoadStatus, PageTable,
    ResizeGesture, Row, SortDirection, StaticSource, TableEngine, TableHandle, TableOptions,
    DEMO_ROW_COUNT,
};
use tempfile::tempdir;

fn ids(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_surface_lifecycle() {
    let engine = shared(TableEngine::new());
    let handle = TableHandle::attach(&engine);
    let start = Instant::now();
    let delay = engine.borrow().options().load_delay;

    let mut load = DeferredLoad::schedule(
        handle.clone(),
        StaticSource::new(demo_rows(DEMO_ROW_COUNT)),
        start,
        delay,
    );

    // A sort clicked while the skeleton is showing applies once rows arrive
    handle.update(|e| e.cycle_sort("amount")).unwrap();
    assert_eq!(load.poll(start).unwrap(), LoadStatus::Pending);
    assert!(PageTable::from_engine(&engine.borrow()).loading);

    assert_eq!(load.poll(start + delay).unwrap(), LoadStatus::Delivered(50));

    let first_page: Vec<f64> = handle
        .read(|e| {
            e.page_rows()
                .iter()
                .map(|r| r.number("amount").unwrap())
                .collect()
        })
        .unwrap();
    assert_eq!(first_page.len(), 10);
    assert!(first_page.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_selection_survives_sort_and_paging() {
    let mut engine = TableEngine::new();
    engine.load_rows(demo_rows(50)).unwrap();

    engine.toggle_row_selection("row-3");
    engine.toggle_row_selection("row-7");
    engine.set_sorting("amount", SortDirection::Descending);
    engine.set_page_index(3);
    engine.set_page_size(25).unwrap();

    let summary = engine.selection_summary();
    assert_eq!(summary.selected, 2);
    assert_eq!(summary.state, CheckState::Indeterminate);
    assert_eq!(engine.pagination().page_index, 0);

    let mut selected = ids(&engine.selected_rows());
    selected.sort();
    assert_eq!(selected, vec!["row-3", "row-7"]);
}

#[test]
fn test_gestures_drive_layout() {
    let mut engine = TableEngine::new();

    let resize = ResizeGesture::begin(&engine, "description", 200).unwrap();
    resize.update(&mut engine, 260).unwrap();
    resize.update(&mut engine, 100).unwrap();
    drop(resize);
    assert_eq!(engine.column_width("description"), 100);

    ColumnDrag::begin(&engine, "source")
        .unwrap()
        .drop_on(&mut engine, "name")
        .unwrap();
    let table = PageTable::from_engine(&engine);
    assert_eq!(table.column_ids[2], "source");
    assert_eq!(table.widths[4], 100);
}

#[test]
fn test_export_scenarios() {
    let dir = tempdir().unwrap();
    let mut engine = TableEngine::new();
    engine.load_rows(demo_rows(50)).unwrap();
    let mut exporter = CsvExporter::new(dir.path());

    // Nothing selected: the whole dataset
    let report = engine.export_selection(&mut exporter).unwrap();
    assert_eq!(report.records, 50);
    assert_eq!(report.sheet, "Table Data");

    // Two selected: exactly those, avatar dropped
    engine.toggle_row_selection("row-3");
    engine.toggle_row_selection("row-7");
    let report = engine.export_selection(&mut exporter).unwrap();
    assert_eq!(report.records, 2);

    let content = fs::read_to_string(&report.path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "id,name,description,amount,tooltip,source");
    assert!(lines[1].starts_with("row-3,"));
    assert!(lines[2].starts_with("row-7,"));
}

#[test]
fn test_empty_dataset_export_has_headers() {
    let dir = tempdir().unwrap();
    let mut engine = TableEngine::new();
    engine.load_rows(Vec::new()).unwrap();

    let report = engine
        .export_selection(&mut CsvExporter::new(dir.path()))
        .unwrap();
    assert_eq!(report.records, 0);

    let content = fs::read_to_string(&report.path).unwrap();
    assert_eq!(content.trim_end(), "id,name,description,amount,source,tooltip");
}

#[test]
fn test_custom_options() {
    let options = TableOptions::new()
        .page_size(25)
        .export_file_stem("orders")
        .exclude_field("tooltip")
        .load_delay(Duration::ZERO);
    let mut engine = TableEngine::with_columns(datagridlib::default_columns(), options);
    engine.load_rows(demo_rows(50)).unwrap();
    assert_eq!(engine.page_rows().len(), 25);

    let dir = tempdir().unwrap();
    let report = engine
        .export_selection(&mut CsvExporter::new(dir.path()))
        .unwrap();
    assert!(report.path.ends_with("orders.csv"));

    let content = fs::read_to_string(&report.path).unwrap();
    assert!(!content.lines().next().unwrap().contains("tooltip"));
}

#[test]
fn test_reset_starts_a_new_lifecycle() {
    let mut engine = TableEngine::new();
    engine.load_rows(demo_rows(5)).unwrap();
    engine.toggle_all_selection();
    engine.set_sorting("amount", SortDirection::Descending);

    engine.reset();
    assert!(engine.is_loading());
    assert!(!engine.sorting().is_active());
    assert_eq!(engine.selection_summary().selected, 0);

    engine.load_rows(demo_rows(3)).unwrap();
    assert_eq!(ids(&engine.sorted_rows()), vec!["row-1", "row-2", "row-3"]);
}
