//! Behaviour of the table view as seen by an admin screen.

use std::sync::Arc;
use std::sync::Mutex;

use rosterview_lib::view::CellFormat;
use rosterview_lib::view::Column;
use rosterview_lib::view::FilterDescriptor;
use rosterview_lib::view::FilterSelection;
use rosterview_lib::view::HeaderCheckbox;
use rosterview_lib::view::RowAction;
use rosterview_lib::view::RowActions;
use rosterview_lib::view::TableBody;
use rosterview_lib::Record;
use rosterview_lib::RecordId;
use rosterview_lib::TableConfig;
use rosterview_lib::TableView;

fn ids(rows: &[&Record]) -> Vec<i64> {
    rows.iter().map(|r| r.get_int("id").unwrap().unwrap()).collect()
}

fn students(count: i64) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            Record::new()
                .set("id", n)
                .set("name", format!("Student {n:02}"))
                .set("section", if n % 2 == 0 { "B" } else { "A" })
        })
        .collect()
}

fn student_config() -> TableConfig {
    TableConfig::new(vec![
        Column::new("name", "Name").sortable(),
        Column::new("section", "Section"),
    ])
    .with_filter(FilterDescriptor::new("section", "Section").options(["A", "B"]))
    .with_selectable(true)
    .with_bulk_action("delete")
}

// =============================================================================
// Pipeline scenarios
// =============================================================================

#[test]
fn test_twelve_records_across_two_pages() {
    let mut view = TableView::new(student_config()).with_records(students(12));

    assert_eq!(ids(&view.visible_rows()), (1..=10).collect::<Vec<_>>());
    assert_eq!(view.total_pages(), 2);
    assert_eq!(view.summary().unwrap().to_string(), "Showing 1 to 10 of 12");

    view.set_page(2);
    assert_eq!(ids(&view.visible_rows()), vec![11, 12]);
    assert_eq!(view.summary().unwrap().to_string(), "Showing 11 to 12 of 12");
}

#[test]
fn test_status_filter_scenario() {
    let records = vec![
        Record::new().set("id", 1).set("status", "Open"),
        Record::new().set("id", 2).set("status", "Closed"),
        Record::new().set("id", 3).set("status", "Open"),
    ];
    let config = TableConfig::new(vec![Column::new("status", "Status")]);
    let mut view = TableView::new(config).with_records(records);

    view.set_filter("status", FilterSelection::Value("open".into()));
    assert_eq!(ids(&view.visible_rows()), vec![1, 3]);

    view.set_filter("status", FilterSelection::All);
    assert_eq!(ids(&view.visible_rows()), vec![1, 2, 3]);
}

#[test]
fn test_amount_sort_scenario() {
    let records = vec![
        Record::new().set("id", 1).set("amount", 50),
        Record::new().set("id", 2).set("amount", 5),
        Record::new().set("id", 3).set("amount", 200),
    ];
    let config = TableConfig::new(vec![Column::new("amount", "Amount").sortable()]);
    let mut view = TableView::new(config).with_records(records);

    assert!(view.toggle_sort("amount"));
    assert_eq!(ids(&view.visible_rows()), vec![2, 1, 3]);

    assert!(view.toggle_sort("amount"));
    assert_eq!(ids(&view.visible_rows()), vec![3, 1, 2]);

    assert!(view.toggle_sort("amount"));
    assert_eq!(ids(&view.visible_rows()), vec![1, 2, 3]);
}

#[test]
fn test_search_then_filter_then_sort() {
    let mut view = TableView::new(student_config()).with_records(students(12));

    view.set_search("student 1");
    view.set_filter("section", FilterSelection::Value("b".into()));
    view.toggle_sort("name");
    view.toggle_sort("name");

    // "Student 10", "Student 11", "Student 12" match; section B keeps 10 and 12.
    assert_eq!(ids(&view.visible_rows()), vec![12, 10]);
}

#[test]
fn test_page_is_not_clamped_after_search() {
    let mut view = TableView::new(student_config()).with_records(students(12));
    view.set_page(2);
    view.set_search("Student 03");

    assert_eq!(view.page(), 2);
    assert_eq!(view.total_pages(), 1);
    assert!(view.visible_rows().is_empty());
}

// =============================================================================
// Selection and actions
// =============================================================================

#[test]
fn test_select_all_covers_current_page_only() {
    let mut view = TableView::new(student_config()).with_records(students(12));
    view.set_filter("section", FilterSelection::Value("A".into()));
    view.set_page(1);

    // Six section-A rows exist, page size 10 shows all six.
    view.select_all(true);
    assert_eq!(view.selected_ids().len(), 6);

    let mut view = TableView::new(student_config()).with_records(students(25));
    view.select_all(true);
    let expected: Vec<RecordId> = (1..=10).map(RecordId::from).collect();
    assert_eq!(view.selected_ids(), expected.as_slice());
    assert_eq!(view.header_state(), HeaderCheckbox::Checked);

    view.select_all(false);
    assert!(view.selected_ids().is_empty());
}

#[test]
fn test_selection_survives_filter_change() {
    let mut view = TableView::new(student_config()).with_records(students(4));
    view.toggle_row(1);
    view.set_filter("section", FilterSelection::Value("B".into()));

    assert_eq!(view.selected_ids(), &[RecordId::from(1)]);
    assert_eq!(view.header_state(), HeaderCheckbox::Unchecked);
}

#[test]
fn test_toggle_row_only_reaches_current_page() {
    let dispatched: Arc<Mutex<Vec<RecordId>>> = Arc::default();
    let sink = Arc::clone(&dispatched);
    let mut view = TableView::new(student_config())
        .with_records(students(12))
        .on_bulk_action(move |_, ids| sink.lock().unwrap().extend_from_slice(ids));

    // Page 1 shows ids 1 to 10; 11 sits on page 2 and "ghost" exists nowhere.
    assert!(!view.toggle_row(11));
    assert!(!view.toggle_row("ghost"));
    assert!(view.selected_ids().is_empty());
    assert!(!view.trigger_bulk_action("delete"));

    view.set_page(2);
    assert!(view.toggle_row(11));
    assert!(view.trigger_bulk_action("delete"));
    assert_eq!(*dispatched.lock().unwrap(), vec![RecordId::from(11)]);
}

#[test]
fn test_bulk_action_forwards_and_clears() {
    let received: Arc<Mutex<Vec<(String, Vec<RecordId>)>>> = Arc::default();
    let sink = Arc::clone(&received);
    let mut view = TableView::new(student_config())
        .with_records(students(5))
        .on_bulk_action(move |action, ids| {
            sink.lock().unwrap().push((action.to_string(), ids.to_vec()));
        });

    assert!(!view.trigger_bulk_action("delete"));

    view.toggle_row(2);
    view.toggle_row(4);
    assert!(view.trigger_bulk_action("delete"));
    assert!(view.selected_ids().is_empty());

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].0, "delete");
    assert_eq!(received[0].1, vec![RecordId::from(2), RecordId::from(4)]);
}

#[test]
fn test_bulk_action_without_handler_keeps_selection() {
    let mut view = TableView::new(student_config()).with_records(students(3));
    view.toggle_row(1);
    assert!(!view.trigger_bulk_action("delete"));
    assert_eq!(view.selected_ids().len(), 1);
}

#[test]
fn test_row_actions_dispatch_by_id() {
    let deleted: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&deleted);
    let actions = RowActions::new().on_delete(move |record| {
        sink.lock()
            .unwrap()
            .push(record.get_string("name").unwrap().unwrap_or_default().to_string());
    });
    let mut view = TableView::new(student_config())
        .with_records(students(3))
        .with_row_actions(actions);

    assert!(view.trigger_row_action(&RowAction::Delete, &RecordId::from(2)));
    assert!(!view.trigger_row_action(&RowAction::Edit, &RecordId::from(2)));
    assert!(!view.trigger_row_action(&RowAction::Delete, &RecordId::from(99)));
    assert_eq!(*deleted.lock().unwrap(), vec!["Student 02".to_string()]);
}

// =============================================================================
// Render model
// =============================================================================

#[test]
fn test_render_rows_and_columns() {
    let records = vec![
        Record::new().set("id", 1).set("item", "Chalk").set("amount", 120),
        Record::new().set("id", 2).set("item", "Projector").set("amount", 45000),
    ];
    let config = TableConfig::new(vec![
        Column::new("item", "Item"),
        Column::new("amount", "Amount").sortable().format(CellFormat::Currency {
            symbol: "₹".into(),
            decimals: 2,
        }),
    ]);
    let mut view = TableView::new(config)
        .with_records(records)
        .with_row_actions(RowActions::new().on_edit(|_| {}));
    view.toggle_sort("amount");

    let table = view.render();
    assert!(table.show_actions);
    assert!(table.select_all.is_none());
    assert_eq!(table.headers[1].decorated_label(), "Amount ▲");
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[1].cells, vec!["Projector", "₹45000.00"]);
    assert_eq!(table.rows()[0].actions, vec![RowAction::Edit]);

    let footer = table.footer.unwrap();
    assert_eq!(footer.total_pages, 1);
    assert_eq!(footer.summary.to_string(), "Showing 1 to 2 of 2");
}

#[test]
fn test_render_matches_pipeline_accessors() {
    let mut view = TableView::new(student_config()).with_records(students(25));
    view.set_filter("section", FilterSelection::Value("a".into()));
    view.toggle_sort("name");
    view.set_page(2);
    view.toggle_row(21);

    let table = view.render();
    let rendered: Vec<RecordId> = table.rows().iter().filter_map(|r| r.id.clone()).collect();
    assert_eq!(rendered, view.visible_ids());
    assert_eq!(rendered, vec![RecordId::from(21), RecordId::from(23), RecordId::from(25)]);
    assert_eq!(table.select_all, Some(view.header_state()));
    assert_eq!(table.select_all, Some(HeaderCheckbox::Indeterminate));
    assert_eq!(table.footer.unwrap().summary, view.summary().unwrap());
}

#[test]
fn test_render_loading_shows_page_size_skeletons() {
    let config = student_config().with_page_size(7);
    let mut view = TableView::new(config).with_records(students(2));
    view.set_loading(true);

    let table = view.render();
    assert_eq!(table.body, TableBody::Loading { skeleton_rows: 7 });
    assert!(table.footer.is_none());
}

#[test]
fn test_render_empty_message() {
    let config = student_config().with_empty_message("No students yet");
    let mut view = TableView::new(config).with_records(students(3));
    view.set_search("zzz");

    let table = view.render();
    assert_eq!(
        table.body,
        TableBody::Empty {
            message: "No students yet".into()
        }
    );
    assert!(table.footer.is_none());
}

#[test]
fn test_render_selection_flags() {
    let mut view = TableView::new(student_config()).with_records(students(3));
    view.toggle_row(3);

    let table = view.render();
    assert_eq!(table.select_all, Some(HeaderCheckbox::Indeterminate));
    assert_eq!(table.selected_count, 1);
    let selected: Vec<bool> = table.rows().iter().map(|r| r.selected).collect();
    assert_eq!(selected, vec![false, false, true]);
    assert!(!table.show_actions);
}

#[test]
fn test_records_without_id_render_but_cannot_be_selected() {
    let records = vec![
        Record::new().set("id", 1).set("name", "Keyed"),
        Record::new().set("name", "Unkeyed"),
    ];
    let config = TableConfig::new(vec![Column::new("name", "Name")]).with_selectable(true);
    let mut view = TableView::new(config).with_records(records);

    view.select_all(true);
    assert_eq!(view.selected_ids(), &[RecordId::from(1)]);

    let table = view.render();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[1].id, None);
    assert!(!table.rows()[1].selected);
}

#[test]
fn test_config_from_json_drives_view() {
    let config = TableConfig::from_json_str(
        r#"{
            "columns": [
                {"key": "visitor", "label": "Visitor", "sortable": true},
                {"key": "status", "label": "Status", "format": {"kind": "badge"}}
            ],
            "filterOptions": [
                {"key": "status", "label": "Status",
                 "options": [{"label": "Inside", "value": "in"}, "out"]}
            ],
            "idField": "_id",
            "pageSize": 1
        }"#,
    )
    .unwrap();
    let records: Vec<Record> = serde_json::from_str(
        r#"[
            {"_id": "a1", "visitor": "Courier", "status": "out"},
            {"_id": "b2", "visitor": "Parent", "status": "in"}
        ]"#,
    )
    .unwrap();

    let mut view = TableView::new(config).with_records(records);
    view.set_filter("status", FilterSelection::parse("IN"));

    let table = view.render();
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].id, Some(RecordId::from("b2")));
    assert_eq!(table.rows()[0].cells, vec!["Parent", "[IN]"]);
}
