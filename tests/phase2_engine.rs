//! Phase 2 tests: library state engine operations and derived views.

use std::cell::RefCell;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;

use expression_library::catalog::Catalog;
use expression_library::clipboard::MemoryClipboard;
use expression_library::engine::{
    CopyFailureReport, EmptyState, ExpressionLibrary, FailureSink, LibraryOptions,
    ResultsSummary, Theme,
};
use expression_library::storage::MemoryStore;
use expression_library::types::{
    Category, CategoryFilter, Entry, EntryBuilder, LibraryError, MAX_RECENTLY_COPIED,
};

// ==================== Helper ====================

fn entry_a() -> Entry {
    EntryBuilder::new("a", "Smooth Position Animation", Category::Position)
        .description("Eased movement between keyframes")
        .code("ease(time, inPoint, outPoint, 0, 100);")
        .tag("smooth")
        .tag("easing")
        .last_modified("2024-01-15")
        .build()
}

fn entry_b() -> Entry {
    EntryBuilder::new("b", "Color Temperature Shift", Category::Color)
        .description("Moves from warm to cool tones")
        .code("linear(time, 0, 1, warm, cool);")
        .tag("temperature")
        .tag("wiggle")
        .last_modified("2024-01-12")
        .build()
}

fn two_entry_catalog() -> Catalog {
    Catalog::new(vec![entry_a(), entry_b()]).unwrap()
}

/// A larger catalog with ids "0".."n" cycling through the categories.
fn numbered_catalog(n: usize) -> Catalog {
    let entries = (0..n)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            EntryBuilder::new(i.to_string(), format!("Expression {i}"), category)
                .description(if i % 3 == 0 { "Uses wiggle" } else { "Uses ease" })
                .code(format!("value + {i};"))
                .tag(if i % 2 == 0 { "even" } else { "odd" })
                .build()
        })
        .collect();
    Catalog::new(entries).unwrap()
}

fn library(catalog: Catalog) -> ExpressionLibrary<MemoryStore, MemoryClipboard> {
    ExpressionLibrary::new(catalog, MemoryStore::new(), MemoryClipboard::new())
}

fn ids(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

/// Whether `filtered` appears in `entries` in the same relative order.
fn is_ordered_subsequence(entries: &[Entry], filtered: &[&Entry]) -> bool {
    let mut cursor = entries.iter();
    filtered
        .iter()
        .all(|f| cursor.by_ref().any(|e| e.id == f.id))
}

#[derive(Clone, Default)]
struct RecordingSink {
    reports: Rc<RefCell<Vec<CopyFailureReport>>>,
}

impl FailureSink for RecordingSink {
    fn copy_failed(&self, report: &CopyFailureReport) {
        self.reports.borrow_mut().push(report.clone());
    }
}

// ==================== Initialization ====================

#[test]
fn test_fresh_library_defaults() {
    let lib = library(two_entry_catalog());

    assert_eq!(lib.entries().len(), 2);
    assert!(lib.favorites().is_empty());
    assert!(lib.recently_copied().is_empty());
    assert_eq!(lib.search_query(), "");
    assert_eq!(lib.selected_category(), CategoryFilter::All);
    assert!(!lib.is_dark_mode());
    assert!(!lib.show_favorites());
    assert_eq!(lib.theme(), Theme::Light);
    assert_eq!(lib.revision(), 0);
}

// ==================== Filtering ====================

#[test]
fn test_no_filters_returns_all_entries() {
    let lib = library(two_entry_catalog());
    assert_eq!(ids(&lib.filtered_expressions()), ["a", "b"]);
}

#[test]
fn test_search_matches_tag() {
    let mut lib = library(two_entry_catalog());
    lib.set_search_query("wiggle");
    assert_eq!(ids(&lib.filtered_expressions()), ["b"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut lib = library(two_entry_catalog());
    lib.set_search_query("WIGGLE");
    assert_eq!(ids(&lib.filtered_expressions()), ["b"]);

    lib.set_search_query("Smooth");
    assert_eq!(ids(&lib.filtered_expressions()), ["a"]);
}

#[test]
fn test_search_matches_category_name() {
    let mut lib = library(two_entry_catalog());
    lib.set_search_query("posit");
    assert_eq!(ids(&lib.filtered_expressions()), ["a"]);
}

#[test]
fn test_search_matches_description() {
    let mut lib = library(two_entry_catalog());
    lib.set_search_query("warm to cool");
    assert_eq!(ids(&lib.filtered_expressions()), ["b"]);
}

#[test]
fn test_category_filter() {
    let mut lib = library(two_entry_catalog());
    lib.set_selected_category(Category::Color);
    assert_eq!(ids(&lib.filtered_expressions()), ["b"]);

    lib.set_selected_category(CategoryFilter::All);
    assert_eq!(ids(&lib.filtered_expressions()), ["a", "b"]);
}

#[test]
fn test_search_and_category_combine_with_and() {
    let mut lib = library(two_entry_catalog());
    lib.set_selected_category(Category::Color);
    lib.set_search_query("wiggle");
    assert_eq!(ids(&lib.filtered_expressions()), ["b"]);

    // Category excludes B
    lib.set_selected_category(Category::Position);
    assert!(lib.filtered_expressions().is_empty());

    // Query excludes B
    lib.set_selected_category(Category::Color);
    lib.set_search_query("smooth");
    assert!(lib.filtered_expressions().is_empty());
}

#[test]
fn test_favorites_view() {
    let mut lib = library(two_entry_catalog());
    lib.toggle_favorite("b");
    lib.toggle_show_favorites();
    assert_eq!(ids(&lib.filtered_expressions()), ["b"]);
}

#[test]
fn test_favorites_view_keeps_catalog_order() {
    let mut lib = library(numbered_catalog(6));
    lib.toggle_favorite("4");
    lib.toggle_favorite("1");
    lib.toggle_favorite("3");
    lib.toggle_show_favorites();
    assert_eq!(ids(&lib.filtered_expressions()), ["1", "3", "4"]);
}

#[test]
fn test_favorites_view_with_search() {
    let mut lib = library(two_entry_catalog());
    lib.toggle_favorite("a");
    lib.toggle_show_favorites();
    lib.set_search_query("wiggle");
    assert!(lib.filtered_expressions().is_empty());
}

#[test]
fn test_filtered_view_tracks_favorite_changes() {
    let mut lib = library(two_entry_catalog());
    lib.toggle_show_favorites();
    assert!(lib.filtered_expressions().is_empty());

    lib.toggle_favorite("a");
    assert_eq!(ids(&lib.filtered_expressions()), ["a"]);

    lib.toggle_favorite("a");
    assert!(lib.filtered_expressions().is_empty());
}

#[test]
fn test_filtered_is_ordered_subsequence_random_states() {
    let catalog = numbered_catalog(40);
    let mut lib = library(catalog.clone());
    let mut rng = rand::thread_rng();
    let queries = ["", "wiggle", "EASE", "even", "odd", "expression 1", "zzz", "color"];

    for _ in 0..200 {
        match rng.gen_range(0..4) {
            0 => lib.set_search_query(*queries.choose(&mut rng).unwrap()),
            1 => {
                let options = CategoryFilter::all_options();
                lib.set_selected_category(*options.choose(&mut rng).unwrap());
            }
            2 => lib.toggle_show_favorites(),
            _ => lib.toggle_favorite(&rng.gen_range(0..40).to_string()),
        }

        let filtered = lib.filtered_expressions();
        assert!(is_ordered_subsequence(catalog.entries(), &filtered));
        for e in &filtered {
            assert!(lib.selected_category().admits(e.category));
            if lib.show_favorites() {
                assert!(lib.is_favorite(&e.id));
            }
            if !lib.search_query().is_empty() {
                assert!(e.matches_query(&lib.search_query().to_lowercase()));
            }
        }
    }
}

// ==================== Favorites ====================

#[test]
fn test_toggle_favorite_twice_restores() {
    let mut lib = library(two_entry_catalog());
    lib.toggle_favorite("a");
    let before = lib.favorites().clone();

    lib.toggle_favorite("b");
    lib.toggle_favorite("b");
    assert_eq!(lib.favorites(), &before);

    lib.toggle_favorite("a");
    lib.toggle_favorite("a");
    assert_eq!(lib.favorites(), &before);
}

#[test]
fn test_toggle_favorite_unknown_id_is_accepted() {
    // Unknown ids are not validated by default, so they can leave the
    // favorites outside the catalog.
    let mut lib = library(two_entry_catalog());
    lib.toggle_favorite("missing");
    assert!(lib.is_favorite("missing"));
    assert!(!lib.catalog().contains("missing"));

    lib.toggle_show_favorites();
    assert!(lib.filtered_expressions().is_empty());
}

#[test]
fn test_strict_favorites_ignores_unknown_id() {
    let options = LibraryOptions {
        strict_favorites: true,
        ..LibraryOptions::default()
    };
    let mut lib = ExpressionLibrary::with_options(
        two_entry_catalog(),
        MemoryStore::new(),
        MemoryClipboard::new(),
        options,
    );
    lib.toggle_favorite("missing");
    assert!(lib.favorites().is_empty());
    assert_eq!(lib.revision(), 0);

    lib.toggle_favorite("a");
    assert!(lib.is_favorite("a"));
}

// ==================== Copy ====================

#[test]
fn test_copy_writes_code_and_records() {
    let mut lib = library(two_entry_catalog());
    let a = entry_a();

    assert!(lib.copy_expression(&a));
    assert_eq!(lib.clipboard().contents(), Some(a.code.as_str()));
    assert_eq!(lib.recently_copied(), ["a"]);
}

#[test]
fn test_copy_moves_recopied_to_front() {
    let mut lib = library(two_entry_catalog());
    let (a, b) = (entry_a(), entry_b());

    assert!(lib.copy_expression(&a));
    assert!(lib.copy_expression(&b));
    assert!(lib.copy_expression(&a));
    assert_eq!(lib.recently_copied(), ["a", "b"]);
}

#[test]
fn test_copy_history_bounded() {
    let catalog = numbered_catalog(15);
    let mut lib = library(catalog.clone());
    for e in catalog.entries() {
        assert!(lib.copy_expression(e));
    }
    assert_eq!(lib.recently_copied().len(), MAX_RECENTLY_COPIED);
    assert_eq!(lib.recently_copied()[0], "14");
    assert_eq!(lib.recently_copied()[MAX_RECENTLY_COPIED - 1], "5");
}

#[test]
fn test_copy_random_sequences_keep_invariants() {
    let catalog = numbered_catalog(15);
    let mut lib = library(catalog.clone());
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let e = catalog.entries().choose(&mut rng).unwrap();
        assert!(lib.copy_expression(e));

        let recent = lib.recently_copied();
        assert!(recent.len() <= MAX_RECENTLY_COPIED);
        assert_eq!(recent[0], e.id);
        let mut unique = recent.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), recent.len());
    }
}

#[test]
fn test_copy_failure_leaves_state_and_reports() {
    let sink = RecordingSink::default();
    let mut lib = ExpressionLibrary::new(
        two_entry_catalog(),
        MemoryStore::new(),
        MemoryClipboard::failing("permission denied"),
    )
    .with_sink(Box::new(sink.clone()));

    let b = entry_b();
    assert!(!lib.copy_expression(&b));
    assert!(lib.recently_copied().is_empty());
    assert_eq!(lib.revision(), 0);
    assert!(lib.storage().is_empty());

    let reports = sink.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].entry_id, "b");
    assert_eq!(reports[0].entry_name, "Color Temperature Shift");
    assert!(reports[0].detail.contains("permission denied"));
}

#[test]
fn test_copy_recovers_after_failure() {
    let mut lib = library(two_entry_catalog());
    let a = entry_a();

    lib.clipboard_mut().set_failure(Some("busy".to_string()));
    assert!(!lib.copy_expression(&a));
    lib.clipboard_mut().set_failure(None);
    assert!(lib.copy_expression(&a));
    assert_eq!(lib.recently_copied(), ["a"]);
    assert_eq!(lib.clipboard().writes().len(), 1);
}

#[test]
fn test_copy_by_id() {
    let mut lib = library(two_entry_catalog());
    assert!(lib.copy_by_id("b").unwrap());
    assert_eq!(lib.recently_copied(), ["b"]);

    assert!(matches!(
        lib.copy_by_id("nope"),
        Err(LibraryError::EntryNotFound(_))
    ));
}

#[test]
fn test_recent_expressions_skips_unknown_and_limits() {
    let catalog = numbered_catalog(8);
    let mut lib = library(catalog.clone());
    for e in catalog.entries() {
        lib.copy_expression(e);
    }
    // An entry copied from outside the catalog is recorded but not resolved
    let stray = EntryBuilder::new("stray", "Stray", Category::Math).build();
    lib.copy_expression(&stray);
    assert_eq!(lib.recently_copied()[0], "stray");

    let recent = lib.recent_expressions(5);
    assert_eq!(ids(&recent), ["7", "6", "5", "4", "3"]);
}

// ==================== Toggles and summaries ====================

#[test]
fn test_toggle_dark_mode() {
    let mut lib = library(two_entry_catalog());
    lib.toggle_dark_mode();
    assert!(lib.is_dark_mode());
    assert_eq!(lib.theme(), Theme::Dark);
    lib.toggle_dark_mode();
    assert!(!lib.is_dark_mode());
}

#[test]
fn test_revision_moves_on_changes_only() {
    let mut lib = library(two_entry_catalog());
    lib.set_search_query("");
    lib.set_selected_category(CategoryFilter::All);
    assert_eq!(lib.revision(), 0);

    lib.set_search_query("wig");
    lib.set_selected_category(Category::Color);
    lib.toggle_show_favorites();
    lib.toggle_dark_mode();
    lib.toggle_favorite("a");
    assert_eq!(lib.revision(), 5);
}

#[test]
fn test_results_summary() {
    let mut lib = library(two_entry_catalog());
    assert_eq!(lib.results_summary(), ResultsSummary::Available { total: 2 });
    assert_eq!(
        lib.results_summary().to_string(),
        "2 professional expressions available"
    );

    lib.set_search_query("wiggle");
    assert_eq!(lib.results_summary(), ResultsSummary::Found { count: 1 });
    assert_eq!(lib.results_summary().to_string(), "Found 1 expression");

    lib.set_search_query("");
    lib.set_selected_category(Category::Math);
    assert_eq!(lib.results_summary().to_string(), "Found 0 expressions");

    lib.toggle_show_favorites();
    assert_eq!(
        lib.results_summary().to_string(),
        "Showing 0 favorite expressions"
    );
}

#[test]
fn test_empty_states() {
    let mut lib = library(two_entry_catalog());
    assert_eq!(lib.empty_state(), None);

    lib.set_search_query("nothing matches this");
    assert_eq!(lib.empty_state(), Some(EmptyState::NoMatches));

    lib.toggle_show_favorites();
    assert_eq!(lib.empty_state(), Some(EmptyState::NoFavorites));

    lib.toggle_show_favorites();
    lib.set_search_query("");
    lib.set_selected_category(Category::Math);
    assert_eq!(lib.empty_state(), Some(EmptyState::NoEntries));
}

#[test]
fn test_snapshot_serializes() {
    let mut lib = library(two_entry_catalog());
    lib.toggle_favorite("b");
    lib.set_selected_category(Category::Color);

    let value = serde_json::to_value(lib.snapshot()).unwrap();
    assert_eq!(value["selected_category"], "Color");
    assert_eq!(value["theme"], "light");
    assert_eq!(value["favorites"], serde_json::json!(["b"]));
    assert_eq!(value["total_entries"], 2);
    assert_eq!(value["filtered_expressions"][0]["id"], "b");
    assert_eq!(value["summary"], "Found 1 expression");
}
