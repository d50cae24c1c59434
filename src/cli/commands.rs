//! CLI command implementations.

use crate::clipboard::Clipboard;
use crate::engine::ExpressionLibrary;
use crate::storage::KeyValueStore;
use crate::types::{CategoryFilter, Entry, LibraryResult};

/// List entries through the same filters the UI applies.
pub fn cmd_list<S: KeyValueStore, C: Clipboard>(
    library: &mut ExpressionLibrary<S, C>,
    search: Option<&str>,
    category: CategoryFilter,
    favorites_only: bool,
    json: bool,
) -> LibraryResult<()> {
    if let Some(query) = search {
        library.set_search_query(query);
    }
    library.set_selected_category(category);
    if favorites_only != library.show_favorites() {
        library.toggle_show_favorites();
    }

    if json {
        let entries: Vec<serde_json::Value> = library
            .filtered_expressions()
            .into_iter()
            .map(|e| entry_summary_json(e, library.is_favorite(&e.id)))
            .collect();
        let out = serde_json::json!({
            "summary": library.results_summary().to_string(),
            "count": entries.len(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", library.results_summary());
    match library.empty_state() {
        Some(empty) => {
            println!();
            println!("{}", empty.title());
            println!("{}", empty.description());
        }
        None => {
            for entry in library.filtered_expressions() {
                let star = if library.is_favorite(&entry.id) { "*" } else { " " };
                println!(
                    "{} {:>4}  {:<36} [{}] {}",
                    star, entry.id, entry.name, entry.category, entry.difficulty
                );
            }
        }
    }
    Ok(())
}

/// Show one entry in full.
pub fn cmd_show<S: KeyValueStore, C: Clipboard>(
    library: &ExpressionLibrary<S, C>,
    id: &str,
    json: bool,
) -> LibraryResult<()> {
    let entry = library.catalog().require(id)?;
    let favorite = library.is_favorite(id);

    if json {
        let mut value = serde_json::to_value(entry)?;
        value["favorite"] = serde_json::Value::Bool(favorite);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} ({})", entry.name, entry.id);
    println!("Category: {}", entry.category);
    println!("Difficulty: {}", entry.difficulty);
    println!("Favorite: {}", if favorite { "yes" } else { "no" });
    match entry.last_modified_date() {
        Some(date) => println!("Updated: {}", date.format("%b %-d, %Y")),
        None => println!("Updated: {}", entry.last_modified),
    }
    if !entry.tags.is_empty() {
        println!("Tags: {}", entry.tags.join(", "));
    }
    println!();
    println!("{}", entry.description);
    println!();
    println!("{}", entry.code);
    if !entry.examples.is_empty() {
        println!();
        println!("Examples:");
        for example in &entry.examples {
            println!("  - {example}");
        }
    }
    Ok(())
}

/// Toggle an entry's favorite status.
pub fn cmd_favorite<S: KeyValueStore, C: Clipboard>(
    library: &mut ExpressionLibrary<S, C>,
    id: &str,
    json: bool,
) -> LibraryResult<()> {
    library.toggle_favorite(id);
    let favorite = library.is_favorite(id);

    if json {
        println!("{}", serde_json::json!({"id": id, "favorite": favorite}));
    } else if favorite {
        println!("Added {id} to favorites");
    } else {
        println!("Removed {id} from favorites");
    }
    Ok(())
}

/// Copy an entry's code to the clipboard. Returns whether the copy
/// succeeded. Text-mode status goes to stderr so stdout can carry the
/// copied code when the clipboard is stdout.
pub fn cmd_copy<S: KeyValueStore, C: Clipboard>(
    library: &mut ExpressionLibrary<S, C>,
    id: &str,
    json: bool,
) -> LibraryResult<bool> {
    let copied = library.copy_by_id(id)?;

    if json {
        println!("{}", serde_json::json!({"id": id, "copied": copied}));
    } else if copied {
        eprintln!("Copied {id}");
    } else {
        eprintln!("Failed to copy {id}");
    }
    Ok(copied)
}

/// List recently copied entries.
pub fn cmd_recent<S: KeyValueStore, C: Clipboard>(
    library: &ExpressionLibrary<S, C>,
    limit: usize,
    json: bool,
) -> LibraryResult<()> {
    let recent = library.recent_expressions(limit);

    if json {
        let entries: Vec<serde_json::Value> = recent
            .iter()
            .map(|e| entry_summary_json(e, library.is_favorite(&e.id)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if recent.is_empty() {
        println!("Nothing copied yet");
        return Ok(());
    }
    println!("Recently Copied");
    for entry in recent {
        println!("  {:>4}  {} [{}]", entry.id, entry.name, entry.category);
    }
    Ok(())
}

/// Flip between light and dark mode.
pub fn cmd_theme<S: KeyValueStore, C: Clipboard>(
    library: &mut ExpressionLibrary<S, C>,
    json: bool,
) -> LibraryResult<()> {
    library.toggle_dark_mode();

    if json {
        println!(
            "{}",
            serde_json::json!({"theme": library.theme(), "dark_mode": library.is_dark_mode()})
        );
    } else {
        println!("Theme: {}", library.theme());
    }
    Ok(())
}

/// List category options with entry counts.
pub fn cmd_categories<S: KeyValueStore, C: Clipboard>(
    library: &ExpressionLibrary<S, C>,
    json: bool,
) -> LibraryResult<()> {
    let counts = library.catalog().category_counts();

    if json {
        let mut out = serde_json::Map::new();
        out.insert("All".to_string(), library.entries().len().into());
        for (category, count) in counts {
            out.insert(category.name().to_string(), count.into());
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{:<10} {}", "All", library.entries().len());
    for (category, count) in counts {
        println!("{:<10} {}", category.name(), count);
    }
    Ok(())
}

/// Print the persisted state and catalog size.
pub fn cmd_status<S: KeyValueStore, C: Clipboard>(
    library: &ExpressionLibrary<S, C>,
    json: bool,
) -> LibraryResult<()> {
    let snapshot = library.snapshot();

    if json {
        let out = serde_json::json!({
            "entries": snapshot.total_entries,
            "favorites": snapshot.favorites,
            "recently_copied": snapshot.recently_copied,
            "theme": snapshot.theme,
            "dark_mode": snapshot.is_dark_mode,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Entries: {}", snapshot.total_entries);
    println!("Favorites: {}", snapshot.favorites.len());
    println!("Recently copied: {}", snapshot.recently_copied.len());
    println!("Theme: {}", snapshot.theme);
    Ok(())
}

fn entry_summary_json(entry: &Entry, favorite: bool) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "name": entry.name,
        "category": entry.category,
        "difficulty": entry.difficulty,
        "favorite": favorite,
    })
}
