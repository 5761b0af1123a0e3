use folio_core::library::format_size;
use folio_core::search::PageView;
use folio_core::storage::StoredObject;

/// Plain-text rendering of a page view. Highlighted lines keep their
/// `<mark>` delimiters so they can be pasted into HTML as-is.
pub fn format_view(view: &PageView) -> String {
    match view {
        PageView::FullText { text } => text.clone(),
        PageView::Matches {
            count, highlighted, ..
        } => {
            let mut out = format!("Found {count} result(s):\n");
            for line in highlighted {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
            out.pop();
            out
        }
        PageView::NoMatches => "No matches found.".to_string(),
    }
}

pub fn format_objects(objects: &[StoredObject]) -> String {
    if objects.is_empty() {
        return "Store is empty.".to_string();
    }

    let max_name = objects
        .iter()
        .map(|o| o.name.chars().count())
        .max()
        .unwrap_or(10);
    let mut out = String::new();
    for o in objects {
        out.push_str(&format!(
            "  {:<width$}  {:>10}\n",
            o.name,
            format_size(o.size),
            width = max_name
        ));
    }
    out.push_str(&format!("\n{} document(s)", objects.len()));
    out
}
