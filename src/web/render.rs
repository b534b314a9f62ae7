//! HTML rendering of the notes board.

use crate::config::BoardConfig;
use crate::entity::Note;
use crate::storage::NoteStore;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem; background: #fafafa; }
.grid { display: flex; gap: 1rem; align-items: flex-start; }
.column { flex: 1; display: flex; flex-direction: column; gap: 1rem; min-width: 0; }
.note { background-color: #FFEB3B; padding: 1rem; border-radius: 8px; box-shadow: 2px 2px 8px rgba(0,0,0,0.1); color: #000000; white-space: pre-wrap; overflow-wrap: anywhere; }
.note input, .note textarea { width: 100%; box-sizing: border-box; margin-bottom: 0.5rem; background: transparent; border: 1px solid rgba(0,0,0,0.2); }
.note textarea { min-height: 8rem; }
.select { cursor: pointer; }
"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole board page.
pub fn render_board(store: &NoteStore, config: &BoardConfig) -> String {
    let title = escape_html(&config.title);
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", title));
    page.push_str(&format!("<style>{}</style>\n", STYLE));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", title));
    page.push_str(
        "<form method=\"post\" action=\"/notes\">\
<button type=\"submit\">+ Add Note</button></form>\n",
    );

    page.push_str("<div class=\"grid\">\n");
    for column in columns(store.notes(), config.columns) {
        page.push_str("<div class=\"column\">\n");
        for (index, note) in column {
            if store.edit_cursor() == Some(index) {
                page.push_str(&render_editor(note));
            } else {
                page.push_str(&render_preview(index, note, config.preview_chars));
            }
        }
        page.push_str("</div>\n");
    }
    page.push_str("</div>\n</body>\n</html>\n");

    page
}

/// Deal notes into columns round-robin, note `i` landing in column `i % n`.
fn columns(notes: &[Note], n: usize) -> Vec<Vec<(usize, &Note)>> {
    let n = n.max(1);
    let mut cols: Vec<Vec<(usize, &Note)>> = vec![Vec::new(); n];
    for (index, note) in notes.iter().enumerate() {
        cols[index % n].push((index, note));
    }
    cols
}

fn render_preview(index: usize, note: &Note, preview_chars: usize) -> String {
    let title = escape_html(&note.title);
    let (preview, truncated) = note.preview(preview_chars);
    let ellipsis = if truncated { "…" } else { "" };

    format!(
        "<form method=\"post\" action=\"/notes/{index}/edit\">\
<button type=\"submit\" class=\"select\" title=\"Click to edit\">📝 {title}</button></form>\n\
<div class=\"note\"><strong>{title}</strong><br>{preview}{ellipsis}</div>\n",
        index = index,
        title = title,
        preview = escape_html(preview),
        ellipsis = ellipsis,
    )
}

fn render_editor(note: &Note) -> String {
    format!(
        "<form class=\"note editing\" method=\"post\" action=\"/edit/save\">\n\
<input type=\"text\" name=\"title\" value=\"{title}\" placeholder=\"Title\" autofocus>\n\
<textarea name=\"body\" placeholder=\"Write your note here...\">\n{body}</textarea>\n\
<button type=\"submit\">✔️ Save</button>\n\
<button type=\"submit\" formaction=\"/edit/delete\">🗑 Delete</button>\n\
<button type=\"submit\" formaction=\"/edit/cancel\">Cancel</button>\n\
</form>\n",
        title = escape_html(&note.title),
        body = escape_html(&note.body),
    )
}
