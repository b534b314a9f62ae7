use std::io::{self, Read};
use std::path::PathBuf;

use crate::command::Command;
use crate::config::{resolve_notes_file, BoardConfig, ServerConfig};
use crate::entity::Note;
use crate::error::{Result, StickiesError};
use crate::storage::NoteStore;
use crate::web;

const LIST_PREVIEW_CHARS: usize = 60;

fn open_store(file: Option<PathBuf>) -> Result<NoteStore> {
    NoteStore::open(resolve_notes_file(file))
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

fn display_title(note: &Note) -> &str {
    if note.title.is_empty() {
        "(untitled)"
    } else {
        note.title.as_str()
    }
}

fn print_note(index: usize, note: &Note, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Note {} - {}", index, display_title(note));
        if !note.body.is_empty() {
            println!("\n{}", note.body);
        }
    }
    Ok(())
}

pub fn handle_list(file: Option<PathBuf>, json: bool) -> Result<()> {
    let store = open_store(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.notes())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    println!("Notes:\n");
    for (index, note) in store.notes().iter().enumerate() {
        println!("  {:>3}  {}", index, display_title(note));
        let (preview, truncated) = note.preview(LIST_PREVIEW_CHARS);
        if !preview.is_empty() {
            // Keep each preview on one line
            let flat = preview.replace('\n', " ");
            println!("       {}{}", flat, if truncated { "…" } else { "" });
        }
    }

    Ok(())
}

pub fn handle_show(file: Option<PathBuf>, index: usize, json: bool) -> Result<()> {
    let store = open_store(file)?;
    let note = store
        .notes()
        .get(index)
        .ok_or(StickiesError::NoteNotFound(index))?;
    print_note(index, note, json)
}

pub fn handle_add(
    file: Option<PathBuf>,
    title: String,
    body: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = open_store(file)?;

    let body = if stdin {
        read_stdin()?
    } else {
        body.unwrap_or_default()
    };

    Command::AddNote.execute(&mut store)?;
    let index = store.len() - 1;
    Command::SaveEdit { title, body }.execute(&mut store)?;

    if json {
        print_note(index, &store.notes()[index], true)
    } else {
        println!("Created note {} - {}", index, display_title(&store.notes()[index]));
        Ok(())
    }
}

pub fn handle_edit(
    file: Option<PathBuf>,
    index: usize,
    title: Option<String>,
    body: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = open_store(file)?;

    Command::SelectForEdit(index).execute(&mut store)?;
    let current = store
        .editing()
        .cloned()
        .ok_or(StickiesError::NoteNotFound(index))?;

    let body = if stdin { Some(read_stdin()?) } else { body };
    Command::SaveEdit {
        title: title.unwrap_or(current.title),
        body: body.unwrap_or(current.body),
    }
    .execute(&mut store)?;

    if json {
        print_note(index, &store.notes()[index], true)
    } else {
        println!("Updated note {} - {}", index, display_title(&store.notes()[index]));
        Ok(())
    }
}

pub fn handle_delete(file: Option<PathBuf>, index: usize, force: bool) -> Result<()> {
    let mut store = open_store(file)?;

    Command::SelectForEdit(index).execute(&mut store)?;
    let title = store
        .editing()
        .map(|note| display_title(note).to_string())
        .ok_or(StickiesError::NoteNotFound(index))?;

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete note {} - {}? [y/N] ", index, title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                Command::CancelEdit.execute(&mut store)?;
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(StickiesError::NonInteractive);
        }
    }

    Command::DeleteEdit.execute(&mut store)?;
    println!("Deleted note {} - {}", index, title);

    Ok(())
}

pub fn handle_serve(
    file: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    title: Option<String>,
    columns: Option<u16>,
    preview_chars: Option<usize>,
) -> Result<()> {
    let store = open_store(file)?;

    let defaults = BoardConfig::default();
    let board = BoardConfig {
        title: title.unwrap_or(defaults.title),
        columns: columns.map(usize::from).unwrap_or(defaults.columns),
        preview_chars: preview_chars.unwrap_or(defaults.preview_chars),
    };
    let server = ServerConfig::resolve(host, port);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(store, board, server))
}
