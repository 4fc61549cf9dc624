//! File operations for the notes collection
//!
//! Handles reading/writing the JSON notes file and minting note ids.

use super::NoteStoreError;
use notes_types::Note;
use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Read the note collection, returning an empty one if the file does not exist
pub async fn read_notes(path: &Path) -> Result<Vec<Note>, NoteStoreError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(NoteStoreError::io(path, e)),
    };

    serde_json::from_str(&content).map_err(|source| NoteStoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the note collection on disk (creates parent directories as needed).
///
/// The JSON is written to a sibling temp file first and renamed into place, so
/// readers only ever see the old or the new collection.
pub async fn write_notes(path: &Path, notes: &[Note]) -> Result<(), NoteStoreError> {
    let mut json = serde_json::to_string_pretty(notes)?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| NoteStoreError::io(parent, e))?;
    }

    let tmp_path = temp_path(path);
    let written = async {
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        Ok::<(), io::Error>(())
    }
    .await;
    if let Err(e) = written {
        fs::remove_file(&tmp_path).await.ok();
        return Err(NoteStoreError::io(&tmp_path, e));
    }

    if let Err(e) = fs::rename(&tmp_path, path).await {
        fs::remove_file(&tmp_path).await.ok();
        return Err(NoteStoreError::io(path, e));
    }
    Ok(())
}

/// Hidden sibling of `path` used for the write-then-rename
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "notes".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Mint a new note id from the current time in milliseconds.
///
/// Ids stay strictly increasing: if the clock has not moved past the largest
/// numeric id already in the collection, the id is bumped to one past it.
/// Ids are compared and incremented as decimal strings, so any digit-only id
/// on disk is handled regardless of its size.
pub fn mint_id(existing: &[Note], now_ms: i64) -> String {
    let now = now_ms.max(0).to_string();

    let latest = existing
        .iter()
        .filter_map(|n| canonical_decimal(&n.id))
        .max_by(|a, b| cmp_decimal(a, b));

    match latest {
        Some(latest) if cmp_decimal(latest, &now) != Ordering::Less => increment_decimal(latest),
        _ => now,
    }
}

/// Digits of `id` without leading zeros, if `id` is a plain decimal number
fn canonical_decimal(id: &str) -> Option<&str> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = id.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed })
}

fn cmp_decimal(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn increment_decimal(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }
    out.into_iter().map(char::from).collect()
}
