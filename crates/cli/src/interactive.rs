//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide shared helpers for confirmation prompts.
//! - Open an item in the user's editor for `update --edit`.
//!
//! Invariants:
//! - Prompts go to stderr so stdout stays clean for command output.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;

/// Prompt the user for delete confirmation.
///
/// Returns `true` if the user enters 'y' or 'Y', `false` otherwise.
///
/// # Arguments
/// * `item_name` - The name or id of the item being deleted
/// * `item_type` - The type of item (e.g., "device", "interval") for the prompt message
pub fn confirm_delete(item_name: &str, item_type: &str) -> Result<bool> {
    confirm(&format!(
        "Are you sure you want to delete {} '{}'?",
        item_type, item_name
    ))
}

/// Ask a yes/no question on stderr; anything but 'y' is a no.
pub fn confirm(question: &str) -> Result<bool> {
    eprint!("{} [y/N] ", question);
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if !input.trim().eq_ignore_ascii_case("y") {
        eprintln!("Cancelled.");
        return Ok(false);
    }

    Ok(true)
}

/// Open `value` as pretty JSON in `$VISUAL`/`$EDITOR` (default `vi`) and parse the result.
///
/// Returns `Ok(None)` when the user quits without saving.
pub fn edit_in_editor<T>(value: &T) -> Result<Option<T>>
where
    T: Serialize + DeserializeOwned,
{
    let original = serde_json::to_string_pretty(value)?;

    let edited = dialoguer::Editor::new()
        .extension(".json")
        .edit(&original)
        .context("Failed to run editor")?;

    match edited {
        Some(text) => {
            let parsed = serde_json::from_str(&text)
                .map_err(|e| crate::input::InputError::Invalid(format!("edited JSON is invalid: {}", e)))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}
