//! Interactive editing of profile fields.
//!
//! Each editor takes the current value and returns the new one; the caller
//! writes it back into the [`Profile`](crate::storage::Profile).

use std::io::{BufRead, Write};

use crate::error::{BioError, Result};
use crate::storage::Contacts;
use crate::utils::parsing::{is_blank, parse_list_input, strip_line_ending};

pub const LIST_PROMPT: &str =
    "Enter new items separated by commas (or press Enter to keep current): ";

/// Print `prompt` (no newline) and read one line, without its terminator.
///
/// Fails with [`BioError::InputClosed`] at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BioError::InputClosed);
    }
    Ok(strip_line_ending(&line).to_string())
}

/// Show `current` as a numbered list and ask for a comma-separated replacement.
///
/// Blank input keeps `current`.
pub fn edit_list_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    current: &[String],
    label: &str,
) -> Result<Vec<String>> {
    writeln!(out, "\nCurrent {}:", label)?;
    for (i, item) in current.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item)?;
    }

    let line = prompt_line(input, out, LIST_PROMPT)?;
    match parse_list_input(&line) {
        Some(items) => {
            log::debug!("{} replaced with {} item(s)", label, items.len());
            Ok(items)
        }
        None => Ok(current.to_vec()),
    }
}

/// Prompt for each contact URL in turn: GitHub, Facebook, TryHackMe.
///
/// Blank input keeps a field; anything else replaces it as typed.
pub fn edit_contacts<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    current: &Contacts,
) -> Result<Contacts> {
    Ok(Contacts {
        github: edit_url(input, out, "GitHub URL", &current.github)?,
        facebook: edit_url(input, out, "Facebook URL", &current.facebook)?,
        tryhackme: edit_url(input, out, "Tryhackme URL", &current.tryhackme)?,
    })
}

fn edit_url<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    let line = prompt_line(input, out, &format!("{} ({}): ", label, current))?;
    if is_blank(&line) {
        Ok(current.to_string())
    } else {
        Ok(line)
    }
}
