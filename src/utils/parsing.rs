//! Parsing utilities for console input.
//!
//! This module provides the pure parsing functions behind the editor and
//! the menu, kept separate from terminal I/O so they can be tested directly.

use crate::repl::MenuChoice;

// =============================================================================
// Line Handling
// =============================================================================

/// Strip the trailing line terminator (`\n` or `\r\n`) from a line read from stdin.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// True when the input carries no content (empty or whitespace only).
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

// =============================================================================
// List Parsing
// =============================================================================

/// Parse a comma-separated replacement list.
///
/// Returns `None` for blank input (keep the current list). Otherwise splits on
/// commas and trims each piece. Empty pieces are kept.
///
/// # Example
/// ```
/// use bio_console::utils::parsing::parse_list_input;
///
/// assert_eq!(parse_list_input("a, b ,c"), Some(vec!["a".into(), "b".into(), "c".into()]));
/// assert_eq!(parse_list_input("   "), None);
/// ```
pub fn parse_list_input(input: &str) -> Option<Vec<String>> {
    if is_blank(input) {
        return None;
    }
    Some(input.split(',').map(|s| s.trim().to_string()).collect())
}

// =============================================================================
// Menu Parsing
// =============================================================================

/// Parse a menu selection ("1" through "5").
///
/// `input` is the line without its terminator. Only the exact digits match;
/// padded input such as `" 1"` is `None`.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input {
        "1" => Some(MenuChoice::EditSkills),
        "2" => Some(MenuChoice::EditInterests),
        "3" => Some(MenuChoice::EditLearning),
        "4" => Some(MenuChoice::EditContacts),
        "5" => Some(MenuChoice::SaveAndExit),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
