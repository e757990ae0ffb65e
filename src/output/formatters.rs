//! Formatting utilities for terminal output

/// Space out a masked word so blanks are countable: `_a_` → `_ a _`
#[must_use]
pub fn spaced(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 2);
    for (i, c) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Bar showing remaining attempts out of the level's allowance
#[must_use]
pub fn attempts_bar(remaining: u32, total: u32) -> String {
    let filled = remaining.min(total) as usize;
    let empty = total as usize - filled;

    format!("{}{}", "♥".repeat(filled), "·".repeat(empty))
}

/// Comma-separated letters, or `-` when none
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
