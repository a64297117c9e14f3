// src/utils/format.rs

/// Text progress bar for a 0-100 score, e.g. `[██████░░░░]`.
pub fn strength_bar(value: u8, width: usize) -> String {
    let filled = usize::from(value.min(100)) * width / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

// Hide all but the first and last characters
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 | 2 => "*".repeat(chars.len()),
        n => format!("{}{}{}", chars[0], "*".repeat(n - 2), chars[n - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(strength_bar(0, 10), "[░░░░░░░░░░]");
        assert_eq!(strength_bar(30, 10), "[███░░░░░░░]");
        assert_eq!(strength_bar(100, 10), "[██████████]");
        assert_eq!(strength_bar(255, 4), "[████]");
    }

    #[test]
    fn masks_middle_characters() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("ab"), "**");
        assert_eq!(mask_secret("Aa1!Aa1!"), "A******!");
    }
}
