//! Visual width accounting for box layout.
//!
//! Status icons are emoji that occupy two terminal columns; padding by
//! `str::len` or char count would under-pad those lines and break the box's
//! right border. Codepoints in the recognized emoji ranges count as two
//! columns, everything else as one.

/// Visual width of one character in terminal columns.
fn char_width(c: char) -> usize {
    let cp = c as u32;
    if (0x1F300..=0x1FAFF).contains(&cp) || (0x2600..=0x27BF).contains(&cp) {
        2
    } else {
        1
    }
}

/// Visual width of a string in terminal columns.
pub fn visual_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate `s` to at most `max` visual columns, suffixing "..." when cut.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if visual_width(s) <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Greedy word wrap: append the next word while it fits the budget, else
/// flush the line and start a new one. A single word wider than the budget
/// is emitted on its own line, never split. Blank input lines are kept as
/// paragraph breaks.
pub fn wrap_text(text: &str, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if visual_width(&current) + 1 + visual_width(word) <= budget {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
