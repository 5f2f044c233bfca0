/// Column width of a single character. CJK characters occupy two terminal
/// columns; the catalog is heavy on Japanese models, so replies routinely
/// mix scripts.
pub fn char_width(c: char) -> usize {
    match c {
        '\u{1100}'..='\u{115F}'   // Hangul Jamo
        | '\u{2E80}'..='\u{303F}' // CJK radicals, Kangxi, symbols
        | '\u{3040}'..='\u{33FF}' // Hiragana, Katakana, CJK compat
        | '\u{3400}'..='\u{4DBF}' // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{A000}'..='\u{A4CF}' // Yi
        | '\u{AC00}'..='\u{D7AF}' // Hangul syllables
        | '\u{F900}'..='\u{FAFF}' // CJK compat ideographs
        | '\u{FE10}'..='\u{FE19}' // Vertical forms
        | '\u{FE30}'..='\u{FE6F}' // CJK compat forms, small variants
        | '\u{FF00}'..='\u{FFEF}' // Fullwidth and halfwidth forms
        | '\u{20000}'..='\u{2EBEF}' => 2, // CJK extensions B-F
        _ => 1,
    }
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Wrap one logical line to a maximum display width, preferring breaks at
/// spaces and falling back to a hard break when there is none (the common
/// case for CJK text).
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut remaining = line;

    while display_width(remaining) > max_width {
        let mut width = 0;
        let mut hard_break = remaining.len();
        let mut space_break = None;

        for (pos, c) in remaining.char_indices() {
            if width + char_width(c) > max_width {
                hard_break = pos;
                break;
            }
            if c == ' ' {
                space_break = Some(pos);
            }
            width += char_width(c);
        }

        match space_break {
            Some(pos) if pos > 0 => {
                lines.push(remaining[..pos].to_string());
                remaining = remaining[pos + 1..].trim_start();
            }
            _ => {
                // Always consume at least one character so a lone wide
                // character cannot stall the loop.
                let cut = if hard_break == 0 {
                    remaining.chars().next().map(char::len_utf8).unwrap_or(0)
                } else {
                    hard_break
                };
                lines.push(remaining[..cut].to_string());
                remaining = &remaining[cut..];
            }
        }
    }

    lines.push(remaining.to_string());
    lines
}

/// Wrap a multi-line text block, preserving existing line breaks.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}
