/// Characters allowed in the indentation run between a line break and the next token.
///
/// Unicode `White_Space` plus the information separators U+001C..U+001F, which the
/// original `\s` class accepted. Line breaks count too, so a run may cover blank lines.
#[inline]
pub fn is_run_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Byte length of the whitespace run at the start of `s`.
#[inline]
pub fn whitespace_run_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0usize;
    // ASCII fast path; indentation is almost always spaces and tabs.
    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C | 0x1C..=0x1F => i += 1,
            b if b < 0x80 => return i,
            _ => break,
        }
    }
    for (off, c) in s[i..].char_indices() {
        if !is_run_whitespace(c) {
            return i + off;
        }
    }
    s.len()
}

/// Byte length of the line break at the start of `s`: 1 for `\n`, 2 for `\r\n`.
#[inline]
pub fn line_break_len(s: &[u8]) -> Option<usize> {
    match s {
        [b'\n', ..] => Some(1),
        [b'\r', b'\n', ..] => Some(2),
        _ => None,
    }
}
