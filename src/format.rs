//! Fixed-width padding and header/footer newline normalization.

/// Append spaces to a string until it reaches the specified width.
///
/// Strings already at or beyond `width` are returned unchanged; no
/// truncation ever occurs.
pub fn pad_right(s: &str, width: usize) -> String {
    if s.len() >= width {
        return s.to_string();
    }

    let mut padded = String::with_capacity(width);
    padded.push_str(s);
    for _ in 0..width - s.len() {
        padded.push(' ');
    }
    padded
}

/// Render a header as a block followed by exactly one blank line.
///
/// Checking for a newline at the start and end lets a variety of natural
/// string definitions produce the same bytes. Both of the following
/// render identically:
///
/// ```text
/// header: "text goes here".into()
///
/// header: "
/// text goes here
/// ".into()
/// ```
///
/// An empty header renders as an empty block. The same approach applies
/// to [`footer_block`].
pub fn header_block(header: &str) -> String {
    if header.is_empty() {
        return String::new();
    }

    let header = header.strip_prefix('\n').unwrap_or(header);
    if header.ends_with('\n') {
        format!("{header}\n")
    } else {
        format!("{header}\n\n")
    }
}

/// Render a footer as a block with exactly one newline before the text
/// and exactly one after it, whatever the caller's string terminators.
pub fn footer_block(footer: &str) -> String {
    if footer.is_empty() {
        return String::new();
    }

    let mut block = String::new();
    if !footer.starts_with('\n') {
        block.push('\n');
    }
    block.push_str(footer);
    if !footer.ends_with('\n') {
        block.push('\n');
    }
    block
}
