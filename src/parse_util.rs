//! Parse utilities
//!
//! Code-frame rendering for error messages: given the full source and an
//! offset, produce the offending line with a caret at the column. Pure
//! formatting, no effect on parsing outcomes.

/// Render a code frame for `pos` within `source`.
///
/// The frame shows the line containing `pos` with its 1-based line number
/// and a caret marker under the offending column. Deterministic: the same
/// (source, pos) pair always yields an identical string.
pub fn code_frame(source: &str, pos: usize) -> String {
    let pos = pos.min(source.len());
    let line_start = source[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[pos..]
        .find('\n')
        .map(|i| pos + i)
        .unwrap_or(source.len());
    let line_number = source[..line_start].matches('\n').count() + 1;
    let col = source[line_start..pos].chars().count();

    let gutter = format!("{} | ", line_number);
    let mut frame = String::new();
    frame.push_str(&gutter);
    frame.push_str(&source[line_start..line_end]);
    frame.push('\n');
    frame.push_str(&" ".repeat(gutter.len() + col));
    frame.push('^');
    frame
}
