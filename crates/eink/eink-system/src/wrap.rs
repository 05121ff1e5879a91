//! Greedy pixel-width text wrapping
//!
//! Width measurement is supplied by the caller so the wrapper stays
//! independent of any particular font.

/// Break `text` into lines no wider than `max_width` pixels
///
/// Characters accumulate into a pending word. A space flushes the pending
/// word (and the space) onto the current line. After every other character
/// the current line plus pending word is measured, and if it is wider than
/// `max_width` the current line is emitted and a new one started.
///
/// The result always holds at least one line and concatenating the lines
/// reproduces `text` exactly. A single word wider than `max_width` is not
/// split and may produce empty lines before it.
///
/// ```
/// use eink_system::wrap::wrap;
///
/// let lines = wrap("hello world", 60, |s| s.chars().count() as u32 * 10);
/// assert_eq!(lines, vec!["hello ", "world"]);
/// assert_eq!(wrap("", 60, |_| 0), vec![String::new()]);
/// ```
pub fn wrap<F>(text: &str, max_width: u32, width_of: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut word = String::new();
    let mut candidate = String::new();

    for ch in text.chars() {
        if ch == ' ' {
            line.push_str(&word);
            line.push(ch);
            word.clear();
            continue;
        }

        word.push(ch);

        candidate.clear();
        candidate.push_str(&line);
        candidate.push_str(&word);
        if width_of(&candidate) > max_width {
            lines.push(std::mem::take(&mut line));
        }
    }

    line.push_str(&word);
    lines.push(line);
    lines
}
