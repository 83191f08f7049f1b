/// Greedy word-wrap: fill each line with as many words as fit.
///
/// `measure` must return the rendered width of a candidate line using the
/// same font metrics the final rendering will use, or the wrapped text will
/// misalign with its intended box. A line is flushed when appending the
/// next word would exceed `max_width` and the line is non-empty; a single
/// word wider than `max_width` is still placed on its own line without
/// character-level breaking. Pure in `text`, `max_width` and the metrics,
/// so break positions are reproducible across runs.
pub fn wrap_greedy<M>(text: &str, max_width: f32, mut measure: M) -> Vec<String>
where
    M: FnMut(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/compose/wrap.rs"]
mod tests;
