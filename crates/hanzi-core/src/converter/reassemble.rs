use crate::unicode::{edge_chars, is_letter};

/// Whether a space belongs between two adjacent rendered parts.
///
/// True only when `prev` ends and `next` starts with a letter (general
/// category L*). Empty parts never ask for a space.
pub fn needs_space(prev: &str, next: &str) -> bool {
    match (edge_chars(prev), edge_chars(next)) {
        (Some((_, last)), Some((first, _))) => is_letter(last) && is_letter(first),
        _ => false,
    }
}

/// Concatenate rendered segments, inserting one space at alphabetic
/// boundaries (see [`needs_space`]).
pub fn join_segments<S: AsRef<str>>(parts: &[S]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.as_ref().len() + 1).sum());
    for (i, part) in parts.iter().enumerate() {
        let part = part.as_ref();
        if i > 0 && needs_space(parts[i - 1].as_ref(), part) {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
