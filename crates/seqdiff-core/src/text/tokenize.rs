use crate::diff::model::DiffMode;

/// Split `text` into the elements compared under `mode`.
///
/// Elements borrow from `text`:
/// - `Chars`: one slice per Unicode scalar value
/// - `Words`: maximal non-whitespace runs
/// - `Lines`: lines without their terminator; a trailing newline does not
///   add an empty element and empty text has no lines
pub fn tokenize(text: &str, mode: DiffMode) -> Vec<&str> {
    match mode {
        DiffMode::Chars => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
        DiffMode::Words => text.split_whitespace().collect(),
        DiffMode::Lines => text.lines().collect(),
    }
}
