use crate::config::CompareOptions;
use std::borrow::Cow;

/// Apply the case-folding and whitespace flags of `options` to `text`.
///
/// Whitespace collapsing works line by line so the number of lines is
/// unchanged. Borrows `text` when no flag is set.
pub fn normalize<'t>(text: &'t str, options: &CompareOptions) -> Cow<'t, str> {
    let mut out = Cow::Borrowed(text);

    if options.ignore_whitespace {
        out = Cow::Owned(collapse_whitespace(&out));
    }
    if options.ignore_case {
        out = Cow::Owned(out.to_lowercase());
    }
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
