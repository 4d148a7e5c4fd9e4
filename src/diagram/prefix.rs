//! Common-prefix helpers for shortening event labels.

/// Longest prefix shared by `a` and `b`, compared char by char.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

/// Longest prefix shared by every label; empty when there are no labels.
pub fn shared_prefix<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut labels = labels.into_iter();
    let Some(first) = labels.next() else {
        return String::new();
    };
    labels
        .fold(first, |prefix, label| common_prefix(prefix, label))
        .to_string()
}
