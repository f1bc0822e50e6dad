//! Partial-tag machinery shared by every region of the extractor.

/// All proper prefixes of a tag, longest first.
///
/// Generated from the tag string so every dialect token gets identical
/// treatment. Longest-first ordering means a one-character `<` tail is
/// only reported when nothing longer matches.
pub fn partial_prefixes_of(tag: &str) -> impl DoubleEndedIterator<Item = &str> {
    tag.char_indices()
        .rev()
        .map(|(at, _)| &tag[..at])
        .filter(|prefix| !prefix.is_empty())
}

/// Byte length of the longest tail of `buffer` that is a proper prefix
/// of `tag`, or 0 when no tail could grow into the tag.
pub fn partial_suffix_len(buffer: &str, tag: &str) -> usize {
    partial_prefixes_of(tag)
        .find(|prefix| buffer.ends_with(prefix))
        .map_or(0, str::len)
}

/// Byte length of the longest tail of `buffer` that is a proper prefix
/// of any of `tags`.
pub fn longest_partial_suffix_len(buffer: &str, tags: &[&str]) -> usize {
    tags.iter()
        .map(|tag| partial_suffix_len(buffer, tag))
        .max()
        .unwrap_or(0)
}
