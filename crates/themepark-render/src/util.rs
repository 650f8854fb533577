//! Name helpers shared by the theme and template registries.

/// Splits a recognized extension off `file_name`.
///
/// Returns the base name and the index of the matched extension in
/// `extensions`, or `None` if the name carries none of them.
pub(crate) fn split_extension<'a>(
    file_name: &'a str,
    extensions: &[&str],
) -> Option<(&'a str, usize)> {
    extensions
        .iter()
        .enumerate()
        .find_map(|(priority, ext)| {
            file_name
                .strip_suffix(ext)
                .filter(|base| !base.is_empty())
                .map(|base| (base, priority))
        })
}

/// Returns `name` with any recognized extension removed.
pub(crate) fn base_name<'a>(name: &'a str, extensions: &[&str]) -> &'a str {
    split_extension(name, extensions)
        .map(|(base, _)| base)
        .unwrap_or(name)
}
