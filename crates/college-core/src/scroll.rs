//! Same-page fragment link resolution for smooth scrolling

/// Id of the element a fragment link should scroll to.
///
/// Returns `None` when the link is not a `#fragment` link, points at another
/// page, or carries an empty fragment. The caller still has to look the id
/// up and do nothing when no element has it.
pub fn same_page_fragment<'a>(
    href: &'a str,
    link_path: &str,
    current_path: &str,
) -> Option<&'a str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || link_path != current_path {
        return None;
    }
    Some(id)
}
