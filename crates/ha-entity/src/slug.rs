//! Entity ID generation from display names

/// Slug used when a name has no usable characters
const EMPTY_SLUG: &str = "unknown";

/// Convert a display name to an object_id slug
///
/// Lowercases ASCII letters, collapses every run of other characters into a
/// single underscore and strips leading/trailing underscores, so the result
/// is a valid object_id.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Entity ID the host would assign to a new entity with this name
pub fn suggested_entity_id(domain: &str, name: &str) -> String {
    format!("{}.{}", domain, slugify(name))
}
