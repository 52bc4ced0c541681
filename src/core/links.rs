// src/core/links.rs

/// Id from a detail link such as `https://www.wowhead.com/classic/item=215/soul-of-x`.
///
/// Takes the last path segment of the form `<kind>=<digits>`, so trailing slugs,
/// a missing slug, query strings and fragments are all fine. Zero is not an id.
pub fn id_from_link(href: &str) -> Option<u32> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.rsplit('/')
        .filter_map(|seg| seg.split_once('=').map(|(_, v)| v))
        .next()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|&id| id > 0)
}
