//! Archive path helpers
//!
//! Archive paths always use `/`, whatever the host, so these work on plain
//! strings rather than `std::path`.

/// Directory part of an archive path, without a trailing slash.
///
/// A path with no directory yields the empty string.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[..pos],
        None => "",
    }
}

/// Join `href` onto `base` and clean the result.
///
/// Empty and `.` segments are dropped and `..` removes the preceding
/// segment. A `..` that climbs above the archive root is kept, so the
/// resulting path simply will not match any entry.
pub fn join(base: &str, href: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in base.split('/').chain(href.split('/')) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    segments.join("/")
}
