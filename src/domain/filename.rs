//! Deterministic report filenames derived from project titles.

const REPORT_SUFFIX: &str = "_Requirements_Report.html";

/// Derive the download filename for a report from its project title.
///
/// Every run of whitespace collapses to a single underscore, leading and
/// trailing runs included, and the fixed report suffix is appended.
pub fn report_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + REPORT_SUFFIX.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_whitespace() {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            name.push('_');
            pending_separator = false;
        }
        name.push(ch);
    }
    if pending_separator {
        name.push('_');
    }

    name.push_str(REPORT_SUFFIX);
    name
}
