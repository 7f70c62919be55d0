//! Normalises raw script text before it is scanned.

/// Trim the script and turn every TAB into a single SPACE.
pub fn preprocess(raw: &str) -> String {
    raw.trim().replace('\t', " ")
}
