use regex::Regex;
use std::sync::OnceLock;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("slug separator pattern is valid"))
}

/// Lowercase ASCII slug; runs of anything else collapse into one hyphen.
/// Returns an empty string when nothing URL-safe is left (e.g. Cyrillic titles).
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    separators()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
