// src/core/sanitize.rs
use crate::model::Price;

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&pound;", "£")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "£51.77", "Â£51.77" (mis-decoded UTF-8), "$ 9.5" → price.
/// Keeps digits and the decimal point, drops everything else.
pub fn parse_price_text(s: &str) -> Option<Price> {
    let kept: String = normalize_entities(s)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !kept.chars().any(|c| c.is_ascii_digit()) { return None; }
    Price::parse(&kept)
}

/// Case-insensitive substring test used by scraper-side keyword filtering.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_text_variants() {
        assert_eq!(parse_price_text("£51.77"), Some(Price::new(51, 77)));
        assert_eq!(parse_price_text("Â£51.77"), Some(Price::new(51, 77)));
        assert_eq!(parse_price_text(" $ 9.5 "), Some(Price::new(9, 50)));
        assert_eq!(parse_price_text("&pound;10.00"), Some(Price::new(10, 0)));
        assert_eq!(parse_price_text("free"), None);
    }

    #[test]
    fn entities_and_whitespace() {
        assert_eq!(normalize_ws(&normalize_entities("  Tom&nbsp;&amp;\n Jerry ")), "Tom & Jerry");
    }
}
