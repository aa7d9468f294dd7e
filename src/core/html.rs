// src/core/html.rs
//
// Naive, case-insensitive HTML scanning. Lowercasing is ASCII-only so byte
// offsets found in the lowercased copy are valid in the input.

pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// HTML between the end of the opening tag matching `open_pat` and the next `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Byte range `(start, end)` of the next `<o ...> ... c` block at or after `from`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// The opening tag of a block, `<...>` inclusive.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of attribute `name` in an opening tag; single, double or no quotes.
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = format!("{}=", to_lower(name));
    let mut from = 0usize;
    loop {
        let at = lc[from..].find(&needle)? + from;
        // Must start an attribute, not end one (`data-title=` vs `title=`).
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        let vstart = at + needle.len();
        if !boundary {
            from = vstart;
            continue;
        }
        let rest = &tag[vstart..];
        let value = match rest.chars().next()? {
            q @ ('"' | '\'') => {
                let body = &rest[1..];
                &body[..body.find(q)?]
            }
            _ => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                rest[..end].trim_end_matches('/')
            }
        };
        return Some(value.to_string());
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_quotes_and_boundaries() {
        let tag = r#"<a data-title="nope" href='page-2.html' title="It's Only the Himalayas">"#;
        assert_eq!(attr_value(tag, "title").as_deref(), Some("It's Only the Himalayas"));
        assert_eq!(attr_value(tag, "href").as_deref(), Some("page-2.html"));
        assert_eq!(attr_value("<a href=x.html>", "HREF").as_deref(), Some("x.html"));
        assert_eq!(attr_value("<a>", "href"), None);
    }

    #[test]
    fn blocks_are_found_case_insensitively() {
        let doc = "<UL><LI class=x>one</LI><li class=x>two</li></UL>";
        let (s1, e1) = next_tag_block_ci(doc, "<li", "</li>", 0).unwrap();
        assert_eq!(strip_tags(&doc[s1..e1]), "one");
        let (s2, e2) = next_tag_block_ci(doc, "<li", "</li>", e1).unwrap();
        assert_eq!(inner_after_open_tag(&doc[s2..e2]), "two");
    }
}
