// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

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

/// Value of `name=` inside an open tag, quotes optional.
pub fn tag_attr(block: &str, name: &str) -> Option<String> {
    let open_end = block.find('>')?;
    let open = &block[..open_end];
    let lc = to_lower(open);
    let key = join!(to_lower(name), "=");
    let at = lc.find(&key)? + key.len();
    let rest = &open[at..];

    let val = if let Some(stripped) = rest.strip_prefix('"') {
        &stripped[..stripped.find('"')?]
    } else if let Some(stripped) = rest.strip_prefix('\'') {
        &stripped[..stripped.find('\'')?]
    } else {
        rest.split_whitespace().next().unwrap_or("")
    };
    if val.is_empty() { None } else { Some(val.to_string()) }
}

/// Drop tags, keep text layout intact (no whitespace collapsing — the result
/// text is positional).
pub fn strip_tags_keep_layout<S: AsRef<str>>(s: S) -> String {
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
    out
}

/// Extract the preformatted result text of an event page: the inner text of
/// the first `<pre>` block with line breaks preserved and entities decoded.
pub fn pre_text(doc: &str) -> Option<String> {
    let (s, e) = next_tag_block_ci(doc, "<pre", "</pre>", 0)?;
    let inner = inner_after_open_tag(&doc[s..e]);
    let text = strip_tags_keep_layout(inner);
    Some(super::sanitize::normalize_entities(&text))
}
