// src/core/markup.rs
//
// Rich text as it comes out of the sheets: verbatim runs (may carry markup
// the sheet author typed), plain runs (escaped on output) and links.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Passed through as-is when written as HTML.
    Raw(String),
    /// Escaped when written as HTML.
    Text(String),
    /// Anchor opened in a new browsing context.
    Link { label: String, href: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rich(pub Vec<Inline>);

impl Rich {
    pub fn raw(s: &str) -> Self {
        if s.is_empty() { Rich::default() } else { Rich(vec![Inline::Raw(s!(s))]) }
    }

    pub fn text(s: &str) -> Self {
        if s.is_empty() { Rich::default() } else { Rich(vec![Inline::Text(s!(s))]) }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|i| match i {
            Inline::Raw(s) | Inline::Text(s) => s.is_empty(),
            Inline::Link { .. } => false,
        })
    }

    pub fn segments(&self) -> &[Inline] { &self.0 }

    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|i| match i {
            Inline::Link { label, href } => Some((label.as_str(), href.as_str())),
            _ => None,
        })
    }

    /// Plain-text rendering (link labels only, no markup).
    pub fn plain(&self) -> String {
        let mut out = s!();
        for i in &self.0 {
            match i {
                Inline::Raw(s) | Inline::Text(s) => out.push_str(s),
                Inline::Link { label, .. } => out.push_str(label),
            }
        }
        out
    }

    /// Split into lines on `\n` / `\r\n`. Links are never split.
    pub fn lines(&self) -> Vec<Rich> {
        let mut lines = vec![Rich::default()];
        for seg in &self.0 {
            let (text, raw) = match seg {
                Inline::Raw(s) => (s, true),
                Inline::Text(s) => (s, false),
                Inline::Link { .. } => {
                    if let Some(cur) = lines.last_mut() { cur.0.push(seg.clone()); }
                    continue;
                }
            };
            for (n, part) in text.split('\n').enumerate() {
                if n > 0 { lines.push(Rich::default()); }
                let part = part.strip_suffix('\r').unwrap_or(part);
                if part.is_empty() { continue; }
                let piece = if raw { Inline::Raw(s!(part)) } else { Inline::Text(s!(part)) };
                if let Some(cur) = lines.last_mut() { cur.0.push(piece); }
            }
        }
        lines
    }

    pub fn to_html(&self) -> String {
        let mut out = s!();
        for i in &self.0 {
            match i {
                Inline::Raw(s) => out.push_str(s),
                Inline::Text(s) => out.push_str(&escape_html(s)),
                Inline::Link { label, href } => out.push_str(&anchor_html(href, label)),
            }
        }
        out
    }
}

/// Replace every literal occurrence of `link_text` in `text` with a link to
/// `link_url`. Case-sensitive plain substring match; not word-bounded.
///
/// Empty `text` gives empty output. A missing (or empty) label or URL leaves
/// the text untouched.
pub fn inject_link(text: &str, link_text: Option<&str>, link_url: Option<&str>) -> Rich {
    if text.is_empty() {
        return Rich::default();
    }
    let (label, href) = match (link_text, link_url) {
        (Some(l), Some(u)) if !l.is_empty() && !u.is_empty() => (l, u),
        _ => return Rich::raw(text),
    };

    let mut out = Vec::new();
    let mut last = 0usize;
    for (at, _) in text.match_indices(label) {
        if at > last {
            out.push(Inline::Raw(s!(&text[last..at])));
        }
        out.push(Inline::Link { label: s!(label), href: s!(href) });
        last = at + label.len();
    }
    if last < text.len() {
        out.push(Inline::Raw(s!(&text[last..])));
    }
    Rich(out)
}

/// Drop `<...>` tags and decode the two entities sheets commonly carry.
/// Whitespace is left alone so adjacent runs still join up.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn anchor_html(href: &str, label: &str) -> String {
    format!(r#"<a href="{}" target="_blank">{}</a>"#, escape_attr(href), label)
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_html(s)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
