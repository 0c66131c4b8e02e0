// src/render/html.rs
//
// HTML serialization of the views. Fragments mirror the host page the
// sheets were designed for:
//   #site-description  sidebar paragraphs
//   #entries           cards / glossary terms (container style inline)
//   #sidebar-buttons, #main-buttons  button groups

use crate::config::consts::{CHART_RADIUS_PX, GRID_STYLE, LIST_STYLE, PAGE_TITLE};
use crate::controller::{ButtonGroup, Controller};
use crate::core::markup::{anchor_html, escape_attr, escape_html};

use super::{Card, ChartFrame, GlossaryEntry, Layout, MainBody, MainView, SidebarView};

/// How button groups are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    /// Plain `<button>` elements; wiring is up to the host page.
    Buttons,
    /// Anchors linking to the pre-rendered site pages.
    SiteLinks,
}

pub fn layout_style(layout: Layout) -> &'static str {
    match layout {
        Layout::Grid => GRID_STYLE,
        Layout::List => LIST_STYLE,
    }
}

/// File name of a site page for one (sidebar, main) selection.
pub fn site_page_name(sidebar_key: &str, main_key: &str) -> String {
    format!("{}-{}.html", slug(sidebar_key), slug(main_key))
}

fn slug(key: &str) -> String {
    let out: String = key
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() { s!("_") } else { out }
}

/* ---------------- Sidebar ---------------- */

pub fn sidebar_html(view: &SidebarView) -> String {
    match view {
        SidebarView::Paragraphs(ps) => {
            let mut out = s!();
            for p in ps {
                w!(out, "<p>{}</p>", p.to_html());
            }
            out
        }
        SidebarView::NoContent => format!("<p>{}</p>", view.message().unwrap_or_default()),
    }
}

/* ---------------- Main panel ---------------- */

/// Inner HTML of the entries container.
pub fn main_html(view: &MainView) -> String {
    match &view.body {
        MainBody::Message(msg) => format!("<p>{}</p>", msg),
        MainBody::Cards(cards) => cards.iter().map(card_html).collect(),
        MainBody::Glossary(entries) => entries.iter().map(glossary_entry_html).collect(),
    }
}

/// Entries container including its layout style.
pub fn entries_html(view: &MainView) -> String {
    format!(
        r#"<div id="entries" style="{}">{}</div>"#,
        layout_style(view.layout),
        main_html(view)
    )
}

pub fn card_html(card: &Card) -> String {
    let mut out = s!();
    match card.width.class() {
        Some(class) => w!(out, r#"<div class="card {}">"#, class),
        None => out.push_str(r#"<div class="card">"#),
    }
    if let Some(img) = &card.image {
        w!(out, r#"<img src="{}" alt="">"#, escape_attr(img));
    }
    w!(out, "<h2>{}</h2>", card.title);
    w!(out, "<p>{}</p>", card.description.to_html());
    if let Some(src) = &card.source {
        w!(out, "<p>{}</p>", anchor_html(src, "Source"));
    }
    w!(out, "<small>{}</small>", card.tags);
    for frame in &card.charts {
        out.push_str(&chart_html(frame));
    }
    out.push_str("</div>");
    out
}

pub fn chart_html(frame: &ChartFrame) -> String {
    format!(
        r#"<div class="chart-wrapper"><iframe src="{}" width="{}" height="{}" frameborder="{}" scrolling="{}" style="border-radius: {}px;"></iframe></div>"#,
        escape_attr(&frame.src),
        ChartFrame::WIDTH,
        ChartFrame::HEIGHT,
        ChartFrame::BORDER,
        ChartFrame::SCROLLING,
        CHART_RADIUS_PX,
    )
}

/// Term and definition as plain text.
pub fn glossary_entry_html(entry: &GlossaryEntry) -> String {
    let class = if entry.expanded { "glossary-term expanded" } else { "glossary-term" };
    format!(
        r#"<div class="{}"><h3>{}</h3><p>{}</p></div>"#,
        class,
        escape_html(&entry.term),
        escape_html(&entry.definition)
    )
}

/* ---------------- Buttons & page ---------------- */

fn button_group_html(
    id: &str,
    attr: &str,
    group: &ButtonGroup,
    nav: Nav,
    href: impl Fn(&str) -> String,
) -> String {
    let mut out = format!(r#"<div id="{}">"#, id);
    for b in group.buttons() {
        let class = if b.is_active() { "active" } else { "inactive" };
        let key = escape_attr(&b.key);
        let label = escape_html(&b.label);
        match nav {
            Nav::Buttons => w!(out, r#"<button class="{}" data-{}="{}">{}</button>"#, class, attr, key, label),
            Nav::SiteLinks => w!(
                out,
                r#"<a class="button {}" data-{}="{}" href="{}">{}</a>"#,
                class, attr, key, escape_attr(&href(&b.key)), label
            ),
        }
    }
    out.push_str("</div>");
    out
}

fn active_key(group: &ButtonGroup) -> String {
    group
        .active_index()
        .and_then(|i| group.get(i))
        .map(|b| b.key.clone())
        .unwrap_or_default()
}

/// Complete document for the controller's current state.
pub fn page_html(ctrl: &Controller, nav: Nav) -> String {
    let cur_sidebar = active_key(ctrl.sidebar_buttons());
    let cur_main = active_key(ctrl.main_buttons());

    let sidebar_buttons = button_group_html(
        "sidebar-buttons",
        "section",
        ctrl.sidebar_buttons(),
        nav,
        |k| site_page_name(k, &cur_main),
    );
    let main_buttons = button_group_html(
        "main-buttons",
        "content",
        ctrl.main_buttons(),
        nav,
        |k| site_page_name(&cur_sidebar, k),
    );

    let mut out = s!("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    w!(out, "<title>{}</title>\n", escape_html(PAGE_TITLE));
    out.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n</head>\n<body>\n");
    w!(
        out,
        "<aside>\n{}\n<div id=\"site-description\">{}</div>\n</aside>\n",
        sidebar_buttons,
        sidebar_html(ctrl.sidebar())
    );
    w!(out, "<main>\n{}\n{}\n</main>\n", main_buttons, entries_html(ctrl.main()));
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CardWidth;
    use crate::core::Rich;

    fn bare_card() -> Card {
        Card {
            width: CardWidth::Auto,
            image: None,
            title: s!("T"),
            description: Rich::default(),
            source: None,
            tags: s!(),
            charts: Vec::new(),
        }
    }

    #[test]
    fn card_without_optional_parts() {
        assert_eq!(
            card_html(&bare_card()),
            r#"<div class="card"><h2>T</h2><p></p><small></small></div>"#
        );
    }

    #[test]
    fn card_with_all_parts_in_order() {
        let mut card = bare_card();
        card.width = CardWidth::Full;
        card.image = Some(s!("i.png"));
        card.source = Some(s!("https://s.example"));
        card.tags = s!("t1");
        card.charts = vec![ChartFrame { src: s!("c1") }];
        let html = card_html(&card);
        let order = ["card full-width", "<img src=\"i.png\"", "<h2>", "Source</a>", "<small>t1", "<iframe src=\"c1\""];
        let mut at = 0;
        for needle in order {
            let pos = html[at..].find(needle).map(|p| p + at);
            assert!(pos.is_some(), "missing or out of order: {needle}");
            at = pos.unwrap_or(at);
        }
    }

    #[test]
    fn glossary_text_is_escaped() {
        let e = GlossaryEntry { term: s!("<b>"), definition: s!("a & b"), expanded: true };
        assert_eq!(
            glossary_entry_html(&e),
            r#"<div class="glossary-term expanded"><h3>&lt;b&gt;</h3><p>a &amp; b</p></div>"#
        );
    }

    #[test]
    fn site_names_are_file_safe() {
        assert_eq!(site_page_name("About", "endlager"), "about-endlager.html");
        assert_eq!(site_page_name("a/b", ""), "a_b-_.html");
    }
}
