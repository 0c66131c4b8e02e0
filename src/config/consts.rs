// src/config/consts.rs

// Published sheets (key, url), in load order
const SHEET_BASE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQHaHBI3grXpyBaMf14WmFMgQLHYM7v11WJrakibIAxS6rV5TkQuNftofVrAllAcsCA3DYvliBxXXm_/pub";
pub const DEFAULT_SHEETS: &[(&str, &str)] = &[
    ("main",     "gid=0"),
    ("endlager", "gid=401520953"),
    ("stories",  "gid=121198193"),
    ("zeit",     "gid=1491121691"),
    ("gefahr",   "gid=100273412"),
    ("glossary", "gid=1101912794"),
];

pub fn sheet_url(gid_query: &str) -> String {
    format!("{SHEET_BASE}?{gid_query}&single=true&output=csv")
}

// Config / log files
pub const DEFAULT_FEEDS_FILE: &str = "feeds.cfg";
pub const LOG_FILE: &str = ".sheetfolio/debug.log";

// Net
pub const USER_AGENT: &str = concat!("sheetfolio/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_PAGE_FILE: &str = "index.html";
pub const PAGE_TITLE: &str = "Endlager";

// Columns: main feed
pub const COL_SECTION: &str = "Section";
pub const COL_DESCRIPTION: &str = "Beschreibung";
pub const COL_LINK_TEXT: &str = "Link Text";
pub const COL_LINK_URL: &str = "Link URL";

// Columns: glossary feed
pub const COL_TERM: &str = "Begriff";
pub const COL_DEFINITION: &str = "Definition";

// Columns: section feeds (plus description/link columns above)
pub const COL_DISPLAY: &str = "Display";
pub const COL_IMAGE: &str = "Image URL";
pub const COL_TITLE: &str = "Title";
pub const COL_SOURCE: &str = "Source Link";
pub const COL_CHART: &str = "Chart Embed";
pub const COL_TAGS: &str = "Tags";

// Fixed messages
pub const NO_CONTENT: &str = "No content available.";
pub const NO_GLOSSARY: &str = "No glossary terms available.";

// Button groups (label, key)
pub const SIDEBAR_BUTTONS: &[(&str, &str)] = &[
    ("About",  "about"),
    ("Method", "method"),
];
pub const MAIN_BUTTONS: &[(&str, &str)] = &[
    ("Endlager", "endlager"),
    ("Stories",  "stories"),
    ("Zeit",     "zeit"),
    ("Gefahr",   "gefahr"),
    ("Glossar",  "glossary"),
];

// Initial selection
pub const DEFAULT_SIDEBAR_KEY: &str = "about";
pub const DEFAULT_MAIN_KEY: &str = "endlager";

// Card layout
pub const CHART_HEIGHT: u32 = 400;
pub const CHART_RADIUS_PX: u32 = 8;
pub const CARD_MIN_WIDTH: f32 = 260.0;
pub const GRID_STYLE: &str = "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem;";
pub const LIST_STYLE: &str = "display: flex; flex-direction: column; gap: 1rem;";
