use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Present once the navigation block has been added to a page.
pub const NAVIGATION_MARKER: &str = r#"id="navigation-buttons""#;
const THREE_MARKER: &str = "three@0.170.0";

const IMPORTMAP_SCRIPT: &str = r#"<script type="importmap">
{
  "imports": {
    "three": "https://cdn.jsdelivr.net/npm/three@0.170.0/build/three.module.js",
    "three/addons/": "https://cdn.jsdelivr.net/npm/three@0.170.0/examples/jsm/"
  }
}
</script>
<script type="module" src="/js/drum-scroll.js"></script>"#;

const NAVIGATION_BLOCK: &str = r#"<div id="navigation-buttons">
  <button id="nav-prev" type="button">Prev</button>
  <button id="nav-random" type="button">Random</button>
  <button id="nav-next" type="button">Next</button>
  <label><input id="draft-only-toggle" type="checkbox" /> Drafts only</label>
</div>
<script src="/js/navigation.js"></script>
"#;

// `<head>` or `<head attr=...>`, but not `<header>`.
static HEAD_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<head(?:\s[^>]*)?>").expect("valid regex"));
static BODY_CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</body\s*>").expect("valid regex"));

/// Adds the Three.js import map and the navigation controls to a page.
/// Pages that already carry the navigation block are returned untouched.
pub fn inject_navigation(html: &str) -> Cow<'_, str> {
    if html.contains(NAVIGATION_MARKER) {
        return Cow::Borrowed(html);
    }

    let mut page = if html.contains(THREE_MARKER) {
        html.to_string()
    } else {
        insert_after_head(html)
    };

    match BODY_CLOSE_RE.find_iter(&page).last().map(|m| m.start()) {
        Some(at) => page.insert_str(at, NAVIGATION_BLOCK),
        None => page.push_str(NAVIGATION_BLOCK),
    }
    Cow::Owned(page)
}

fn insert_after_head(html: &str) -> String {
    match HEAD_OPEN_RE.find(html) {
        Some(m) => {
            let mut out = String::with_capacity(html.len() + IMPORTMAP_SCRIPT.len() + 1);
            out.push_str(&html[..m.end()]);
            out.push('\n');
            out.push_str(IMPORTMAP_SCRIPT);
            out.push_str(&html[m.end()..]);
            out
        }
        None => html.to_string(),
    }
}
