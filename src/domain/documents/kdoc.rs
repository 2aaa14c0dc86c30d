use once_cell::sync::Lazy;
use regex::Regex;

/// Monotonic identifier embedded in a KDOC filename (`...--kdoc-<digits>-...`).
pub type DocumentId = u64;

/// Substring that marks a page as draft-only content.
pub const DRAFT_MARKER: &str = "_draft";

static KDOC_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--kdoc-(\d+)-").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub filename: String,
    pub id: DocumentId,
}

impl DocumentEntry {
    pub fn from_filename(filename: &str) -> Option<Self> {
        extract_id(filename).map(|id| DocumentEntry {
            filename: filename.to_string(),
            id,
        })
    }

    pub fn is_draft(&self) -> bool {
        is_draft(&self.filename)
    }

    /// Site-absolute link to the page.
    pub fn href(&self) -> String {
        format!("/{}", self.filename)
    }
}

/// Returns the embedded id, or `None` when the filename carries no
/// `--kdoc-<digits>-` infix (or the digits do not fit a `u64`).
pub fn extract_id(filename: &str) -> Option<DocumentId> {
    let caps = KDOC_ID_RE.captures(filename)?;
    caps.get(1)?.as_str().parse().ok()
}

pub fn is_draft(filename: &str) -> bool {
    filename.contains(DRAFT_MARKER)
}
