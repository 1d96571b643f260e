use std::collections::{HashMap, HashSet};

/// The rendering target, addressed by selector strings.
///
/// The real page backs this with the DOM; headless use (and every test)
/// backs it with [`MemoryMount`]. A missing mount point is an ordinary
/// condition — callers check [`Mount::exists`] and skip the section with a
/// logged warning.
pub trait Mount {
    /// Whether a node matching `selector` is present.
    fn exists(&self, selector: &str) -> bool;

    /// Replace the contents of the node at `selector`.
    fn set_html(&mut self, selector: &str, html: &str);

    /// Flip the hidden state of the nodes matching `selector`.
    fn set_hidden(&mut self, selector: &str, hidden: bool);
}

/// In-memory mount: records fragments and hidden flags per selector.
#[derive(Debug, Default)]
pub struct MemoryMount {
    nodes: HashMap<String, String>,
    hidden: HashMap<String, bool>,
    missing: HashSet<String>,
}

impl MemoryMount {
    pub fn new() -> Self {
        MemoryMount::default()
    }

    /// Treat `selector` as absent from the page.
    pub fn mark_missing(&mut self, selector: &str) {
        self.missing.insert(selector.to_string());
    }

    pub fn html(&self, selector: &str) -> Option<&str> {
        self.nodes.get(selector).map(String::as_str)
    }

    pub fn is_hidden(&self, selector: &str) -> bool {
        self.hidden.get(selector).copied().unwrap_or(false)
    }
}

impl Mount for MemoryMount {
    fn exists(&self, selector: &str) -> bool {
        !self.missing.contains(selector)
    }

    fn set_html(&mut self, selector: &str, html: &str) {
        if self.missing.contains(selector) {
            return;
        }
        self.nodes.insert(selector.to_string(), html.to_string());
    }

    fn set_hidden(&mut self, selector: &str, hidden: bool) {
        if self.missing.contains(selector) {
            return;
        }
        self.hidden.insert(selector.to_string(), hidden);
    }
}
