//! View-state machine for the toggle-enabled list sections.
//!
//! Two layers of toggling, neither of which touches the network: a
//! section-wide mode switch that re-renders the whole list from the cached
//! items, and a per-category inline toggle that flips visibility of the
//! pre-rendered non-top-pick tail of one category without re-rendering.

use std::collections::HashSet;

use log::warn;

use crate::grouping::group_by_category;
use crate::models::Item;
use crate::mount::Mount;
use crate::render::{render_grouped_list, RenderConfig};
use crate::sections::{ListSectionSpec, LIST_SECTIONS};
use crate::store::ContentService;

/// What a list section is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    All,
    TopPicksOnly,
}

/// UI events the controller subscribes to. The embedding page translates
/// raw DOM clicks into these, carrying the section and category the
/// clicked control was rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Switch a whole section between all items and top picks only.
    SetMode { section: String, mode: ViewMode },
    /// Show/hide the non-top-pick tail of one category in a section.
    ToggleCategory { section: String, label: String },
}

#[derive(Debug)]
struct SectionView {
    spec: &'static ListSectionSpec,
    mode: ViewMode,
    /// Categories whose tail is currently hidden.
    collapsed: HashSet<String>,
}

/// Per-section view state for every toggle-enabled section on the page.
#[derive(Debug)]
pub struct ToggleController {
    sections: Vec<SectionView>,
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleController {
    /// Every section starts in [`ViewMode::All`] with all tails visible.
    pub fn new() -> Self {
        ToggleController {
            sections: LIST_SECTIONS
                .iter()
                .map(|spec| SectionView {
                    spec,
                    mode: ViewMode::All,
                    collapsed: HashSet::new(),
                })
                .collect(),
        }
    }

    pub fn mode(&self, section_id: &str) -> Option<ViewMode> {
        self.sections
            .iter()
            .find(|v| v.spec.id == section_id)
            .map(|v| v.mode)
    }

    pub fn handle<F, M: Mount>(
        &mut self,
        event: &UiEvent,
        content: &ContentService<F>,
        cfg: &RenderConfig,
        mount: &mut M,
    ) {
        match event {
            UiEvent::SetMode { section, mode } => {
                self.set_mode(section, *mode, content, cfg, mount)
            }
            UiEvent::ToggleCategory { section, label } => {
                self.toggle_category(section, label, mount)
            }
        }
    }

    /// Render a section into its mount with the current view state.
    /// Used for the initial render and internally after a mode switch.
    pub fn refresh<M: Mount>(
        &self,
        section_id: &str,
        items: &[Item],
        cfg: &RenderConfig,
        mount: &mut M,
    ) {
        match self.sections.iter().find(|v| v.spec.id == section_id) {
            Some(view) => Self::render_into(view, items, cfg, mount),
            None => warn!("No toggle-enabled section named {}", section_id),
        }
    }

    fn set_mode<F, M: Mount>(
        &mut self,
        section: &str,
        mode: ViewMode,
        content: &ContentService<F>,
        cfg: &RenderConfig,
        mount: &mut M,
    ) {
        let Some(idx) = self.sections.iter().position(|v| v.spec.id == section) else {
            warn!("No toggle-enabled section named {}", section);
            return;
        };
        if self.sections[idx].mode == mode {
            return;
        }
        self.sections[idx].mode = mode;

        let view = &self.sections[idx];
        let Some(items) = content.cached(view.spec.kind) else {
            warn!("Content for {} not loaded yet; ignoring mode switch", section);
            return;
        };
        Self::render_into(view, items, cfg, mount);
    }

    fn toggle_category<M: Mount>(&mut self, section: &str, label: &str, mount: &mut M) {
        let Some(view) = self.sections.iter_mut().find(|v| v.spec.id == section) else {
            warn!("No toggle-enabled section named {}", section);
            return;
        };
        if view.mode != ViewMode::All {
            // Top-picks-only view has no tail nodes to flip.
            return;
        }

        let selector = format!(
            "{} .list-grid__extra[data-category=\"{}\"]",
            view.spec.selector, label
        );
        if !mount.exists(&selector) {
            warn!("No collapsible tail for category {} in {}", label, section);
            return;
        }

        let hidden = if view.collapsed.remove(label) {
            false
        } else {
            view.collapsed.insert(label.to_string());
            true
        };
        mount.set_hidden(&selector, hidden);
    }

    fn render_into<M: Mount>(view: &SectionView, items: &[Item], cfg: &RenderConfig, mount: &mut M) {
        if !mount.exists(view.spec.selector) {
            warn!("{} section container not found", view.spec.id);
            return;
        }
        let groups = group_by_category(items);
        let html = render_grouped_list(&groups, view.mode, &view.collapsed, cfg);
        mount.set_html(view.spec.selector, &html);
    }
}
