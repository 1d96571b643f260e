//! Page orchestration: loads and renders every section of the guide.
//!
//! Each section's load is independently triggered and independently caught,
//! so one broken content directory never blanks the rest of the page. A
//! missing mount point skips the section with a warning.

use log::{error, warn};

use crate::fetch::Fetch;
use crate::models::Sightseeing;
use crate::mount::Mount;
use crate::render::{
    render_category_card, render_dont_miss_rows, render_individual_cards, render_intro,
    render_must_try_rows, render_neighborhood_feature, render_sightseeing, RenderConfig,
};
use crate::sections::{self, SectionSpec, Strategy, CARD_SECTIONS, LIST_SECTIONS};
use crate::store::{load_directory, ContentService};
use crate::toggle::{ToggleController, UiEvent, ViewMode};

/// The whole guide page: content service, view state, render config.
pub struct Guide<F> {
    content: ContentService<F>,
    toggles: ToggleController,
    cfg: RenderConfig,
}

impl<F: Fetch> Guide<F> {
    pub fn new(fetch: F) -> Self {
        Self::with_config(fetch, RenderConfig::default())
    }

    pub fn with_config(fetch: F, cfg: RenderConfig) -> Self {
        Guide {
            content: ContentService::new(fetch),
            toggles: ToggleController::new(),
            cfg,
        }
    }

    pub fn content(&self) -> &ContentService<F> {
        &self.content
    }

    pub fn view_mode(&self, section_id: &str) -> Option<ViewMode> {
        self.toggles.mode(section_id)
    }

    /// Load and render every section of the page.
    pub async fn initialize<M: Mount>(&mut self, mount: &mut M) {
        self.init_intro(mount).await;
        self.init_sightseeing(mount).await;
        for spec in CARD_SECTIONS {
            self.init_card_section(spec, mount).await;
        }
        self.init_dont_miss(mount).await;
        self.init_must_try(mount).await;
        self.init_neighborhood_feature(mount).await;
        self.init_list_sections(mount).await;
    }

    /// Feed a UI event to the toggle controller. Purely a view-state
    /// change over already-loaded data; never fetches.
    pub fn handle_event<M: Mount>(&mut self, event: &UiEvent, mount: &mut M) {
        self.toggles.handle(event, &self.content, &self.cfg, mount);
    }

    async fn init_intro<M: Mount>(&self, mount: &mut M) {
        if !mount.exists(sections::INTRO_SELECTOR) {
            warn!("Intro container not found");
            return;
        }
        match self.content.fetcher().get_text(sections::INTRO_PATH).await {
            Ok(text) => mount.set_html(sections::INTRO_SELECTOR, &render_intro(&text)),
            Err(e) => error!("Error loading intro text: {}", e),
        }
    }

    async fn init_sightseeing<M: Mount>(&self, mount: &mut M) {
        if !mount.exists(sections::SIGHTSEEING_SELECTOR) {
            warn!("Sightseeing content container not found");
            return;
        }
        let value = match self
            .content
            .fetcher()
            .get_json(sections::SIGHTSEEING_PATH)
            .await
        {
            Ok(v) => v,
            Err(e) => {
                error!("Error loading sightseeing data: {}", e);
                return;
            }
        };
        match serde_json::from_value::<Sightseeing>(value) {
            Ok(data) => mount.set_html(sections::SIGHTSEEING_SELECTOR, &render_sightseeing(&data)),
            Err(e) => error!("Error loading sightseeing data: {}", e),
        }
    }

    async fn init_card_section<M: Mount>(&self, spec: &SectionSpec, mount: &mut M) {
        let selector = format!("#{} .cards-grid", spec.id);
        if !mount.exists(&selector) {
            warn!("Cards grid not found for section: {}", spec.id);
            return;
        }
        match load_directory(self.content.fetcher(), spec.data_path, spec.id).await {
            Ok(items) => {
                let html = match spec.strategy {
                    Strategy::CategoryCard { template, buckets } => {
                        render_category_card(&items, template, buckets)
                    }
                    Strategy::IndividualCard => render_individual_cards(&items),
                };
                mount.set_html(&selector, &html);
            }
            Err(e) => error!("Error loading cards for {}: {}", spec.id, e),
        }
    }

    async fn init_dont_miss<M: Mount>(&self, mount: &mut M) {
        if !mount.exists(sections::DONT_MISS_SELECTOR) {
            warn!("Dont-miss section container not found");
            return;
        }
        match load_directory(
            self.content.fetcher(),
            sections::DONT_MISS_PATH,
            "dont-miss",
        )
        .await
        {
            Ok(items) => mount.set_html(sections::DONT_MISS_SELECTOR, &render_dont_miss_rows(&items)),
            Err(e) => error!("Error loading dont-miss items: {}", e),
        }
    }

    async fn init_must_try<M: Mount>(&self, mount: &mut M) {
        if !mount.exists(sections::MUST_TRY_SELECTOR) {
            warn!("Must-try section container not found");
            return;
        }
        match load_directory(self.content.fetcher(), sections::MUST_TRY_PATH, "must-try").await {
            Ok(items) => mount.set_html(sections::MUST_TRY_SELECTOR, &render_must_try_rows(&items)),
            Err(e) => error!("Error loading must-try items: {}", e),
        }
    }

    async fn init_neighborhood_feature<M: Mount>(&self, mount: &mut M) {
        if !mount.exists(sections::NEIGHBORHOODS_SELECTOR) {
            warn!("Neighborhoods section container not found");
            return;
        }
        match load_directory(
            self.content.fetcher(),
            sections::NEIGHBORHOODS_PATH,
            "neighborhoods",
        )
        .await
        {
            Ok(items) => mount.set_html(
                sections::NEIGHBORHOODS_SELECTOR,
                &render_neighborhood_feature(&items),
            ),
            Err(e) => error!("Error loading neighborhoods: {}", e),
        }
    }

    async fn init_list_sections<M: Mount>(&mut self, mount: &mut M) {
        for spec in LIST_SECTIONS {
            if !mount.exists(spec.selector) {
                warn!("{} section container not found", spec.id);
                continue;
            }
            let items = self.content.items(spec.kind).await;
            self.toggles.refresh(spec.id, items, &self.cfg, mount);
        }
    }
}
