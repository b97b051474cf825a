use eframe::egui;
use tracing::info;

use crate::engine::brief_generator::generate_briefs_batch;
use crate::engine::error::GenError;
use crate::engine::llm_client::{resolve_credential, AnthropicClient, Credential};
use crate::engine::strategy_generator::propose_strategies;
use crate::model::guidelines;
use crate::model::presets::{DEFAULT_GUIDELINES, DEFAULT_TEMPLATE};
use crate::model::session::SessionState;
use crate::model::titles::TitleList;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;
use crate::ui::{center_panel, left_panel, right_panel};

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeftTab {
    #[default]
    Settings,
    Sources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightTab {
    #[default]
    Template,
    Briefs,
}

/* =========================
   Notices
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub api_key: String,
    pub connection_status: Option<String>,

    pub titles_file_name: Option<String>,
    pub file_rows: Vec<String>,
    pub manual_titles: String,

    pub guideline_file_name: Option<String>,
    pub guideline_file_text: String,
    pub manual_guidelines: String,

    pub template: String,

    // One flag per proposed title, same order.
    pub checked: Vec<bool>,
    pub progress: Option<(usize, usize)>,
    pub notice: Option<Notice>,

    pub left_tab: LeftTab,
    pub right_tab: RightTab,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            connection_status: None,

            titles_file_name: None,
            file_rows: Vec::new(),
            manual_titles: String::new(),

            guideline_file_name: None,
            guideline_file_text: String::new(),
            manual_guidelines: DEFAULT_GUIDELINES.to_string(),

            template: DEFAULT_TEMPLATE.to_string(),

            checked: Vec::new(),
            progress: None,
            notice: None,

            left_tab: LeftTab::default(),
            right_tab: RightTab::default(),
        }
    }
}

/* =========================
   App
   ========================= */

pub struct PlannerApp {
    pub ui: UiState,
    pub session: SessionState,
    pub settings: UiSettings,
}

impl PlannerApp {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            session: SessionState::default(),
            settings: settings_io::load_settings(),
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.ui.notice = Some(Notice {
            kind,
            text: text.into(),
        });
    }

    /// Current titles, merged and de-duplicated from both sources.
    pub fn normalized_titles(&self) -> TitleList {
        TitleList::normalize(&self.ui.file_rows, &self.ui.manual_titles)
    }

    /// Current guideline blob, uploaded document first.
    pub fn composed_guidelines(&self) -> String {
        guidelines::compose(&self.ui.guideline_file_text, &self.ui.manual_guidelines)
    }

    /// Resolves the credential and builds a client, or fails fast
    /// before any network attempt.
    fn backend_client(&mut self) -> Option<AnthropicClient> {
        match resolve_credential(&self.ui.api_key) {
            Credential::Resolved(key) => {
                Some(AnthropicClient::new(key, self.settings.model.clone()))
            }
            Credential::Unresolved => {
                self.notify(NoticeKind::Error, GenError::MissingCredential.to_string());
                None
            }
        }
    }

    /// Stage 1, fired from the Generate Titles button. Runs the whole
    /// pipeline synchronously; a failure leaves the previous batch in
    /// place.
    pub fn generate_titles(&mut self) {
        let Some(client) = self.backend_client() else {
            return;
        };

        let existing = self.normalized_titles();
        let guidelines = self.composed_guidelines();
        info!(existing = existing.len(), "proposing new titles");

        match propose_strategies(&client, &existing.joined(), &guidelines) {
            Ok(proposals) => {
                let count = proposals.len();
                if self.session.apply_proposals(proposals) {
                    self.ui.checked = vec![false; count];
                    self.ui.progress = None;
                    self.notify(NoticeKind::Info, format!("Proposed {count} new titles."));
                } else {
                    self.notify(
                        NoticeKind::Warn,
                        "The response contained no parseable titles; kept the previous batch.",
                    );
                }
            }
            Err(err) => {
                self.notify(NoticeKind::Error, format!("Title generation failed: {err}"));
            }
        }
    }

    /// Recomputes the selection from the checkbox flags.
    pub fn sync_selection(&mut self) {
        let selected: Vec<String> = self
            .session
            .proposed()
            .iter()
            .zip(self.ui.checked.iter())
            .filter(|(_, checked)| **checked)
            .map(|(title, _)| title.clone())
            .collect();
        self.session.set_selection(selected);
    }

    /// Stage 2, fired from the Generate Briefs button. Sequential,
    /// one title at a time; failed titles are skipped, not fatal.
    pub fn generate_briefs(&mut self) {
        let Some(client) = self.backend_client() else {
            return;
        };
        if self.session.selected().is_empty() {
            self.notify(NoticeKind::Warn, "Select at least one title first.");
            return;
        }

        let guidelines = self.composed_guidelines();
        let template = self.ui.template.clone();

        let progress = &mut self.ui.progress;
        let outcome = generate_briefs_batch(
            &client,
            &mut self.session,
            &guidelines,
            &template,
            |done, total| {
                *progress = Some((done, total));
            },
        );

        if outcome.failed.is_empty() {
            self.notify(
                NoticeKind::Info,
                format!("Generated {} briefs.", outcome.stored),
            );
        } else {
            self.notify(
                NoticeKind::Warn,
                format!(
                    "Generated {} of {} briefs; failed: {}.",
                    outcome.stored,
                    outcome.attempted,
                    outcome.failed.join(", ")
                ),
            );
        }
        self.ui.right_tab = RightTab::Briefs;
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        left_panel::draw_left_panel(ctx, self);
        right_panel::draw_right_panel(ctx, self);
        center_panel::draw_center_panel(ctx, self);
    }
}
