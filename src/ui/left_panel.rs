use eframe::egui;
use std::path::Path;

use crate::engine::llm_client::{self, resolve_credential, Credential};
use crate::io::ingest;
use crate::model::presets::DEFAULT_GUIDELINES;
use crate::ui::app::{LeftTab, NoticeKind, PlannerApp};
use crate::ui::settings_io;

pub fn draw_left_panel(ctx: &egui::Context, app: &mut PlannerApp) {
    egui::SidePanel::left("left")
        .resizable(true)
        .default_width(300.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.ui.left_tab, LeftTab::Settings, "Settings");
                ui.selectable_value(&mut app.ui.left_tab, LeftTab::Sources, "Source Data");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match app.ui.left_tab {
                LeftTab::Settings => draw_settings(ui, app),
                LeftTab::Sources => draw_sources(ui, app),
            });
        });
}

fn draw_settings(ui: &mut egui::Ui, app: &mut PlannerApp) {
    ui.heading("Backend");

    ui.label("API key");
    ui.add(
        egui::TextEdit::singleline(&mut app.ui.api_key)
            .password(true)
            .hint_text("sk-ant-... (falls back to ANTHROPIC_API_KEY)"),
    );

    ui.label("Model");
    if ui.text_edit_singleline(&mut app.settings.model).changed() {
        settings_io::save_settings(&app.settings);
    }

    if ui.button("Test connection").clicked() {
        match resolve_credential(&app.ui.api_key) {
            Credential::Resolved(key) => match llm_client::test_connection(&key) {
                Ok(msg) => app.ui.connection_status = Some(msg),
                Err(err) => app.ui.connection_status = Some(format!("Failed: {err}")),
            },
            Credential::Unresolved => {
                app.ui.connection_status = Some("No API key configured.".to_string());
            }
        }
    }
    if let Some(status) = &app.ui.connection_status {
        ui.label(status.clone());
    }

    ui.separator();
    ui.heading("Display");

    ui.label("UI Scale");
    if ui
        .add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0))
        .changed()
    {
        settings_io::save_settings(&app.settings);
    }
}

fn draw_sources(ui: &mut egui::Ui, app: &mut PlannerApp) {
    ui.heading("Existing Titles");

    ui.horizontal(|ui| {
        if ui.button("Load file…").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Title tables", &["csv", "tsv", "txt"])
                .pick_file()
            {
                load_titles_file(app, &path);
            }
        }
        if app.ui.titles_file_name.is_some() && ui.small_button("❌").clicked() {
            app.ui.titles_file_name = None;
            app.ui.file_rows.clear();
        }
    });
    match &app.ui.titles_file_name {
        Some(name) => {
            ui.label(format!("{} ({} rows)", name, app.ui.file_rows.len()));
        }
        None => {
            ui.label("No file loaded.");
        }
    }

    ui.add_space(6.0);
    ui.label("Manual titles (one per line)");
    ui.add(
        egui::TextEdit::multiline(&mut app.ui.manual_titles)
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );
    ui.label(format!(
        "{} unique titles after merge",
        app.normalized_titles().len()
    ));

    ui.separator();
    ui.heading("Guidelines");

    ui.horizontal(|ui| {
        if ui.button("Load document…").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Guideline documents", &["txt", "md"])
                .pick_file()
            {
                load_guidelines_file(app, &path);
            }
        }
        if app.ui.guideline_file_name.is_some() && ui.small_button("❌").clicked() {
            app.ui.guideline_file_name = None;
            app.ui.guideline_file_text.clear();
        }
    });
    if let Some(name) = &app.ui.guideline_file_name {
        ui.label(name.clone());
    }

    ui.add_space(6.0);
    ui.label("Edit guidelines");
    ui.add(
        egui::TextEdit::multiline(&mut app.ui.manual_guidelines)
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );

    if ui.button("Reset to default guidelines").clicked() {
        app.ui.manual_guidelines = DEFAULT_GUIDELINES.to_string();
    }
}

fn load_titles_file(app: &mut PlannerApp, path: &Path) {
    let name = file_name_of(path);
    match ingest::load_title_rows(path) {
        Ok(rows) => {
            let count = rows.len();
            app.ui.file_rows = rows;
            app.ui.titles_file_name = Some(name);
            app.notify(NoticeKind::Info, format!("Loaded {count} title rows."));
        }
        Err(err) => {
            app.ui.file_rows.clear();
            app.ui.titles_file_name = None;
            app.notify(
                NoticeKind::Warn,
                format!("Could not read {name}: {err}. Continuing with manual titles only."),
            );
        }
    }
}

fn load_guidelines_file(app: &mut PlannerApp, path: &Path) {
    let name = file_name_of(path);
    match ingest::load_guideline_text(path) {
        Ok(text) => {
            app.ui.guideline_file_text = text;
            app.ui.guideline_file_name = Some(name);
        }
        Err(err) => {
            app.ui.guideline_file_text.clear();
            app.ui.guideline_file_name = None;
            app.notify(
                NoticeKind::Warn,
                format!("Could not read {name}: {err}. Continuing with edited guidelines only."),
            );
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
