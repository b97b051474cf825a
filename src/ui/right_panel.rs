use eframe::egui;
use std::fs;

use crate::io::export;
use crate::model::presets::DEFAULT_TEMPLATE;
use crate::ui::app::{NoticeKind, PlannerApp, RightTab};

pub fn draw_right_panel(ctx: &egui::Context, app: &mut PlannerApp) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(400.0)
        .min_width(300.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Template, "Template");
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Briefs, "Briefs");
            });

            ui.separator();

            match app.ui.right_tab {
                RightTab::Template => draw_template(ui, app),
                RightTab::Briefs => draw_briefs(ui, app),
            }
        });
}

fn draw_template(ui: &mut egui::Ui, app: &mut PlannerApp) {
    ui.label("Every brief is asked to follow this structure verbatim.");

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut app.ui.template)
                .desired_rows(24)
                .desired_width(f32::INFINITY),
        );

        if ui.button("Reset to default template").clicked() {
            app.ui.template = DEFAULT_TEMPLATE.to_string();
        }
    });
}

fn draw_briefs(ui: &mut egui::Ui, app: &mut PlannerApp) {
    if app.session.briefs().is_empty() {
        ui.label("Generated briefs will appear here.");
        return;
    }

    if ui.button("⬇ Export all as CSV").clicked() {
        export_all(app);
    }

    ui.add_space(6.0);

    let briefs: Vec<(String, String)> = app.session.briefs().to_vec();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (title, brief) in &briefs {
            ui.collapsing(title.clone(), |ui| {
                if ui.button("⬇ Save as markdown").clicked() {
                    save_one(app, title, brief);
                }
                ui.label(brief.clone());
            });
        }
    });
}

fn save_one(app: &mut PlannerApp, title: &str, brief: &str) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(export::brief_filename(title))
        .add_filter("Markdown", &["md"])
        .save_file()
    else {
        return;
    };

    match fs::write(&path, brief) {
        Ok(()) => app.notify(NoticeKind::Info, format!("Saved {}", path.display())),
        Err(err) => app.notify(NoticeKind::Error, format!("Could not save brief: {err}")),
    }
}

fn export_all(app: &mut PlannerApp) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name("content_briefs.csv")
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    let csv = export::briefs_csv(app.session.briefs());
    match fs::write(&path, csv) {
        Ok(()) => app.notify(NoticeKind::Info, format!("Exported {}", path.display())),
        Err(err) => app.notify(NoticeKind::Error, format!("Could not export CSV: {err}")),
    }
}
