use eframe::egui;

use crate::model::session::WorkflowStage;
use crate::ui::app::{NoticeKind, PlannerApp};

pub fn draw_center_panel(ctx: &egui::Context, app: &mut PlannerApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Content Strategy Planner");
        ui.label(stage_line(app));

        draw_notice(ui, app);
        ui.separator();

        if ui.button("✨ Generate title proposals").clicked() {
            app.generate_titles();
        }

        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            draw_proposals(ui, app);
            draw_batch_controls(ui, app);
        });
    });
}

fn stage_line(app: &PlannerApp) -> String {
    let stage = match app.session.stage() {
        WorkflowStage::Idle => "no proposals yet",
        WorkflowStage::Proposed => "proposals ready, pick some",
        WorkflowStage::Selected => "selection made, generate briefs",
        WorkflowStage::Briefed => "briefs ready",
    };
    format!(
        "{} existing titles · {} proposed · {} selected · {} briefs — {}",
        app.normalized_titles().len(),
        app.session.proposed().len(),
        app.session.selected().len(),
        app.session.briefs().len(),
        stage
    )
}

fn draw_notice(ui: &mut egui::Ui, app: &mut PlannerApp) {
    let Some(notice) = app.ui.notice.clone() else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => egui::Color32::DARK_GREEN,
        NoticeKind::Warn => egui::Color32::from_rgb(180, 120, 0),
        NoticeKind::Error => egui::Color32::DARK_RED,
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(notice.text).color(color));
        if ui.small_button("✖").clicked() {
            app.ui.notice = None;
        }
    });
}

fn draw_proposals(ui: &mut egui::Ui, app: &mut PlannerApp) {
    if app.session.proposed().is_empty() {
        ui.label("Proposed titles will appear here.");
        return;
    }

    ui.heading("Proposed Titles");

    let proposed: Vec<String> = app.session.proposed().to_vec();
    let mut changed = false;

    for (i, title) in proposed.iter().enumerate() {
        if let Some(flag) = app.ui.checked.get_mut(i) {
            let has_brief = app.session.brief_for(title).is_some();
            let label = if has_brief {
                format!("{title}  📄")
            } else {
                title.clone()
            };
            if ui.checkbox(flag, label).changed() {
                changed = true;
            }
        }
    }

    if changed {
        app.sync_selection();
    }
}

fn draw_batch_controls(ui: &mut egui::Ui, app: &mut PlannerApp) {
    if app.session.proposed().is_empty() {
        return;
    }

    ui.add_space(8.0);

    let selected = app.session.selected().len();
    let button = egui::Button::new(format!("📝 Generate briefs ({selected} selected)"));
    if ui.add_enabled(selected > 0, button).clicked() {
        app.generate_briefs();
    }

    if let Some((done, total)) = app.ui.progress {
        if total > 0 {
            ui.add(
                egui::ProgressBar::new(done as f32 / total as f32)
                    .text(format!("{done}/{total} attempted")),
            );
        }
    }
}
