mod engine;
mod io;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Content Strategy Planner",
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::PlannerApp::new()))),
    )
}
