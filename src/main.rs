#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Shape Board"),
        ..Default::default()
    };
    eframe::run_native(
        "shape-board",
        native_options,
        Box::new(|cc| Ok(Box::new(shape_board::ShapeBoardApp::new(cc)))),
    )
}
