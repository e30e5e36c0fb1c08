use egui::{Rect, Sense, Vec2};
use rand::rngs::ThreadRng;

use crate::document::Document;
use crate::geometry;
use crate::input::{self, InputEvent};
use crate::renderer::Renderer;

/// Margin kept between the canvas edge and newly generated shapes.
const ADD_MARGIN: f32 = 10.0;

/// Thin eframe shell: a toolbar, a canvas, and the wiring that turns egui
/// responses into core input events. All model behavior lives in `Document`.
pub struct ShapeBoardApp {
    document: Document,
    renderer: Renderer,
    rng: ThreadRng,
    canvas_rect: Rect,
}

impl ShapeBoardApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            document: Document::new(),
            renderer: Renderer::new(),
            rng: rand::rng(),
            canvas_rect: Rect::NOTHING,
        }
    }

    fn handle(&mut self, ctx: &egui::Context, event: InputEvent) {
        let dirty = input::dispatch(&mut self.document, &mut self.rng, event);
        if dirty != Rect::NOTHING {
            // egui repaints whole frames; any non-empty dirty rect asks for one.
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ShapeBoardApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending: Vec<InputEvent> = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_add = self.canvas_rect != Rect::NOTHING;
                if ui
                    .add_enabled(can_add, egui::Button::new("Add shape"))
                    .clicked()
                {
                    pending.push(InputEvent::AddRequested(geometry::inset(
                        self.canvas_rect,
                        ADD_MARGIN,
                        ADD_MARGIN,
                    )));
                }
                let has_selection = self.document.selected_index().is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete shape"))
                    .clicked()
                {
                    pending.push(InputEvent::DeleteRequested);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            self.canvas_rect = response.rect;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    pending.push(InputEvent::Tap(pos));
                }
            }
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    pending.push(InputEvent::DragStart(pos));
                }
            }
            if response.dragged() && response.drag_delta() != Vec2::ZERO {
                pending.push(InputEvent::DragMove(response.drag_delta()));
            }

            // Apply this frame's events before painting so the frame shows
            // their result.
            for event in pending.drain(..) {
                self.handle(ctx, event);
            }

            self.renderer.paint(&painter, response.rect, &self.document);
        });
    }
}
