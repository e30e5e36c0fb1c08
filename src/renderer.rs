use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke};

use crate::geometry::{self, DashPattern, FLATTEN_TOLERANCE, Path};

/// Dash pattern of the selection highlight: 5 units on, 5 off.
pub const SELECTION_DASH: [f32; 2] = [5.0, 5.0];

/// What a renderer needs per paint pass. The renderer owns no shape state;
/// it queries, culls, and strokes.
pub trait ShapeDataSource {
    fn shape_count(&self) -> usize;
    fn path_at(&self, index: usize) -> &Path;
    fn color_at(&self, index: usize) -> Color32;
    fn selected_index(&self) -> Option<usize>;
}

/// Strokes shapes into an egui painter. Thin by design: all model state
/// lives behind the data source.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Strokes every shape whose stroke bounds intersect `clip`. The
    /// selected shape additionally gets its stroke outline, dashed in black.
    pub fn paint(&self, painter: &Painter, clip: Rect, source: &dyn ShapeDataSource) {
        let selected = source.selected_index();
        for index in 0..source.shape_count() {
            let path = source.path_at(index);
            if !clip.intersects(path.stroke_bounds()) {
                continue;
            }
            let stroke = EguiStroke::new(path.style().width, source.color_at(index));
            for contour in path.flatten(FLATTEN_TOLERANCE) {
                painter.add(egui::Shape::line(contour, stroke));
            }
            if selected == Some(index) {
                self.paint_selection(painter, path);
            }
        }
    }

    fn paint_selection(&self, painter: &Painter, path: &Path) {
        let style = path.style();
        let mut outline = geometry::stroke_outline(
            path,
            style.width,
            style.cap,
            style.join,
            style.miter_limit,
        );
        outline.style_mut().dash = Some(DashPattern {
            lengths: SELECTION_DASH.to_vec(),
            phase: 0.0,
        });
        let stroke = EguiStroke::new(1.0, Color32::BLACK);
        for contour in outline.flatten(FLATTEN_TOLERANCE) {
            painter.extend(dashed_contour(&contour, stroke));
        }
    }
}

fn dashed_contour(points: &[Pos2], stroke: EguiStroke) -> Vec<egui::Shape> {
    egui::Shape::dashed_line(points, stroke, SELECTION_DASH[0], SELECTION_DASH[1])
}
