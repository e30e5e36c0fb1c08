use egui::{Color32, Pos2, Rect, Vec2};
use log::{debug, warn};

use crate::geometry::Path;
use crate::renderer::ShapeDataSource;
use crate::shape::Shape;

/// Ordered collection of shapes plus the selection state machine.
///
/// Insertion order is z-order is draw order; later shapes draw on top.
/// Every mutation returns the dirty rectangle a renderer must repaint,
/// `Rect::NOTHING` when nothing changed. Callers merge dirty rects by union
/// into one paint pass.
#[derive(Default)]
pub struct Document {
    shapes: Vec<Shape>,
    selected: Option<usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape_at(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    /// Moves the selection. An out-of-range index is clamped to no selection,
    /// never an error. Returns the union of the old and new selection bounds.
    pub fn select(&mut self, index: Option<usize>) -> Rect {
        let new = match index {
            Some(i) if i < self.shapes.len() => Some(i),
            Some(i) => {
                warn!(
                    "select index {i} out of range ({} shapes), clearing selection",
                    self.shapes.len()
                );
                None
            }
            None => None,
        };
        let old_bounds = self.selection_bounds();
        self.selected = new;
        debug!("selection -> {:?}", self.selected);
        old_bounds.union(self.selection_bounds())
    }

    /// Appends a shape; it becomes the topmost in draw order.
    pub fn add_shape(&mut self, shape: Shape) -> Rect {
        let dirty = shape.total_bounds();
        debug!("add shape {}", shape.id());
        self.shapes.push(shape);
        dirty
    }

    /// Removes the shape at `index`; out-of-range is a logged no-op. Removing
    /// the selected shape clears the selection; a selection above the removed
    /// index shifts down so it keeps tracking the same shape.
    pub fn remove_shape(&mut self, index: usize) -> Rect {
        if index >= self.shapes.len() {
            warn!(
                "remove index {index} out of range ({} shapes)",
                self.shapes.len()
            );
            return Rect::NOTHING;
        }
        let removed = self.shapes.remove(index);
        debug!("remove shape {}", removed.id());
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        removed.total_bounds()
    }

    /// Removes the current selection, if any.
    pub fn remove_selected(&mut self) -> Rect {
        match self.selected {
            Some(index) => self.remove_shape(index),
            None => Rect::NOTHING,
        }
    }

    /// Translates the selected shape, if any. Returns the union of its
    /// bounds before and after the move.
    pub fn move_selected(&mut self, delta: Vec2) -> Rect {
        let Some(index) = self.selected else {
            return Rect::NOTHING;
        };
        let shape = &mut self.shapes[index];
        let before = shape.total_bounds();
        shape.move_by(delta);
        before.union(shape.total_bounds())
    }

    /// Linear scan from index 0; the first matching tap target wins. With
    /// overlapping shapes this returns the earliest-added (bottommost) one,
    /// matching the behavior this hit test has always had.
    pub fn hit_test(&self, point: Pos2) -> Option<usize> {
        self.shapes
            .iter()
            .position(|shape| shape.contains_point(point))
    }

    fn selection_bounds(&self) -> Rect {
        self.selected_shape()
            .map_or(Rect::NOTHING, Shape::total_bounds)
    }
}

impl ShapeDataSource for Document {
    fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn path_at(&self, index: usize) -> &Path {
        self.shapes[index].path()
    }

    fn color_at(&self, index: usize) -> Color32 {
        self.shapes[index].line_color()
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }
}
