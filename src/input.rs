use egui::{Pos2, Rect, Vec2};
use log::warn;
use rand::Rng;

use crate::document::Document;
use crate::shape;

/// Discrete events the surrounding UI feeds into the core. One event is
/// processed to completion before the next; there is no queueing inside the
/// core itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A tap on the canvas: hit test and (de)select.
    Tap(Pos2),
    /// A drag began: hit test and select what is about to move.
    DragStart(Pos2),
    /// Pointer moved while dragging; delta since the previous event.
    DragMove(Vec2),
    /// The add button: generate a random shape inside the given bounds.
    AddRequested(Rect),
    /// The delete button: remove the current selection.
    DeleteRequested,
}

/// Routes one event to the document and returns the dirty rectangle a
/// renderer must repaint (`Rect::NOTHING` when nothing changed).
///
/// A failed add request (bounds too small) is logged and swallowed here; it
/// is a user-facing no-op, not a crash.
pub fn dispatch(document: &mut Document, rng: &mut impl Rng, event: InputEvent) -> Rect {
    match event {
        InputEvent::Tap(pos) | InputEvent::DragStart(pos) => {
            let hit = document.hit_test(pos);
            document.select(hit)
        }
        InputEvent::DragMove(delta) => document.move_selected(delta),
        InputEvent::AddRequested(bounds) => match shape::random_shape_in_bounds(rng, bounds) {
            Ok(new_shape) => document.add_shape(new_shape),
            Err(err) => {
                warn!("add request ignored: {err}");
                Rect::NOTHING
            }
        },
        InputEvent::DeleteRequested => document.remove_selected(),
    }
}
