use crate::camera::Camera;
use crate::constants::DRAG_SMOOTHING_GAIN;
use crate::snap::Snapper;
use glam::{Vec2, Vec3};

/// Transient state for one press-drag-release gesture.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Forward-axis depth captured at press time; the pointer is
    /// unprojected at this depth for the rest of the gesture.
    depth: f32,
    /// World-space offset from the grab point to the piece position.
    offset: Vec3,
}

/// Translates pointer events into position updates for one piece.
///
/// The controller reads the snapper through a shared reference only; the
/// snapped flag is owned and written by [`Snapper`] alone.
#[derive(Clone, Debug)]
pub struct DragController {
    draggable: bool,
    drag_speed: f32,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(draggable: bool, drag_speed: f32) -> Self {
        Self {
            draggable,
            drag_speed,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// Open a gesture, capturing depth and grab offset.
    ///
    /// A press on a snapped or drag-disabled piece is ignored outright;
    /// no depth or offset is computed for it.
    pub fn pointer_down(&mut self, position: Vec3, snapper: &Snapper, screen: Vec2, camera: &Camera) {
        if !self.draggable || snapper.is_snapped() {
            return;
        }
        let depth = camera.view_depth(position);
        let grab = camera.screen_to_world(screen, depth);
        self.session = Some(DragSession {
            depth,
            offset: position - grab,
        });
    }

    /// Chase the pointer with a smoothed step rather than a direct jump.
    pub fn pointer_move(
        &mut self,
        position: &mut Vec3,
        snapper: &Snapper,
        screen: Vec2,
        camera: &Camera,
        dt: f32,
    ) {
        if !self.draggable || snapper.is_snapped() {
            return;
        }
        let session = match self.session {
            Some(s) => s,
            None => return,
        };
        let target = camera.screen_to_world(screen, session.depth) + session.offset;
        let alpha = (dt * self.drag_speed * DRAG_SMOOTHING_GAIN).clamp(0.0, 1.0);
        *position = position.lerp(target, alpha);
    }

    /// Close the gesture unconditionally; the position stays put.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }

    /// Abort any gesture and return the piece to the origin.
    ///
    /// No-op once the piece has snapped.
    pub fn reset_transform(&mut self, position: &mut Vec3, snapper: &Snapper) {
        if snapper.is_snapped() {
            return;
        }
        self.session = None;
        *position = Vec3::ZERO;
    }
}
