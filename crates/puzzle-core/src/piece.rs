use crate::camera::Camera;
use crate::constants::{DEFAULT_DRAG_SPEED, DEFAULT_PICK_RADIUS, DEFAULT_SNAP_TOLERANCE};
use crate::drag::DragController;
use crate::snap::Snapper;
use glam::{Quat, Vec2, Vec3};

/// Static configuration for one puzzle piece.
#[derive(Clone, Debug)]
pub struct PieceSpec {
    pub label: String,
    /// World position the piece locks onto; `None` disables snapping.
    pub target: Option<Vec3>,
    pub tolerance: f32,
    pub draggable: bool,
    pub drag_speed: f32,
    pub pick_radius: f32,
    pub scale: Vec3,
}

impl PieceSpec {
    pub fn new(label: impl Into<String>, target: Vec3) -> Self {
        Self {
            label: label.into(),
            target: Some(target),
            tolerance: DEFAULT_SNAP_TOLERANCE,
            draggable: true,
            drag_speed: DEFAULT_DRAG_SPEED,
            pick_radius: DEFAULT_PICK_RADIUS,
            scale: Vec3::ONE,
        }
    }
}

/// One draggable piece: a plain transform plus the owned behaviors.
///
/// The snapper and drag controller are explicit members; the controller
/// receives a shared reference to the snapper on every call instead of
/// looking up sibling state at runtime.
#[derive(Clone, Debug)]
pub struct Piece {
    pub label: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub pick_radius: f32,
    snapper: Snapper,
    drag: DragController,
}

impl Piece {
    pub fn new(spec: PieceSpec) -> Self {
        Self {
            label: spec.label,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: spec.scale,
            pick_radius: spec.pick_radius,
            snapper: Snapper::new(spec.target, spec.tolerance),
            drag: DragController::new(spec.draggable, spec.drag_speed),
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.snapper.is_snapped()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn snap_target(&self) -> Option<Vec3> {
        self.snapper.target()
    }

    /// Advance the snap check for this frame.
    ///
    /// Returns `true` on the single tick where the piece locks onto its
    /// target; the position is frozen there from then on.
    pub fn tick(&mut self) -> bool {
        self.snapper.tick(&mut self.position)
    }

    pub fn pointer_down(&mut self, screen: Vec2, camera: &Camera) {
        self.drag.pointer_down(self.position, &self.snapper, screen, camera);
    }

    pub fn pointer_move(&mut self, screen: Vec2, camera: &Camera, dt: f32) {
        self.drag
            .pointer_move(&mut self.position, &self.snapper, screen, camera, dt);
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    /// Return an unsnapped piece to the origin and drop any gesture.
    pub fn reset_transform(&mut self) {
        self.drag.reset_transform(&mut self.position, &self.snapper);
    }
}
