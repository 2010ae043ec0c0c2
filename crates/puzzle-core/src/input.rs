use crate::camera::Camera;
use crate::piece::Piece;
use crate::scene::PuzzleScene;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Engine-agnostic pointer event in viewport pixel coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub screen: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

impl PointerEvent {
    pub fn down(screen: Vec2) -> Self {
        Self {
            phase: PointerPhase::Down,
            screen,
        }
    }

    pub fn moved(screen: Vec2) -> Self {
        Self {
            phase: PointerPhase::Move,
            screen,
        }
    }

    pub fn up(screen: Vec2) -> Self {
        Self {
            phase: PointerPhase::Up,
            screen,
        }
    }
}

/// Ray/sphere intersection; returns the near hit distance along the ray.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Pick the piece nearest the camera under the pointer ray, if any.
pub fn pick_piece(pieces: &[Piece], camera: &Camera, screen: Vec2) -> Option<usize> {
    let (ro, rd) = camera.screen_to_ray(screen);
    let mut best = None::<(usize, f32)>;
    for (i, piece) in pieces.iter().enumerate() {
        if let Some(t) = ray_sphere(ro, rd, piece.position, piece.pick_radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Routes queued pointer events onto scene pieces.
///
/// Host callbacks push events as they arrive; the frame loop flushes them
/// with that frame's delta time, so event handling and per-frame updates
/// stay on one cooperative pass.
#[derive(Default)]
pub struct InputRouter {
    queue: SmallVec<[PointerEvent; 8]>,
    active: Option<usize>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the piece currently owning the drag gesture.
    pub fn active_piece(&self) -> Option<usize> {
        self.active
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    /// Apply all queued events in arrival order.
    ///
    /// A press picks the nearest piece under the pointer and forwards it;
    /// the gesture only becomes active if the piece opened a session (a
    /// snapped or drag-disabled piece silently refuses). Moves and the
    /// release go to the active piece alone.
    pub fn flush(&mut self, scene: &mut PuzzleScene, camera: &Camera, dt: f32) {
        let events = std::mem::take(&mut self.queue);
        for event in events {
            match event.phase {
                PointerPhase::Down => {
                    if let Some(i) = pick_piece(&scene.pieces, camera, event.screen) {
                        let piece = &mut scene.pieces[i];
                        piece.pointer_down(event.screen, camera);
                        if piece.is_dragging() {
                            log::info!("[pointer] begin drag on {}", piece.label);
                            self.active = Some(i);
                        }
                    }
                }
                PointerPhase::Move => {
                    if let Some(i) = self.active {
                        scene.pieces[i].pointer_move(event.screen, camera, dt);
                    }
                }
                PointerPhase::Up => {
                    if let Some(i) = self.active.take() {
                        scene.pieces[i].pointer_up();
                    }
                }
            }
        }
    }
}
