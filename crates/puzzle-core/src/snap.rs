use glam::Vec3;

/// Owns the snapped/unsnapped state of one puzzle piece.
///
/// The transition is one-way: once a piece locks onto its target it never
/// releases for the lifetime of the piece.
#[derive(Clone, Debug)]
pub struct Snapper {
    target: Option<Vec3>,
    tolerance: f32,
    snapped: bool,
}

impl Snapper {
    pub fn new(target: Option<Vec3>, tolerance: f32) -> Self {
        Self {
            target,
            tolerance,
            snapped: false,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Check the distance to the target and lock on when within range.
    ///
    /// Returns `true` only on the tick where the piece locks. A piece
    /// configured without a target never snaps.
    pub fn tick(&mut self, position: &mut Vec3) -> bool {
        if self.snapped {
            return false;
        }
        let target = match self.target {
            Some(t) => t,
            None => return false,
        };
        if position.distance(target) <= self.tolerance {
            *position = target;
            self.snapped = true;
            return true;
        }
        false
    }
}
