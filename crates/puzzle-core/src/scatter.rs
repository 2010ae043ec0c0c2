use crate::piece::Piece;
use glam::{EulerRot, Quat, Vec3};
use rand::prelude::*;

/// Ranges for the start-of-round scatter.
#[derive(Clone, Debug)]
pub struct ScatterParams {
    /// World position of the scatter container; samples land around it.
    pub center: Vec3,
    /// Positions are sampled per-axis in `center ± offset`.
    pub position_offset: Vec3,
    pub randomize_rotation: bool,
    /// Euler ranges in degrees, sampled per-axis in `[-range, range]`.
    pub rotation_range: Vec3,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            position_offset: Vec3::new(2.2, 1.4, 0.8),
            randomize_rotation: true,
            rotation_range: Vec3::new(90.0, 0.0, 0.0),
        }
    }
}

#[inline]
fn sample_symmetric(rng: &mut StdRng, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-extent..=extent)
}

/// Scatter every piece once at round start.
///
/// Each piece samples its axes independently. Scale is read before the
/// transform writes and reapplied unchanged afterward; placing a piece
/// must never disturb its size.
pub fn scatter_pieces(pieces: &mut [Piece], params: &ScatterParams, rng: &mut StdRng) {
    for piece in pieces.iter_mut() {
        let original_scale = piece.scale;

        piece.position = params.center
            + Vec3::new(
                sample_symmetric(rng, params.position_offset.x),
                sample_symmetric(rng, params.position_offset.y),
                sample_symmetric(rng, params.position_offset.z),
            );

        if params.randomize_rotation {
            let rx = sample_symmetric(rng, params.rotation_range.x).to_radians();
            let ry = sample_symmetric(rng, params.rotation_range.y).to_radians();
            let rz = sample_symmetric(rng, params.rotation_range.z).to_radians();
            piece.rotation = Quat::from_euler(EulerRot::XYZ, rx, ry, rz);
        }

        piece.scale = original_scale;
    }
}
