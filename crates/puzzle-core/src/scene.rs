use crate::piece::{Piece, PieceSpec};
use crate::round::{RoundParams, RoundTimer};
use fnv::FnvHashMap;
use thiserror::Error;

/// Configuration defects caught while assembling a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("piece label may not be empty")]
    EmptyLabel,
    #[error("duplicate piece label: {0}")]
    DuplicateLabel(String),
}

/// All state for one round: the pieces and the countdown.
///
/// The scene is the wiring between per-piece snap transitions and the
/// round tally; pieces never talk to the timer directly.
pub struct PuzzleScene {
    pub pieces: Vec<Piece>,
    pub round: RoundTimer,
    index_by_label: FnvHashMap<String, usize>,
}

impl PuzzleScene {
    pub fn new(specs: Vec<PieceSpec>, round: RoundParams) -> Result<Self, SceneError> {
        let mut index_by_label = FnvHashMap::default();
        let mut pieces = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.label.is_empty() {
                return Err(SceneError::EmptyLabel);
            }
            if index_by_label.contains_key(&spec.label) {
                return Err(SceneError::DuplicateLabel(spec.label));
            }
            if spec.target.is_none() {
                log::warn!(
                    "[scene] piece {} has no snap target and will never lock",
                    spec.label
                );
            }
            index_by_label.insert(spec.label.clone(), pieces.len());
            pieces.push(Piece::new(spec));
        }
        Ok(Self {
            pieces,
            round: RoundTimer::new(round),
            index_by_label,
        })
    }

    pub fn piece_index(&self, label: &str) -> Option<usize> {
        self.index_by_label.get(label).copied()
    }

    pub fn snapped_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_snapped()).count()
    }

    /// One frame of scene logic: snap checks first, then the countdown.
    pub fn tick(&mut self, dt: f32) {
        for piece in self.pieces.iter_mut() {
            if piece.tick() {
                log::info!("[snap] {} locked onto its target", piece.label);
                self.round.increment_snap_tally();
            }
        }
        self.round.tick(dt);
    }
}
