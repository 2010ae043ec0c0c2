use glam::{Vec2, Vec3};
use puzzle_core::{
    scatter_pieces, Camera, InputRouter, PieceSpec, PointerEvent, PuzzleScene, RoundParams,
    ScatterParams,
};
use rand::prelude::*;
use std::time::{Duration, Instant};

// Demo viewport and camera placement
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 6.0);

// Frame pacing for the owned loop
const FRAME_SLEEP: Duration = Duration::from_millis(15);

// Seed for the reproducible demo scatter
const SCATTER_SEED: u64 = 42;

/// Socket layout for the seven-piece anatomy demo board.
fn demo_specs() -> Vec<PieceSpec> {
    vec![
        PieceSpec::new("kidney_left", Vec3::new(-1.2, 0.0, 0.0)),
        PieceSpec::new("kidney_right", Vec3::new(1.2, 0.0, 0.0)),
        PieceSpec::new("ureter_left", Vec3::new(-0.7, -0.8, 0.0)),
        PieceSpec::new("ureter_right", Vec3::new(0.7, -0.8, 0.0)),
        PieceSpec::new("bladder", Vec3::new(0.0, -1.5, 0.0)),
        PieceSpec::new("urethra", Vec3::new(0.0, -2.1, 0.0)),
        PieceSpec::new("renal_artery", Vec3::new(0.0, 0.4, 0.0)),
    ]
}

/// Scatter tray above the board, clear of every socket.
fn demo_scatter() -> ScatterParams {
    ScatterParams {
        center: Vec3::new(0.0, 1.6, 0.0),
        position_offset: Vec3::new(2.0, 0.5, 0.0),
        randomize_rotation: true,
        rotation_range: Vec3::new(90.0, 0.0, 0.0),
    }
}

/// Scripted stand-in for a human player.
///
/// Presses an unsnapped piece, holds the pointer over that piece's socket
/// so the smoothed drag chases it, releases once it locks, moves on. The
/// cursor rotates through candidates so a refused press (whatever was
/// under the pointer) tries a different piece next frame.
struct ScriptedPlayer {
    cursor: usize,
}

impl ScriptedPlayer {
    fn new() -> Self {
        Self { cursor: 0 }
    }

    fn drive(
        &mut self,
        scene: &PuzzleScene,
        router: &InputRouter,
        camera: &Camera,
        out: &mut Vec<PointerEvent>,
    ) {
        if let Some(active) = router.active_piece() {
            let piece = &scene.pieces[active];
            if piece.is_snapped() {
                out.push(PointerEvent::up(camera.world_to_screen(piece.position)));
            } else if let Some(socket) = piece.snap_target() {
                out.push(PointerEvent::moved(camera.world_to_screen(socket)));
            } else {
                // Nothing to aim for; let go.
                out.push(PointerEvent::up(camera.world_to_screen(piece.position)));
            }
            return;
        }

        let count = scene.pieces.len();
        for step in 0..count {
            let i = (self.cursor + step) % count;
            if !scene.pieces[i].is_snapped() {
                self.cursor = (i + 1) % count;
                out.push(PointerEvent::down(
                    camera.world_to_screen(scene.pieces[i].position),
                ));
                return;
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let camera = Camera::looking_at(CAMERA_EYE, Vec3::ZERO, VIEWPORT);
    let mut scene = PuzzleScene::new(demo_specs(), RoundParams::default())?;

    let mut rng = StdRng::seed_from_u64(SCATTER_SEED);
    scatter_pieces(&mut scene.pieces, &demo_scatter(), &mut rng);
    log::info!("[scene] scattered {} pieces", scene.pieces.len());

    let mut router = InputRouter::new();
    let mut player = ScriptedPlayer::new();
    let mut pending: Vec<PointerEvent> = Vec::new();

    let mut last = Instant::now();
    let mut last_timer_text = scene.round.timer_text().to_string();

    while scene.round.is_running() {
        std::thread::sleep(FRAME_SLEEP);
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;

        pending.clear();
        player.drive(&scene, &router, &camera, &mut pending);
        for event in pending.drain(..) {
            router.push(event);
        }

        router.flush(&mut scene, &camera, dt);
        scene.tick(dt);

        if scene.round.timer_text() != last_timer_text {
            last_timer_text = scene.round.timer_text().to_string();
            log::info!("[timer] {last_timer_text}");
        }
    }

    log::info!(
        "[round] {} ({} of {} pieces snapped)",
        scene.round.result_text(),
        scene.snapped_count(),
        scene.pieces.len()
    );
    Ok(())
}
