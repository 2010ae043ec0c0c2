use glam::{Vec2, Vec3};
use puzzle_core::{
    scatter_pieces, Camera, InputRouter, PieceSpec, PointerEvent, PuzzleScene, RoundParams,
    ScatterParams, SceneError, WIN_MESSAGE,
};
use rand::prelude::*;

fn make_camera() -> Camera {
    Camera::looking_at(
        Vec3::new(0.0, 0.0, 6.0),
        Vec3::ZERO,
        Vec2::new(1280.0, 720.0),
    )
}

fn make_specs() -> Vec<PieceSpec> {
    [
        ("piece-a", Vec3::new(-1.2, 0.0, 0.0)),
        ("piece-b", Vec3::new(1.2, 0.0, 0.0)),
        ("piece-c", Vec3::new(-0.7, -0.8, 0.0)),
        ("piece-d", Vec3::new(0.7, -0.8, 0.0)),
        ("piece-e", Vec3::new(0.0, -1.5, 0.0)),
        ("piece-f", Vec3::new(0.0, -2.1, 0.0)),
        ("piece-g", Vec3::new(0.0, 0.4, 0.0)),
    ]
    .into_iter()
    .map(|(label, socket)| PieceSpec::new(label, socket))
    .collect()
}

#[test]
fn empty_labels_are_rejected() {
    let result = PuzzleScene::new(
        vec![PieceSpec::new("", Vec3::ZERO)],
        RoundParams::default(),
    );
    assert!(matches!(result, Err(SceneError::EmptyLabel)));
}

#[test]
fn duplicate_labels_are_rejected() {
    let result = PuzzleScene::new(
        vec![
            PieceSpec::new("twin", Vec3::ZERO),
            PieceSpec::new("twin", Vec3::ONE),
        ],
        RoundParams::default(),
    );
    match result {
        Err(SceneError::DuplicateLabel(label)) => assert_eq!(label, "twin"),
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected duplicate-label error"),
    }
}

#[test]
fn piece_index_resolves_labels() {
    let scene = PuzzleScene::new(make_specs(), RoundParams::default()).unwrap();
    assert_eq!(scene.piece_index("piece-a"), Some(0));
    assert_eq!(scene.piece_index("piece-g"), Some(6));
    assert_eq!(scene.piece_index("missing"), None);
}

#[test]
fn snap_transitions_feed_the_round_tally_once() {
    let mut scene = PuzzleScene::new(make_specs(), RoundParams::default()).unwrap();
    // Park one piece on its socket; everyone else far away.
    for piece in scene.pieces.iter_mut() {
        piece.position = Vec3::new(5.0, 5.0, 0.0);
    }
    scene.pieces[0].position = Vec3::new(-1.2, 0.0, 0.0);

    scene.tick(0.016);
    assert_eq!(scene.round.snap_tally(), 1);
    assert_eq!(scene.snapped_count(), 1);

    // The locked piece must not be counted again on later ticks.
    for _ in 0..10 {
        scene.tick(0.016);
    }
    assert_eq!(scene.round.snap_tally(), 1);
}

#[test]
fn a_piece_without_a_target_never_locks() {
    let mut spec = PieceSpec::new("adrift", Vec3::ZERO);
    spec.target = None;
    let mut scene = PuzzleScene::new(vec![spec], RoundParams::default()).unwrap();
    scene.pieces[0].position = Vec3::ZERO;

    for _ in 0..100 {
        scene.tick(0.016);
    }
    assert!(!scene.pieces[0].is_snapped());
    assert_eq!(scene.round.snap_tally(), 0);
}

#[test]
fn seven_simultaneous_snaps_win_on_that_tick() {
    let mut scene = PuzzleScene::new(make_specs(), RoundParams::default()).unwrap();
    for piece in scene.pieces.iter_mut() {
        let socket = piece.snap_target().unwrap();
        piece.position = socket;
    }

    scene.tick(0.016);
    assert_eq!(scene.round.snap_tally(), 7);
    assert!(!scene.round.is_running());
    assert_eq!(scene.round.result_text(), WIN_MESSAGE);
}

#[test]
fn scripted_round_plays_to_a_win() {
    let camera = make_camera();
    let mut scene = PuzzleScene::new(make_specs(), RoundParams::default()).unwrap();

    // Scatter into a tray above the sockets so every press lands on a
    // loose piece.
    let params = ScatterParams {
        center: Vec3::new(0.0, 1.6, 0.0),
        position_offset: Vec3::new(2.0, 0.5, 0.0),
        randomize_rotation: true,
        rotation_range: Vec3::new(90.0, 0.0, 0.0),
    };
    let mut rng = StdRng::seed_from_u64(42);
    scatter_pieces(&mut scene.pieces, &params, &mut rng);

    let mut router = InputRouter::new();
    let dt = 0.05;
    let mut frames = 0;
    while scene.round.is_running() {
        frames += 1;
        assert!(frames < 5000, "scripted round failed to converge");

        match router.active_piece() {
            Some(i) if !scene.pieces[i].is_snapped() => {
                let socket = scene.pieces[i].snap_target().unwrap();
                router.push(PointerEvent::moved(camera.world_to_screen(socket)));
            }
            Some(_) => {
                router.push(PointerEvent::up(Vec2::ZERO));
            }
            None => {
                if let Some(piece) = scene.pieces.iter().find(|p| !p.is_snapped()) {
                    router.push(PointerEvent::down(camera.world_to_screen(piece.position)));
                }
            }
        }

        router.flush(&mut scene, &camera, dt);
        scene.tick(dt);
    }

    assert_eq!(scene.round.result_text(), WIN_MESSAGE);
    assert_eq!(scene.snapped_count(), 7);
    assert!(scene.round.remaining_secs() > 0.0);
}
