use itertools::Itertools;
use log::info;
use rubik_core::{Color, Cube, CubeError, FaceId, Move, MoveKind, Tile};

/// Apply a fixed mix of every move kind from every face so that later
/// checks don't run against a uniform cube.
fn scrambled(size: usize) -> Cube {
    let mut cube = Cube::new(size).unwrap();
    for (i, face) in FaceId::ALL.into_iter().cycle().take(18).enumerate() {
        let kind = MoveKind::ALL[i % MoveKind::ALL.len()];
        let move_ = Move::new(kind, face, (i * 7) % size);
        cube.apply(move_).unwrap();
    }
    assert_eq!(cube.current_front(), FaceId::Front);
    cube
}

fn all_moves(size: usize) -> impl Iterator<Item = Move> {
    MoveKind::ALL
        .into_iter()
        .cartesian_product(FaceId::ALL)
        .cartesian_product(0..size)
        .map(|((kind, face), index)| Move::new(kind, face, index))
}

fn color_counts(cube: &Cube) -> Vec<(Color, usize)> {
    FaceId::ALL
        .into_iter()
        .flat_map(|face| cube.face_snapshot(face).into_iter().flatten())
        .counts()
        .into_iter()
        .sorted()
        .collect()
}

#[test_log::test]
fn test_fresh_cube_snapshots() {
    for size in 1..=5 {
        let cube = Cube::new(size).unwrap();
        for face in FaceId::ALL {
            let snapshot = cube.face_snapshot(face);
            assert_eq!(snapshot.len(), size);
            assert!(snapshot.iter().all(|row| row.len() == size));
            assert!(snapshot.iter().flatten().all(|&c| c == face.default_color()));
        }
    }
}

#[test_log::test]
fn test_four_quarter_turns_are_identity() {
    for size in 1..=4 {
        let original = scrambled(size);
        for move_ in all_moves(size) {
            let mut cube = original.clone();
            for _ in 0..4 {
                cube.apply(move_).unwrap();
            }
            assert_eq!(cube, original, "{move_} repeated four times on a {size}x{size}");
        }
    }
}

#[test_log::test]
fn test_inverse_moves_undo() {
    for size in 1..=4 {
        let original = scrambled(size);
        for move_ in all_moves(size) {
            let mut cube = original.clone();
            cube.apply(move_).unwrap();
            cube.apply(move_.inverse()).unwrap();
            assert_eq!(cube, original, "{move_} then its inverse on a {size}x{size}");
        }
    }
}

#[test_log::test]
fn test_row_right_then_left() {
    let original = scrambled(3);
    for face in FaceId::ALL {
        for row in 0..3 {
            let mut cube = original.clone();
            cube.rotate_row_right(face, row).unwrap();
            cube.rotate_row_left(face, row).unwrap();
            assert_eq!(cube, original);
        }
    }
}

#[test_log::test]
fn test_column_down_four_times() {
    let mut cube = Cube::new(3).unwrap();
    let original = cube.clone();
    for i in 0..4 {
        assert_eq!(i == 0, cube == original);
        cube.rotate_column_down(FaceId::Front, 0).unwrap();
    }
    assert_eq!(cube, original);

    cube.rotate_column_down(FaceId::Front, 0).unwrap();
    cube.rotate_column_up(FaceId::Front, 0).unwrap();
    assert_eq!(cube, original);
}

#[test_log::test]
fn test_caps_only_turn_at_the_edges() {
    let size = 4;
    let original = scrambled(size);
    for face in FaceId::SIDES {
        for row in 0..size {
            let mut cube = original.clone();
            cube.rotate_row_right(face, row).unwrap();

            let mut top = original.face(FaceId::Top).clone();
            let mut bottom = original.face(FaceId::Bottom).clone();
            if row == 0 {
                top.rotate_counter_clockwise();
            }
            if row == size - 1 {
                bottom.rotate_clockwise();
            }
            assert_eq!(cube.face(FaceId::Top), &top);
            assert_eq!(cube.face(FaceId::Bottom), &bottom);
        }
    }
}

#[test_log::test]
fn test_row_right_front_top_row() {
    // Put some structure on Top first so its rotation is observable
    let mut cube = Cube::new(3).unwrap();
    cube.rotate_column_down(FaceId::Front, 0).unwrap();
    let before = cube.clone();
    info!("Before:\n{before}");

    cube.rotate_row_right(FaceId::Front, 0).unwrap();
    info!("After:\n{cube}");

    let row = |cube: &Cube, face| cube.face(face).row(0).unwrap();
    assert_eq!(row(&cube, FaceId::Front), row(&before, FaceId::Left));
    assert_eq!(row(&cube, FaceId::Right), row(&before, FaceId::Front));
    assert_eq!(row(&cube, FaceId::Back), row(&before, FaceId::Right));
    assert_eq!(row(&cube, FaceId::Left), row(&before, FaceId::Back));
    for face in FaceId::SIDES {
        for other in 1..3 {
            assert_eq!(
                cube.face(face).row(other).unwrap(),
                before.face(face).row(other).unwrap()
            );
        }
    }

    let mut top = before.face(FaceId::Top).clone();
    top.rotate_counter_clockwise();
    assert_eq!(cube.face(FaceId::Top), &top);
    assert_eq!(cube.face(FaceId::Bottom), before.face(FaceId::Bottom));
}

#[test_log::test]
fn test_row_right_fresh_colors() {
    let mut cube = Cube::new(3).unwrap();
    cube.rotate_row_right(FaceId::Front, 0).unwrap();

    let first_row = |face| cube.face_snapshot(face).swap_remove(0);
    assert_eq!(first_row(FaceId::Front), vec![Color::Green; 3]);
    assert_eq!(first_row(FaceId::Right), vec![Color::Red; 3]);
    assert_eq!(first_row(FaceId::Back), vec![Color::Blue; 3]);
    assert_eq!(first_row(FaceId::Left), vec![Color::Orange; 3]);
    assert!(cube.face(FaceId::Top).is_uniform());
    assert!(cube.face(FaceId::Bottom).is_uniform());
}

#[test_log::test]
fn test_column_down_front() {
    let mut cube = Cube::new(3).unwrap();
    cube.rotate_column_down(FaceId::Front, 2).unwrap();

    let column = |face, index| cube.face(face).col(index).unwrap();
    let tiles = |color| vec![Tile::new(color); 3];
    assert_eq!(column(FaceId::Front, 2), tiles(Color::White));
    assert_eq!(column(FaceId::Bottom, 2), tiles(Color::Red));
    // Back is numbered from the other side
    assert_eq!(column(FaceId::Back, 0), tiles(Color::Yellow));
    assert_eq!(column(FaceId::Top, 2), tiles(Color::Orange));
    assert!(cube.face(FaceId::Left).is_uniform());
    assert!(cube.face(FaceId::Right).is_uniform());
}

#[test_log::test]
fn test_column_down_from_the_side() {
    let mut cube = Cube::new(3).unwrap();
    cube.rotate_column_down(FaceId::Right, 0).unwrap();
    info!("After:\n{cube}");

    let snap = |face| cube.face_snapshot(face);
    // Right's column next to Front came from Top
    assert!(snap(FaceId::Right).iter().all(|row| row[0] == Color::White));
    assert!(snap(FaceId::Right).iter().all(|row| row[1] == Color::Blue));
    // ... and went onto Bottom's row along Front
    assert_eq!(snap(FaceId::Bottom)[0], vec![Color::Blue; 3]);
    assert_eq!(snap(FaceId::Bottom)[1], vec![Color::Yellow; 3]);
    // Bottom's went to Left's column along Front
    assert!(snap(FaceId::Left).iter().all(|row| row[2] == Color::Yellow));
    assert!(snap(FaceId::Left).iter().all(|row| row[0] == Color::Green));
    // Left's went to Top's row along Front
    assert_eq!(snap(FaceId::Top)[2], vec![Color::Green; 3]);
    assert_eq!(snap(FaceId::Top)[0], vec![Color::White; 3]);
    // Front is the cap, Back is untouched
    assert_eq!(snap(FaceId::Front), vec![vec![Color::Red; 3]; 3]);
    assert_eq!(snap(FaceId::Back), vec![vec![Color::Orange; 3]; 3]);
    assert_eq!(cube.current_front(), FaceId::Front);
}

#[test_log::test]
fn test_column_down_left_shares_right_slices() {
    let original = scrambled(3);
    for col in 0..3 {
        let mut from_left = original.clone();
        from_left.rotate_column_down(FaceId::Left, col).unwrap();
        let mut from_right = original.clone();
        from_right.rotate_column_down(FaceId::Right, col).unwrap();
        assert_eq!(from_left, from_right);
    }
}

#[test_log::test]
fn test_row_right_from_top() {
    let mut cube = Cube::new(3).unwrap();
    cube.rotate_row_right(FaceId::Top, 0).unwrap();
    info!("After:\n{cube}");

    let snap = |face| cube.face_snapshot(face);
    // Top's row along Back slid onto Right's column along Back
    assert!(snap(FaceId::Right).iter().all(|row| row[2] == Color::White));
    assert!(snap(FaceId::Right).iter().all(|row| row[0] == Color::Blue));
    assert_eq!(snap(FaceId::Bottom)[2], vec![Color::Blue; 3]);
    assert!(snap(FaceId::Left).iter().all(|row| row[0] == Color::Yellow));
    assert_eq!(snap(FaceId::Top)[0], vec![Color::Green; 3]);
    assert_eq!(snap(FaceId::Top)[1], vec![Color::White; 3]);
    assert_eq!(snap(FaceId::Front), vec![vec![Color::Red; 3]; 3]);
}

#[test_log::test]
fn test_row_right_from_bottom() {
    let mut cube = Cube::new(3).unwrap();
    cube.rotate_row_right(FaceId::Bottom, 0).unwrap();

    let snap = |face| cube.face_snapshot(face);
    // Bottom's row along Front is the slice next to Front
    assert_eq!(snap(FaceId::Bottom)[0], vec![Color::Blue; 3]);
    assert!(snap(FaceId::Left).iter().all(|row| row[2] == Color::Yellow));
    assert!(snap(FaceId::Right).iter().all(|row| row[0] == Color::White));
    assert_eq!(snap(FaceId::Top)[2], vec![Color::Green; 3]);
    assert_eq!(snap(FaceId::Back), vec![vec![Color::Orange; 3]; 3]);
}

#[test_log::test]
fn test_top_and_bottom_rows_share_slices() {
    let original = scrambled(4);
    for row in 0..4 {
        let mut from_top = original.clone();
        from_top.rotate_row_right(FaceId::Top, row).unwrap();
        let mut from_bottom = original.clone();
        from_bottom.rotate_row_right(FaceId::Bottom, 3 - row).unwrap();
        assert_eq!(from_top, from_bottom);
    }
}

#[test_log::test]
fn test_out_of_range_leaves_cube_alone() {
    for size in 1..=3 {
        let original = scrambled(size);
        for kind in MoveKind::ALL {
            for face in FaceId::ALL {
                let mut cube = original.clone();
                assert_eq!(
                    cube.apply(Move::new(kind, face, size)),
                    Err(CubeError::IndexError { index: size, size })
                );
                assert_eq!(cube, original);
            }
        }
    }
}

#[test_log::test]
fn test_stickers_are_conserved() {
    for size in 1..=4 {
        let mut cube = Cube::new(size).unwrap();
        let expected = color_counts(&cube);
        for move_ in all_moves(size) {
            cube.apply(move_).unwrap();
            assert_eq!(color_counts(&cube), expected);
            assert_eq!(cube.current_front(), FaceId::Front);
        }
        info!("{size}x{size} after every move:\n{cube}");
    }
}
