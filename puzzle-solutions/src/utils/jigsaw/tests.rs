use super::*;
use proptest::prelude::*;
use puzzle_solver::ParseError;

const SAMPLE: &str = include_str!("testdata/sample.txt");

const CORNERS: [TileId; 4] = [1951, 1171, 2971, 3079];

fn sample_index() -> (TileSet, BorderIndex) {
    let tiles = parse_tiles(SAMPLE).unwrap();
    let index = BorderIndex::build(&tiles);
    (tiles, index)
}

fn assembled() -> (TileSet, Grid) {
    let (mut tiles, index) = sample_index();
    let grid = assemble(&mut tiles, &index, CORNERS[0]).unwrap();
    (tiles, grid)
}

fn canonical_borders(tile: &Tile) -> Vec<Border> {
    let mut borders: Vec<Border> = tile.borders().iter().map(Border::canonical).collect();
    borders.sort();
    borders
}

#[test]
fn parses_all_sample_tiles() {
    let tiles = parse_tiles(SAMPLE).unwrap();
    assert_eq!(tiles.len(), 9);
    assert_eq!(tiles.tile_side(), 10);
    assert_eq!(
        tiles.ids().collect::<Vec<_>>(),
        vec![2311, 1951, 1171, 1427, 1489, 2473, 2971, 2729, 3079]
    );
    assert_eq!(tiles.tile(2311).unwrap().row(0), b"..##.#..#.");
    assert_eq!(tiles.tile(3079).unwrap().row(9), b"..#.###...");
}

#[test]
fn finds_four_corners_in_input_order() {
    let (tiles, index) = sample_index();
    assert_eq!(index.corners(&tiles), Ok(CORNERS));
    let product: u64 = CORNERS.iter().product();
    assert_eq!(product, 20899048083289);
}

#[test]
fn index_holds_both_directions_of_every_border() {
    let (tiles, index) = sample_index();
    assert_eq!(index.len(), 48);
    for tile in tiles.iter() {
        for border in borders_of(tile) {
            let id = tile.id().unwrap();
            assert!(index.tiles_with(&border).any(|t| t == id));
            assert!(index.tiles_with(&border.reversed()).any(|t| t == id));
            assert_eq!(index.count(&border), index.count(&border.reversed()));
        }
    }
}

#[test]
fn rebuilding_the_index_after_reorienting_changes_nothing() {
    let (mut tiles, index) = sample_index();
    let _ = assemble(&mut tiles, &index, CORNERS[0]).unwrap();
    assert_eq!(BorderIndex::build(&tiles), index);
}

#[test]
fn corner_neighbours_share_a_border() {
    let (tiles, index) = sample_index();
    let corner = tiles.tile(1951).unwrap();
    let neighbours: Vec<TileId> = corner
        .borders()
        .iter()
        .filter(|border| index.is_matched(border))
        .map(|border| index.neighbour(&tiles, 1951, border).unwrap())
        .collect();
    let mut sorted = neighbours.clone();
    sorted.sort();
    assert_eq!(sorted, vec![2311, 2729]);
}

#[test]
fn outward_border_has_no_neighbour() {
    let (tiles, index) = sample_index();
    let corner = tiles.tile(1951).unwrap();
    let outward = corner
        .borders()
        .into_iter()
        .find(|border| index.is_outward(border))
        .unwrap();
    assert!(matches!(
        index.neighbour(&tiles, 1951, &outward),
        Err(JigsawError::NoNeighbour { tile: 1951, .. })
    ));
}

#[test]
fn assembles_the_sample_grid() {
    let (tiles, grid) = assembled();
    assert_eq!(grid.side(), 3);
    assert_eq!(
        grid.rows().map(<[TileId]>::to_vec).collect::<Vec<_>>(),
        vec![
            vec![1951, 2729, 2971],
            vec![2311, 1427, 1489],
            vec![3079, 2473, 1171],
        ]
    );
    assert_eq!(
        tiles.tile(1951).unwrap().orientation(),
        Orientation::new(3, false)
    );

    let mut corners = grid.corners();
    corners.sort();
    let mut expected = CORNERS;
    expected.sort();
    assert_eq!(corners, expected);
}

#[test]
fn assembled_neighbours_line_up() {
    let (tiles, grid) = assembled();
    let side = grid.side();
    for row in 0..side {
        for col in 0..side {
            let tile = tiles.tile(grid.get(row, col).unwrap()).unwrap();
            if col + 1 < side {
                let right = tiles.tile(grid.get(row, col + 1).unwrap()).unwrap();
                assert_eq!(tile.right(), right.left(), "({}, {})", row, col);
            }
            if row + 1 < side {
                let below = tiles.tile(grid.get(row + 1, col).unwrap()).unwrap();
                assert_eq!(tile.bottom(), below.top(), "({}, {})", row, col);
            }
        }
    }
}

#[test]
fn anchor_without_matched_borders_cannot_be_placed() {
    let input = "Tile 1:\n#.\n..\n\nTile 2:\n#.\n..\n\nTile 3:\n##\n##\n\nTile 4:\n..\n..\n";
    let mut tiles = parse_tiles(input).unwrap();
    let index = BorderIndex::build(&tiles);
    assert_eq!(
        assemble(&mut tiles, &index, 3),
        Err(JigsawError::NoOrientation { tile: 3, row: 0, col: 0 })
    );
}

#[test]
fn non_square_tile_count_cannot_be_assembled() {
    let input: String = SAMPLE.split("\n\n").take(8).collect::<Vec<_>>().join("\n\n");
    let mut tiles = parse_tiles(&input).unwrap();
    let index = BorderIndex::build(&tiles);
    assert_eq!(
        assemble(&mut tiles, &index, 1951),
        Err(JigsawError::NotSquare { count: 8 })
    );
}

#[test]
fn wrong_corner_count_is_reported() {
    let input: String = SAMPLE.split("\n\n").take(4).collect::<Vec<_>>().join("\n\n");
    let tiles = parse_tiles(&input).unwrap();
    let index = BorderIndex::build(&tiles);
    assert!(matches!(
        index.corners(&tiles),
        Err(JigsawError::CornerCount { found: 1, .. })
    ));
}

#[test]
fn composes_the_sample_image() {
    let (tiles, grid) = assembled();
    let image = compose(&grid, &tiles).unwrap();
    assert_eq!(image.id(), None);
    assert_eq!(image.side(), 24);
    assert_eq!(image.count(FOREGROUND), 303);
}

#[test]
fn finds_sea_monsters_and_roughness() {
    let (tiles, grid) = assembled();
    let mut image = compose(&grid, &tiles).unwrap();
    let marker = Marker::sea_monster();
    let found = locate(&mut image, &marker).unwrap();
    assert_eq!(
        found,
        vec![
            MarkerMatch { row: 2, col: 2 },
            MarkerMatch { row: 16, col: 1 },
        ]
    );
    assert_eq!(image.orientation(), Orientation::default());
    assert_eq!(roughness(&image, &marker, found.len()), 273);

    let highlighted = highlight(&image, &marker, &found);
    assert_eq!(highlighted.matches('O').count(), 30);
    assert_eq!(highlighted.matches('#').count(), 273);
}

#[test]
fn non_header_line_stops_parsing() {
    let input = format!("{}\nTile abc:\n#.\n.#\n", SAMPLE);
    let tiles = parse_tiles(&input).unwrap();
    assert_eq!(tiles.len(), 9);

    let expected: Vec<&[u8]> = SAMPLE
        .lines()
        .skip_while(|line| *line != "Tile 3079:")
        .skip(1)
        .take(10)
        .map(str::as_bytes)
        .collect();
    assert_eq!(expected.len(), 10);
    assert_eq!(tiles.tile(3079).unwrap().rows().collect::<Vec<_>>(), expected);
}

#[test]
fn header_with_trailing_text_stops_parsing() {
    let tiles = parse_tiles("Tile 1:\n#.\n.#\n\nTile 2: spare\n..\n..\n").unwrap();
    assert_eq!(tiles.ids().collect::<Vec<_>>(), vec![1]);
}

/// Tiles given as `(id, rows)`, padded with solid filler tiles from id 100.
fn puzzle(tiles: &[(TileId, [&str; 3])], fillers: usize) -> TileSet {
    let mut input = String::new();
    for (id, rows) in tiles {
        input.push_str(&format!("Tile {}:\n{}\n\n", id, rows.join("\n")));
    }
    for id in 100..100 + fillers {
        input.push_str(&format!("Tile {}:\n###\n###\n###\n\n", id));
    }
    parse_tiles(&input).unwrap()
}

#[test]
fn exact_border_wins_over_reversed_one() {
    let tiles = puzzle(
        &[
            (1, ["##.", "#..", "..."]),
            (2, [".##", "...", "..."]),
            (3, ["##.", "...", "..."]),
        ],
        0,
    );
    let index = BorderIndex::build(&tiles);
    let top = tiles.tile(1).unwrap().top();
    assert_eq!(index.count(&top), 3);
    assert_eq!(index.neighbour(&tiles, 1, &top), Ok(3));
    assert_eq!(index.neighbour(&tiles, 1, &top.reversed()), Ok(2));
}

// Tile 2 sits right of tile 1 but also matches its bottom border.
const REUSED: [(TileId, [&str; 3]); 2] = [
    (1, ["...", "#.#", "#.#"]),
    (2, [".#.", "#..", "#.#"]),
];

#[test]
fn tile_met_twice_is_reported() {
    let mut tiles = puzzle(&REUSED, 2);
    let index = BorderIndex::build(&tiles);
    assert_eq!(
        assemble(&mut tiles, &index, 1),
        Err(JigsawError::TileReused {
            tile: 2,
            row: 1,
            col: 0
        })
    );
}

#[test]
fn unmatched_inner_border_has_no_neighbour() {
    let mut tiles = puzzle(&REUSED, 7);
    let index = BorderIndex::build(&tiles);
    assert_eq!(
        assemble(&mut tiles, &index, 1),
        Err(JigsawError::NoNeighbour {
            tile: 2,
            border: "..#".to_string()
        })
    );
}

#[test]
fn malformed_inputs_are_rejected() {
    let cases = [
        ("ragged row", "Tile 1:\n#.#\n#.\n#.#\n"),
        ("duplicate id", "Tile 1:\n#.\n.#\n\nTile 1:\n..\n..\n"),
        ("missing separator", "Tile 1:\n#.\n.#\n##\n"),
        ("truncated tile", "Tile 1:\n#..\n.#.\n"),
        ("size mismatch", "Tile 1:\n#.\n.#\n\nTile 2:\n#..\n.#.\n..#\n"),
        ("header without pixels", "Tile 1:\n\nTile 2:\n#.\n.#\n"),
    ];
    for (name, input) in cases {
        assert!(
            matches!(parse_tiles(input), Err(ParseError::InvalidFormat(_))),
            "{}",
            name
        );
    }
    assert!(matches!(
        parse_tiles("no tiles here\n"),
        Err(ParseError::MissingData(_))
    ));
}

fn tile_strategy() -> impl Strategy<Value = Tile> {
    (2usize..8).prop_flat_map(|side| {
        prop::collection::vec(prop::bool::ANY, side * side).prop_map(move |bits| {
            let rows: Vec<Vec<u8>> = bits
                .chunks(side)
                .map(|row| row.iter().map(|&b| if b { b'#' } else { b'.' }).collect())
                .collect();
            Tile::from_rows(Some(1), &rows).unwrap()
        })
    })
}

fn transform_strategy() -> impl Strategy<Value = Vec<Transform>> {
    prop::collection::vec(
        prop_oneof![Just(Transform::Rotate), Just(Transform::Flip)],
        0..16,
    )
}

proptest! {
    #[test]
    fn four_rotations_restore_the_tile(tile in tile_strategy()) {
        let mut turned = tile.clone();
        for _ in 0..4 {
            turned.rotate();
        }
        prop_assert_eq!(turned, tile);
    }

    #[test]
    fn two_flips_restore_the_tile(tile in tile_strategy()) {
        let mut flipped = tile.clone();
        flipped.flip();
        flipped.flip();
        prop_assert_eq!(flipped, tile);
    }

    #[test]
    fn border_set_survives_any_transform(
        tile in tile_strategy(),
        transforms in transform_strategy(),
    ) {
        let mut moved = tile.clone();
        for transform in transforms {
            transform.apply(&mut moved);
        }
        prop_assert_eq!(canonical_borders(&moved), canonical_borders(&tile));
        prop_assert_eq!(moved.count(FOREGROUND), tile.count(FOREGROUND));
    }

    #[test]
    fn orientation_replays_to_the_same_pixels(
        tile in tile_strategy(),
        transforms in transform_strategy(),
    ) {
        let mut moved = tile.clone();
        for transform in transforms {
            transform.apply(&mut moved);
        }
        let mut replayed = tile.clone();
        for transform in moved.orientation().transforms() {
            transform.apply(&mut replayed);
        }
        prop_assert!(replayed.rows().eq(moved.rows()));
        prop_assert_eq!(replayed.orientation(), moved.orientation());
    }
}
