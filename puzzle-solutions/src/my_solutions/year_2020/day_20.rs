use crate::utils::jigsaw::{
    BorderIndex, JigsawError, Marker, TileId, TileSet, assemble, compose, highlight, locate,
    parse_tiles, roughness,
};
use log::debug;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2020, day = 20, tags = ["jigsaw", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    tiles: TileSet,
    index: BorderIndex,
    corners: Option<[TileId; 4]>,
}

impl PuzzleParser for Solver {
    type Shared = SharedData;

    fn parse(input: &str) -> Result<SharedData, ParseError> {
        let tiles = parse_tiles(input)?;
        let index = BorderIndex::build(&tiles);
        Ok(SharedData {
            tiles,
            index,
            corners: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        let product = corners(shared)?
            .iter()
            .try_fold(1u64, |acc, &id| acc.checked_mul(id))
            .ok_or(JigsawError::Overflow)?;
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        let [anchor, ..] = corners(shared)?;
        let grid = assemble(&mut shared.tiles, &shared.index, anchor)?;
        let mut image = compose(&grid, &shared.tiles)?;

        let marker = Marker::sea_monster();
        let found = locate(&mut image, &marker)?;
        debug!("located markers:\n{}", highlight(&image, &marker, &found));

        Ok(roughness(&image, &marker, found.len()).to_string())
    }
}

fn corners(shared: &mut SharedData) -> Result<[TileId; 4], JigsawError> {
    if let Some(corners) = shared.corners {
        return Ok(corners);
    }
    let corners = shared.index.corners(&shared.tiles)?;
    shared.corners = Some(corners);
    Ok(corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::{RegistryBuilder, SolverError};

    const SAMPLE: &str = include_str!("../../utils/jigsaw/testdata/sample.txt");

    fn registry() -> puzzle_solver::SolverRegistry {
        RegistryBuilder::new()
            .register_plugins(|plugin| plugin.year == 2020 && plugin.day == 20)
            .unwrap()
            .build()
    }

    #[test]
    fn solves_the_sample_through_the_registry() {
        let registry = registry();
        let mut solver = registry.create_solver(2020, 20, SAMPLE).unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "20899048083289");
        assert_eq!(solver.solve(2).unwrap().answer, "273");
    }

    #[test]
    fn part_two_alone_computes_corners_itself() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "273");
        assert_eq!(shared.corners, Some([1951, 1171, 2971, 3079]));
    }

    #[test]
    fn parts_can_be_solved_again() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        for _ in 0..2 {
            assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "273");
            assert_eq!(
                <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
                "20899048083289"
            );
        }
    }

    #[test]
    fn missing_tiles_fail_the_corner_check() {
        let truncated: String = SAMPLE.split("\n\n").take(4).collect::<Vec<_>>().join("\n\n");
        let mut shared = Solver::parse(&truncated).unwrap();
        let err = <Solver as PartSolver<1>>::solve(&mut shared).unwrap_err();
        assert!(matches!(err, SolveError::Failed(_)));
    }

    #[test]
    fn corner_product_overflow_is_reported() {
        let mut input = SAMPLE.to_string();
        for id in [1951, 1171, 2971, 3079] {
            input = input.replace(&format!("Tile {}:", id), &format!("Tile 100000{}:", id));
        }
        let mut shared = Solver::parse(&input).unwrap();
        match <Solver as PartSolver<1>>::solve(&mut shared) {
            Err(SolveError::Failed(e)) => {
                assert_eq!(e.downcast_ref::<JigsawError>(), Some(&JigsawError::Overflow))
            }
            other => panic!("expected overflow, got {:?}", other),
        }
        assert_eq!(
            shared.corners,
            Some([1000001951, 1000001171, 1000002971, 1000003079])
        );
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let registry = registry();
        assert!(matches!(
            registry.create_solver(2020, 20, "\n\n"),
            Err(SolverError::Parse(ParseError::MissingData(_)))
        ));
    }
}
