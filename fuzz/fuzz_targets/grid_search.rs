#![no_main]

use libfuzzer_sys::fuzz_target;

use wayfinder::problems::grid::GridHeuristic;
use wayfinder::problems::grid::GridProblem;

fuzz_target!(|data: &str| {
    let Ok(problem) = GridProblem::try_from(data) else {
        return;
    };

    let dijkstra = problem.solve(GridHeuristic::Zero, None, false).unwrap();
    let astar = problem.solve(GridHeuristic::Manhattan, None, true).unwrap();
    assert_eq!(
        dijkstra.and_then(|r| r.cost()),
        astar.as_ref().and_then(|r| r.cost())
    );

    if let Some(result) = astar {
        let path = result.path().unwrap().unwrap();
        assert_eq!(Some(path.cost()), result.cost());
        assert_eq!(*path.start(), problem.start());
        assert_eq!(*path.end(), problem.goal());
    }
});
