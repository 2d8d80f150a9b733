//! Weighted 2D grid mazes.
//!
//! ```text
//! S.#....
//! .9#.##.
//! ...#..G
//! ```
//!
//! - `#` is a wall.
//! - `.` and ` ` are open tiles costing 1 to enter.
//! - `1`..=`9` are open tiles costing that much to enter.
//! - `S` and `G` are the open start and goal tiles.

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::error::Result;
use crate::graph::Graph;
use crate::path::Path;
use crate::result::SearchResult;
use crate::search::Search;

const MAX_ELEMENTS_DISPLAYED: usize = 80;

pub type GridCost = u32;

/// The cheapest tile, so Manhattan distance times this never overestimates.
const MIN_TILE_COST: GridCost = 1;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({x},{y})")]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Number of orthogonal steps between two cells.
    ///
    /// ```
    /// use wayfinder::problems::grid::Cell;
    /// assert_eq!(Cell::new(0, 0).manhattan(&Cell::new(2, 3)), 5);
    /// assert_eq!(Cell::new(4, 1).manhattan(&Cell::new(2, 1)), 2);
    /// ```
    pub fn manhattan(&self, other: &Cell) -> GridCost {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Tile {
    /// An open tile with its cost to enter.
    #[display("{}", tile_char(*_0))]
    Open(GridCost),
    #[display("█")]
    Wall,
}

fn tile_char(cost: GridCost) -> char {
    match cost {
        MIN_TILE_COST => '░',
        c => char::from_digit(c, 10).unwrap_or('?'),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TileParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Tile {
    type Error = TileParseError;

    fn try_from(ch: char) -> std::result::Result<Self, Self::Error> {
        match ch {
            ' ' | '.' | '░' => Ok(Tile::Open(MIN_TILE_COST)),
            '#' | '█' => Ok(Tile::Wall),
            '1'..='9' => Ok(Tile::Open(ch.to_digit(10).unwrap_or(MIN_TILE_COST))),
            ch => Err(TileParseError::InvalidCharacter(ch)),
        }
    }
}

/// The static part of a maze.
#[derive(Clone)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn new_from_tiles(tiles: Vec<Vec<Tile>>) -> Self {
        Self { tiles }
    }
    pub(crate) fn new_open_with_dimensions(x: usize, y: usize) -> Self {
        Self {
            tiles: vec![vec![Tile::Open(MIN_TILE_COST); x]; y],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        if self.tiles.is_empty() {
            return (0, 0);
        }
        (self.tiles[0].len(), self.tiles.len())
    }

    /// The tile under a cell, if it's within the grid.
    #[inline(always)]
    pub fn at(&self, cell: &Cell) -> Option<Tile> {
        self.tiles
            .get(cell.y as usize)
            .and_then(|row| row.get(cell.x as usize))
            .copied()
    }

    /// Cost to enter a cell, or `None` for walls and cells off the grid.
    #[inline(always)]
    pub fn entry_cost(&self, cell: &Cell) -> Option<GridCost> {
        match self.at(cell)? {
            Tile::Open(cost) => Some(cost),
            Tile::Wall => None,
        }
    }

    /// Open cells one orthogonal step away, with their cost to enter.
    pub fn adjacent(&self, cell: &Cell) -> SmallVec<[(Cell, GridCost); 4]> {
        let mut v = SmallVec::<[(Cell, GridCost); 4]>::new();

        let prev = u32::MAX;
        let same = 0u32;
        let next = 1u32;
        for (dx, dy) in [
            (prev, same), // Left
            (next, same), // Right
            (same, prev), // Up
            (same, next), // Down
        ] {
            // Wrapping past zero lands outside the grid.
            let neighbour = Cell::new(cell.x.wrapping_add(dx), cell.y.wrapping_add(dy));
            if let Some(cost) = self.entry_cost(&neighbour) {
                v.push((neighbour, cost));
            }
        }
        v
    }
}

impl Graph<Cell, GridCost> for Grid {
    fn neighbours(&mut self, cell: &Cell) -> impl IntoIterator<Item = (Cell, GridCost)> {
        self.adjacent(cell)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.dimensions();
        writeln!(f, "Grid({}x{}):", d.0, d.1)?;
        for line in self.tiles.iter().take(MAX_ELEMENTS_DISPLAYED) {
            for tile in line.iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Grid{:?}", self.dimensions())
    }
}

/// How to estimate the remaining cost to the goal.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq)]
pub enum GridHeuristic {
    /// Dijkstra
    #[display("zero")]
    Zero,
    /// A* with Manhattan distance
    #[default]
    #[display("manhattan")]
    Manhattan,
}

impl GridHeuristic {
    pub fn h(&self, from: &Cell, goal: &Cell) -> GridCost {
        match self {
            GridHeuristic::Zero => 0,
            GridHeuristic::Manhattan => from.manhattan(goal) * MIN_TILE_COST,
        }
    }
}

/// A grid with a start and a goal.
#[derive(Clone, Debug)]
pub struct GridProblem {
    grid: Grid,
    start: Cell,
    goal: Cell,
}

impl GridProblem {
    pub fn new(grid: Grid, start: Cell, goal: Cell) -> Self {
        Self { grid, start, goal }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Searches for the cheapest way from start to goal.
    ///
    /// # Errors
    ///
    /// See [`Search::run`].
    pub fn solve(
        &self,
        heuristic: GridHeuristic,
        maximum_cost: Option<GridCost>,
        track_path: bool,
    ) -> Result<Option<SearchResult<Cell, GridCost>>> {
        let goal = self.goal;
        let search = Search::new(self.start, |c: &Cell| self.grid.adjacent(c))
            .goal_node(goal)
            .heuristic(move |c: &Cell| heuristic.h(c, &goal))
            .track_path(track_path);
        match maximum_cost {
            Some(maximum_cost) => search.maximum_cost(maximum_cost).run(),
            None => search.run(),
        }
    }

    /// Distances from the start to every reachable cell.
    ///
    /// # Errors
    ///
    /// See [`Search::flood`].
    pub fn flood(&self) -> Result<SearchResult<Cell, GridCost>> {
        Search::new(self.start, |c: &Cell| self.grid.adjacent(c))
            .track_path(true)
            .flood()
    }

    /// Draws the problem with a path over it.
    pub fn render_path(&self, path: &Path<Cell, GridCost>) -> String {
        let on_path: rustc_hash::FxHashSet<Cell> = path.nodes().copied().collect();
        let mut out = String::new();
        for (y, line) in self.grid.tiles.iter().enumerate() {
            for (x, tile) in line.iter().enumerate() {
                let cell = Cell::new(x as u32, y as u32);
                if cell == self.start {
                    out.push('S');
                } else if cell == self.goal {
                    out.push('G');
                } else if on_path.contains(&cell) {
                    out.push('*');
                } else {
                    out.push_str(&tile.to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Error)]
pub enum GridProblemParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid tile {e} found at ({x},{y})")]
    InvalidTile {
        e: TileParseError,
        x: usize,
        y: usize,
    },
    #[error("Row {y} has {found} tiles, expected {expected}")]
    RaggedRow {
        y: usize,
        expected: usize,
        found: usize,
    },
    #[error("Grid is too large ({x}x{y})")]
    TooLarge { x: usize, y: usize },
    #[error("No start 'S' found")]
    MissingStart,
    #[error("No goal 'G' found")]
    MissingGoal,
    #[error("Found a second {what} at {second}, the first was at {first}")]
    Duplicate {
        what: &'static str,
        first: Cell,
        second: Cell,
    },
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
}

impl std::convert::TryFrom<&str> for GridProblem {
    type Error = GridProblemParseError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        // Only empty lines around the maze are skipped. A row of spaces is a
        // row of open tiles.
        let mut lines: Vec<&str> = s.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let first = lines.iter().take_while(|l| l.is_empty()).count();
        let lines = &lines[first..];
        if lines.is_empty() {
            return Err(GridProblemParseError::EmptyInput);
        }

        let max_x = lines[0].chars().count();
        let max_y = lines.len();
        if max_x >= u32::MAX as usize || max_y >= u32::MAX as usize {
            return Err(GridProblemParseError::TooLarge { x: max_x, y: max_y });
        }
        let mut grid = Grid::new_open_with_dimensions(max_x, max_y);
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != max_x {
                return Err(GridProblemParseError::RaggedRow {
                    y,
                    expected: max_x,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::new(x as u32, y as u32);
                let (marker, what) = match ch {
                    'S' => (&mut start, "start"),
                    'G' => (&mut goal, "goal"),
                    ch => {
                        grid.tiles[y][x] = Tile::try_from(ch)
                            .map_err(|e| GridProblemParseError::InvalidTile { e, x, y })?;
                        continue;
                    }
                };
                if let Some(first) = *marker {
                    return Err(GridProblemParseError::Duplicate {
                        what,
                        first,
                        second: cell,
                    });
                }
                *marker = Some(cell);
            }
        }

        let start = start.ok_or(GridProblemParseError::MissingStart)?;
        let goal = goal.ok_or(GridProblemParseError::MissingGoal)?;
        Ok(GridProblem::new(grid, start, goal))
    }
}

impl std::convert::TryFrom<&std::path::Path> for GridProblem {
    type Error = GridProblemParseError;

    fn try_from(p: &std::path::Path) -> std::result::Result<Self, Self::Error> {
        let s = std::fs::read_to_string(p).map_err(|e| GridProblemParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        GridProblem::try_from(s.as_str())
    }
}

impl std::fmt::Display for GridProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.grid.dimensions();
        writeln!(
            f,
            "GridProblem({}x{}) (s:{}, g:{}):",
            d.0, d.1, self.start, self.goal
        )?;
        for (y, line) in self.grid.tiles.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
            for (x, tile) in line.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                let cell = Cell::new(x as u32, y as u32);
                if cell == self.start {
                    write!(f, "S")?;
                } else if cell == self.goal {
                    write!(f, "G")?;
                } else {
                    write!(f, "{tile}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
