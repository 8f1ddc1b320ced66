//! Line-driven console for playing sliding tile puzzles by hand.
//!
//! The console owns the board being played and replaces it wholesale after
//! every move, hint, load or reset.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::puzzles::slide::{Coordinate, SlideConfig};
use crate::solver::Solver;

const HELP: &str = "\
h(int)              -- hint next move
l(oad) filename     -- load new puzzle file
s(elect) r c        -- select cell at r, c
q(uit)              -- quit the game
r(eset)             -- reset the current game
";

/// The loaded puzzle and the board currently being played.
#[derive(Debug, Clone)]
pub struct SlideModel {
    initial: SlideConfig,
    current: SlideConfig,
}

impl SlideModel {
    pub fn new(initial: SlideConfig) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(SlideConfig::load(path)?))
    }

    pub fn current(&self) -> &SlideConfig {
        &self.current
    }

    pub fn set_current(&mut self, config: SlideConfig) {
        self.current = config;
    }

    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// Advance one step along a shortest solution. Returns `None` when the
    /// board cannot be solved.
    pub fn hint(&mut self) -> Option<Hint> {
        let mut solver = Solver::new(self.current.clone());
        if !solver.solve() {
            return None;
        }
        let mut path = solver.solution_path().into_iter().skip(1);
        match path.next() {
            Some(next) => {
                self.current = next;
                Some(Hint::Moved)
            }
            None => Some(Hint::AlreadySolved),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Moved,
    AlreadySolved,
}

pub struct Console<R, W> {
    model: SlideModel,
    file: PathBuf,
    selected: Option<Coordinate>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Load the puzzle at `path` and print it with the command list.
    pub fn open(path: impl AsRef<Path>, input: R, output: W) -> Result<Self> {
        let file = path.as_ref().to_path_buf();
        let model = SlideModel::load(&file)?;
        let mut console = Self {
            model,
            file,
            selected: None,
            input,
            output,
        };
        console.show_loaded()?;
        console.output.write_all(HELP.as_bytes())?;
        Ok(console)
    }

    pub fn model(&self) -> &SlideModel {
        &self.model
    }

    /// Process commands until `q` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            let Some(command) = words.first() else {
                continue;
            };
            debug!(target: "console", command = *command, "command");

            match command.to_lowercase().as_str() {
                "q" => {
                    writeln!(self.output, "Goodbye! Thank you for playing!")?;
                    return Ok(());
                }
                "h" => self.hint()?,
                "l" => match words.get(1) {
                    Some(file) => self.load(Path::new(file))?,
                    None => writeln!(self.output, "Usage: l(oad) filename")?,
                },
                "s" => match parse_cell(&words) {
                    Some(cell) => self.select(cell)?,
                    None => self.output.write_all(HELP.as_bytes())?,
                },
                "r" => self.reset()?,
                _ => self.output.write_all(HELP.as_bytes())?,
            }
        }
    }

    fn show_loaded(&mut self) -> Result<()> {
        let name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(self.output, "Loaded: {name}")?;
        self.show_board()
    }

    fn show_board(&mut self) -> Result<()> {
        let grid = self.model.current().grid();
        writeln!(self.output, "{grid}")?;
        Ok(())
    }

    fn hint(&mut self) -> Result<()> {
        match self.model.hint() {
            Some(Hint::Moved) => writeln!(self.output, "Next step!")?,
            Some(Hint::AlreadySolved) => writeln!(self.output, "Already solved!")?,
            None => writeln!(self.output, "No solution found for the puzzle.")?,
        }
        self.selected = None;
        self.show_board()
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        match SlideModel::load(path) {
            Ok(model) => {
                self.model = model;
                self.file = path.to_path_buf();
                self.selected = None;
                self.show_loaded()?;
                self.output.write_all(HELP.as_bytes())?;
            }
            Err(e) => writeln!(self.output, "Error loading the puzzle file: {e}")?,
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.model.reset();
        self.selected = None;
        writeln!(self.output, "Puzzle reset!")?;
        self.show_board()
    }

    fn select(&mut self, cell: Coordinate) -> Result<()> {
        let Coordinate { row, col } = cell;
        let Some(tile) = self.model.current().tile(cell) else {
            writeln!(self.output, "Invalid selection ({row}, {col})")?;
            return self.show_board();
        };

        match self.selected.take() {
            None if tile == 0 => writeln!(self.output, "No number at ({row}, {col})")?,
            None => {
                self.selected = Some(cell);
                writeln!(self.output, "Selected ({row}, {col})")?;
            }
            Some(from) => match self.model.current().move_piece(from, cell) {
                Ok(next) => {
                    writeln!(
                        self.output,
                        "Moved from ({}, {}) to ({row}, {col})",
                        from.row, from.col
                    )?;
                    self.model.set_current(next);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            },
        }
        self.show_board()
    }
}

fn parse_cell(words: &[&str]) -> Option<Coordinate> {
    match words {
        [_, row, col] => Some(Coordinate::new(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}
