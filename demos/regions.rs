//! Count connected same-character areas in a text grid.
//!
//! Run: cargo run --bin regions [-- FILE]
//!
//! With no argument a built-in sample map is used. Each connected area of
//! equal characters is reported with its size, walking the grid through its
//! orthogonal adjacency rule. A final lookup wraps an out-of-range position
//! back onto the map as if it tiled a torus.

use std::collections::HashSet;
use std::error::Error;
use std::io;

use gridle_core::{CharGrid, Position};
use gridle_input::{LineReader, Parser};

const SAMPLE: &str = "\
AAAA
BBCD
BBCC
EEEC";

/// Loads one character grid from a file, restartable via [`Parser::reset`].
struct GridParser {
    reader: LineReader,
}

impl Parser for GridParser {
    type Output = CharGrid;

    fn parse(&mut self) -> Result<CharGrid, Box<dyn Error>> {
        let lines = self.reader.read_all(true)?;
        Ok(CharGrid::new(lines)?)
    }

    fn reset(&mut self) -> io::Result<()> {
        self.reader.reset()
    }
}

fn load() -> Result<CharGrid, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let mut parser = GridParser { reader: LineReader::open(path)? };
            parser.parse()
        }
        None => Ok(CharGrid::new(SAMPLE.lines().map(String::from).collect())?),
    }
}

/// Whether `pos` indexes actual text, as opposed to the derived region,
/// whose inclusive bounds reach one past the stored lines.
fn in_text(grid: &CharGrid, pos: Position) -> bool {
    pos.row >= 0
        && (pos.row as usize) < grid.content().len()
        && pos.col >= 0
        && (pos.col as usize) < grid.line(pos.row as usize).len()
}

fn run() -> Result<(), Box<dyn Error>> {
    let grid = load()?;
    println!("grid region {}", grid.region());

    let mut seen: HashSet<Position> = HashSet::new();
    let mut areas: Vec<(char, usize)> = Vec::new();

    for (row, line) in grid.lines().enumerate() {
        for col in 0..line.len() {
            let start = Position::new(row as i32, col as i32);
            if seen.contains(&start) {
                continue;
            }
            let ch = grid.at(start);
            let mut size = 0;
            let mut stack = vec![start];
            while let Some(pos) = stack.pop() {
                if !seen.insert(pos) {
                    continue;
                }
                size += 1;
                for next in grid.neighbors_at(pos) {
                    if !seen.contains(&next) && in_text(&grid, next) && grid.at(next) == ch {
                        stack.push(next);
                    }
                }
            }
            areas.push((ch, size));
        }
    }

    areas.sort();
    for (ch, size) in &areas {
        println!("area '{ch}': {size} cells");
    }
    println!("{} areas in total", areas.len());

    // Out-of-range lookups wrap onto the torus tiling of the map.
    let rows = grid.content().len() as i32;
    let cols = grid.line(0).len() as i32;
    let wrapped = Position::new(-1, cols).wrap(rows, cols);
    if in_text(&grid, wrapped) {
        println!("torus lookup (-1, {cols}) lands on {wrapped}: '{}'", grid.at(wrapped));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
