#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io::{self, Read};
use std::process;

use anyhow::Result;

use calcudoku::puzzle::Puzzle;
use calcudoku::solve::{PuzzleSolver, SolveResult};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args();
    let puzzle = read_puzzle(&options)?;
    match PuzzleSolver::new(&puzzle).solve() {
        SolveResult::Solved(data) => {
            print!("{}", data.solution);
        }
        SolveResult::Unsolvable => {
            println!("Puzzle is not solvable");
            process::exit(1);
        }
    }
    Ok(())
}

fn read_puzzle(options: &Options) -> Result<Puzzle> {
    let puzzle = match options.input() {
        Some(path) => Puzzle::from_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Puzzle::parse(&buf)?
        }
    };
    Ok(puzzle)
}
