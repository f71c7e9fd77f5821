use anyhow::{bail, Result};
use clap::Parser;
use std::time::Instant;
use wordboard_solver::{
    compare_scored, read_scored, search, serialize_scored, Grid, Rack, ScoreMap, WordIndex,
};

/// Find the best turns for a rack on a board.
#[derive(Debug, Parser)]
#[command(name = "solve", version)]
struct Opts {
    /// Word list, one word per line
    wordfile: String,

    /// Letters of the rack, `*` for a wildcard
    rack: String,

    /// Board state; an empty board if not given
    #[arg(short, long)]
    board: Option<String>,

    /// Bonus layout; the standard 15x15 layout if not given
    #[arg(short, long, requires = "points")]
    layout: Option<String>,

    /// Letter points, `<letter> <points>` per line
    #[arg(short, long, requires = "layout")]
    points: Option<String>,

    /// Words to leave out of the word list
    #[arg(short, long)]
    omit: Option<String>,

    /// Expected turns, `score||placements` per line, to check the result against
    #[arg(short, long)]
    golden: Option<String>,

    /// Number of turns to print
    #[arg(short = 'n', long, default_value_t = 20)]
    top: usize,
}

fn run(opts: &Opts) -> Result<()> {
    let score_map = match (&opts.layout, &opts.points) {
        (Some(layout), Some(points)) => ScoreMap::from_files(layout, points)?,
        _ => ScoreMap::default(),
    };
    let index = WordIndex::from_file(&opts.wordfile, opts.omit.as_deref())?;
    let board = match &opts.board {
        Some(path) => Grid::from_file(path, score_map.rows(), score_map.cols())?,
        None => Grid::new(score_map.rows(), score_map.cols()),
    };
    let rack: Rack = opts.rack.parse()?;
    eprintln!("{}", index);

    let now = Instant::now();
    let turns = search(&board, &rack, &index, &score_map)?;
    let dt = now.elapsed().as_secs_f32();
    eprintln!("{} turns for {} in {:.3} s", turns.len(), rack, dt);

    for scored in turns.iter().take(opts.top) {
        println!("{}", serialize_scored(scored));
    }
    if let Some((best, score)) = turns.first() {
        println!("\n{}\n\nScore: {}", board.apply(best)?, score);
    }

    if let Some(path) = &opts.golden {
        let expected = read_scored(path)?;
        let comparison = compare_scored(&turns, &expected);
        if comparison.is_match() {
            println!("PASS: {} turns match {}", turns.len(), path);
            return Ok(());
        }
        for (turn, got, want) in &comparison.incorrect_scores {
            eprintln!("score {} (expect {}): {}", got, want, turn.serialize());
        }
        for turn in &comparison.extra {
            eprintln!("extra: {}", turn.serialize());
        }
        for turn in &comparison.missing {
            eprintln!("missing: {}", turn.serialize());
        }
        bail!(
            "{} incorrect scores, {} extra and {} missing turns",
            comparison.incorrect_scores.len(),
            comparison.extra.len(),
            comparison.missing.len()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();
    if let Err(err) = run(&opts) {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
