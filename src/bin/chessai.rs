// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chessai::Position;
use serde::Serialize;
use structopt::StructOpt;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Prints a position followed by every position reachable from it in one move.
#[derive(Debug, StructOpt)]
struct Options {
    /// Placement string of the position to start from, row 7 first. Defaults to the starting position.
    #[structopt(long)]
    placement: Option<String>,

    /// Print one JSON object per position instead of board diagrams.
    #[structopt(long)]
    json: bool,

    /// Exit immediately instead of waiting for a line of input.
    #[structopt(long)]
    no_wait: bool,

    /// Log verbosity; repeat for more.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

#[derive(Serialize)]
struct PositionReport {
    placement: String,
    check: bool,
    pieces: usize,
}

impl PositionReport {
    fn new(pos: &Position) -> PositionReport {
        PositionReport {
            placement: pos.as_placement(),
            check: pos.is_check(),
            pieces: pos.len(),
        }
    }
}

fn print_position(out: &mut impl Write, pos: &Position, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &PositionReport::new(pos))?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", pos)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let ops = Options::from_args();
    let level = match ops.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let pos = match ops.placement {
        Some(ref placement) => Position::from_placement(placement)
            .with_context(|| format!("invalid placement: {}", placement))?,
        None => Position::starting(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_position(&mut out, &pos, ops.json)?;
    let mut count = 0;
    for next in pos.possible_moves() {
        print_position(&mut out, &next, ops.json)?;
        count += 1;
    }
    out.flush()?;
    drop(out);
    info!(count, check = pos.is_check(), "enumerated successor positions");

    if !ops.no_wait {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}
