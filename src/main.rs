//! Interactive shell for the water jug riddle.

use jugsolve::Riddle;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

fn bail_if<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            println!("{err}");
            std::process::exit(0);
        }
    }
}

// Missing or malformed numbers read as 0 and are rejected by validation.
fn parse_three(line: &str) -> (i64, i64, i64) {
    let mut values = line
        .split_whitespace()
        .map(|token| token.parse::<i64>().unwrap_or(0));
    let mut next = || values.next().unwrap_or(0);
    (next(), next(), next())
}

fn main() {
    println!("Water Jug Riddle");
    print!("Enter value for X, Y, and Z (where X,Y,Z is number of gallon): ");
    bail_if(io::stdout().flush());

    let mut line = String::new();
    bail_if(io::stdin().lock().read_line(&mut line));
    let (x, y, z) = parse_three(&line);

    let riddle = bail_if(Riddle::builder().jug_x(x).jug_y(y).target(z).build());
    let solution = bail_if(riddle.solve());

    println!();
    print!("{solution}");
}
