//! Sorts a reverse pattern `value[i] = len - i` with every algorithm and prints the results.
//!
//! ```text
//! SORT_LEN=20 SORT_DIRECTION=desc cargo run --example reverse_pattern -- quick merge
//! ```
//!
//! Without algorithm arguments all six run. `RUST_LOG=trace` shows the dispatch records.

use std::env;
use std::error::Error;
use std::str::FromStr;

use classic_sort::{Algorithm, Direction, EntryPoint, Sorter};

const DEFAULT_LEN: usize = 100;

fn print_array(v: &[i32]) {
    let line = v
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    println!("{line}\n");
}

fn reset_array(v: &mut [i32]) {
    let len = v.len();
    for (i, val) in v.iter_mut().enumerate() {
        *val = (len - i) as i32;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let len = match env::var("SORT_LEN") {
        Ok(len) => usize::from_str(&len)?,
        Err(_) => DEFAULT_LEN,
    };
    let direction = match env::var("SORT_DIRECTION") {
        Ok(direction) => Direction::from_str(&direction)?,
        Err(_) => Direction::Ascending,
    };

    let algorithms = env::args()
        .skip(1)
        .map(|arg| Algorithm::from_str(&arg))
        .collect::<Result<Vec<_>, _>>()?;
    let algorithms = if algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        algorithms
    };

    let mut array = vec![0; len];

    reset_array(&mut array);
    println!("Original Array");
    print_array(&array);

    for algorithm in algorithms {
        let sorter = Sorter::new(algorithm, direction);

        reset_array(&mut array);
        println!("{algorithm} sort ({direction})");

        match algorithm.entry_point() {
            EntryPoint::Length => sorter.sort(&mut array, len)?,
            EntryPoint::Range => sorter.sort_range(&mut array, 0, len)?,
        }

        print_array(&array);
    }

    Ok(())
}
