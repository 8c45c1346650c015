//! Runner-up score lookup.
//!
//! Prints the second-largest distinct score of two fixture score lists,
//! rendering `-1` when no runner-up exists.

use rankset::select::second_largest_distinct;

fn main() {
    let fixtures = [vec![3, 5, 2, 5, 6, 6, 1], vec![7, 7, 7]];

    for scores in fixtures {
        match second_largest_distinct(scores) {
            Some(runner_up) => println!("{runner_up}"),
            None => println!("-1"),
        }
    }
}
