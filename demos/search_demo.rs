//! Binary Search Demo
//!
//! This example exercises the searcher against a small reference sequence:
//! - A target that is present
//! - A target falling in a gap between elements
//! - A target above every element
//! - A target below every element
//!
//! The expected output is included as a comment at the end.

use bisect::prelude::*;

fn main() -> Result<(), BisectError> {
    let seq = vec![1, 2, 3, 4, 5, 7, 8, 9, 10];

    let searcher = Bisect::new().validate_input().build()?;

    for target in [7, 6, 12, 0] {
        let report = searcher.search(&seq, target)?;
        println!("{}", report);
    }

    /* Expected Output:
    search(7) = 5
    search(6) = not found
    search(12) = not found
    search(0) = not found
    */

    Ok(())
}
