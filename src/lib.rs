//! Test case generators for the judge
//!
//! Every generator produces a random input file for its problem together with the expected
//! answer file, computed by a reference solution. See `testcase::run` for the shared driver.

pub mod config;
pub mod islands;
pub mod pairsum;
pub mod testcase;
pub mod util;
