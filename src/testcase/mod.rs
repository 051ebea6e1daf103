//! The shared generate -> persist input -> solve -> persist output driver
//!
//! Each problem implements `TestCase`. `run` then takes care of producing the two files a judge
//! needs: the input handed to submissions and the answer their output is compared against.

pub mod reader;
pub use reader::{ParseError, TokenReader};

use crate::config::GenConfig;
use crate::util::make_rng;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::fs;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use rand::Rng;

/// The error type used by the driver, carries the failing path and reason
#[derive(Debug)]
pub struct TestCaseError {
    description: String
}

impl TestCaseError {
    pub fn new(description: &str) -> Self {
        TestCaseError { description: description.to_owned() }
    }
}

impl Display for TestCaseError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "testcase error: {}", self.description)
    }
}

impl Error for TestCaseError {
}

/// A single problem instance together with its reference solution
pub trait TestCase: Sized {
    /// What the reference solution produces
    type Answer: Debug;

    /// Problem name used in log lines
    const NAME: &'static str;

    /// Draw a random instance
    fn generate<R: Rng>(rng: &mut R) -> Self;

    /// Parse an instance back out of an input file's text
    fn read_input(text: &str) -> Result<Self, ParseError>;

    /// Serialize the instance in the problem's input format
    fn write_input<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    /// Run the reference solution. The instance may be consumed or scratched while solving.
    fn solve(self) -> Self::Answer;

    /// Serialize an answer in the problem's output format
    fn write_answer<W: Write>(answer: &Self::Answer, writer: &mut W) -> io::Result<()>;
}

/// Produce one test case as described by `config`
///
/// When generating, a failure to write the input file aborts the run before solving, and the
/// output file is left untouched. A failure to write the output file does not remove the input
/// file that was already written.
pub fn run<T: TestCase>(config: &GenConfig) -> Result<T::Answer, Box<dyn Error>> {
    let input_path = config.input_path.as_path();
    let output_path = config.output_path.as_path();

    let case = if config.solve_existing {
        let text = fs::read_to_string(input_path).map_err(|e| {
            TestCaseError::new(&format!("failed reading input file {}: {}", input_path.display(), e))
        })?;
        let case = T::read_input(&text).map_err(|e| {
            TestCaseError::new(&format!("malformed input file {}: {}", input_path.display(), e))
        })?;
        info!("{} testcase read from file: {}", T::NAME, input_path.display());
        case
    } else {
        let mut rng = make_rng(config.seed);
        let case = T::generate(&mut rng);
        write_file(input_path, |writer| case.write_input(writer)).map_err(|e| {
            TestCaseError::new(&format!("failed writing input file {}: {}", input_path.display(), e))
        })?;
        info!("{} testcase written to file: {}", T::NAME, input_path.display());
        case
    };

    let answer = case.solve();
    debug!("{} answer: {:?}", T::NAME, answer);

    write_file(output_path, |writer| T::write_answer(&answer, writer)).map_err(|e| {
        TestCaseError::new(&format!("failed writing output file {}: {}", output_path.display(), e))
    })?;
    info!("{} result written to file: {}", T::NAME, output_path.display());
    Ok(answer)
}

// The explicit flush matters: `BufWriter` swallows errors when flushing on drop.
fn write_file<F>(path: &Path, write: F) -> io::Result<()>
    where F: FnOnce(&mut BufWriter<fs::File>) -> io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    write(&mut writer)?;
    writer.flush()
}
