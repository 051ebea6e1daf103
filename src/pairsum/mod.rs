//! Two Sum
//!
//! Input format:
//!  -- `<n> <target>`
//!  -- `n` space separated non-negative values
//!
//! Output format:
//!  -- `<i> <j>`, two 0-based indices with `values[i] + values[j] == target`, or `-1 -1`

use crate::testcase::{ParseError, TestCase, TokenReader};

use std::collections::{HashMap, VecDeque};
use std::io;
use std::io::Write;
use rand::Rng;

/// Number of values in every generated instance
pub const LEN: usize = 200000;
/// Values are drawn from `[0, VALUE_BOUND)`
pub const VALUE_BOUND: u32 = 200000;
/// Targets are drawn from `[0, TARGET_BOUND)`
pub const TARGET_BOUND: u32 = 5 * VALUE_BOUND;

#[derive(Clone, Debug, PartialEq)]
pub struct PairSumCase {
    pub values: Vec<u32>,
    pub target: u32
}

impl PairSumCase {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let target = rng.gen_range(0, TARGET_BOUND);
        let values = (0..LEN).map(|_| rng.gen_range(0, VALUE_BOUND)).collect();
        PairSumCase { values, target }
    }
}

/// Find a pair of indices `i < j` with `values[i] + values[j] == target`
///
/// Scans `i` upwards and looks for the partner among the indices holding `target - values[i]`.
/// Candidates at or before `i` are dropped from their queue for good, even though a later `i`
/// could have used them, so the pair found is exactly the one this forward scan reaches first.
pub fn find_pair(values: &[u32], target: u32) -> Option<(usize, usize)> {
    let mut positions: HashMap<u32, VecDeque<usize>> = HashMap::new();
    for (i, &value) in values.iter().enumerate() {
        positions.entry(value).or_insert_with(VecDeque::new).push_back(i);
    }

    for (i, &value) in values.iter().enumerate() {
        let need = match target.checked_sub(value) {
            Some(need) => need,
            None => continue
        };
        if let Some(queue) = positions.get_mut(&need) {
            while queue.front().map_or(false, |&j| j <= i) {
                queue.pop_front();
            }
            if let Some(j) = queue.pop_front() {
                return Some((i, j));
            }
        }
    }
    None
}

impl TestCase for PairSumCase {
    type Answer = Option<(usize, usize)>;

    const NAME: &'static str = "pairsum";

    fn generate<R: Rng>(rng: &mut R) -> Self {
        PairSumCase::random(rng)
    }

    fn read_input(text: &str) -> Result<Self, ParseError> {
        let mut reader = TokenReader::new(text);
        let n: usize = reader.next("value count")?;
        let target = reader.next("target")?;
        let mut values = Vec::with_capacity(n.min(LEN));
        for _ in 0..n {
            values.push(reader.next("value")?);
        }
        reader.finish()?;
        Ok(PairSumCase { values, target })
    }

    fn write_input<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{} {}", self.values.len(), self.target)?;
        for value in self.values.iter() {
            write!(writer, "{} ", value)?;
        }
        writeln!(writer)
    }

    fn solve(self) -> Option<(usize, usize)> {
        find_pair(&self.values, self.target)
    }

    fn write_answer<W: Write>(answer: &Option<(usize, usize)>, writer: &mut W) -> io::Result<()> {
        match answer {
            Some((i, j)) => writeln!(writer, "{} {}", i, j),
            None => writeln!(writer, "-1 -1")
        }
    }
}
