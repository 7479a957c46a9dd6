//! Monte Carlo estimate of drawing a given mix of coloured balls from a hat.

use std::collections::HashMap;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{ExerciseError, Result};
use crate::options::ExperimentOptions;

/// A hat full of coloured balls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hat {
    initial: Vec<(String, usize)>,
    contents: Vec<String>,
}

impl Hat {
    /// Creates a hat from `(colour, count)` pairs.
    pub fn new<S: AsRef<str>>(balls: &[(S, usize)]) -> Self {
        balls
            .iter()
            .fold(HatBuilder::default(), |builder, (colour, count)| {
                builder.balls(colour.as_ref(), *count)
            })
            .build()
    }

    /// Starts an empty [`HatBuilder`].
    pub fn builder() -> HatBuilder {
        HatBuilder::default()
    }

    /// Balls still in the hat, in insertion order until the first draw.
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    /// Number of balls left.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether every ball has been drawn.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Removes `count` balls at random. Asking for at least as many balls as
    /// the hat holds empties it and returns everything.
    pub fn draw<R: Rng>(&mut self, count: usize, rng: &mut R) -> Vec<String> {
        if count >= self.contents.len() {
            return std::mem::take(&mut self.contents);
        }
        (0..count)
            .map(|_| {
                let index = rng.gen_range(0..self.contents.len());
                self.contents.swap_remove(index)
            })
            .collect()
    }

    /// A fresh hat with the composition this one started with.
    pub fn refilled(&self) -> Self {
        Self::new(&self.initial)
    }
}

/// Builder that accumulates colours before constructing a [`Hat`].
#[derive(Clone, Debug, Default)]
pub struct HatBuilder {
    initial: Vec<(String, usize)>,
}

impl HatBuilder {
    /// Adds `count` balls of `colour`. Repeating a colour adds to its count.
    pub fn balls<S: Into<String>>(mut self, colour: S, count: usize) -> Self {
        let colour = colour.into();
        match self.initial.iter_mut().find(|(existing, _)| *existing == colour) {
            Some((_, existing)) => *existing += count,
            None => self.initial.push((colour, count)),
        }
        self
    }

    /// Fills a hat with the accumulated balls.
    pub fn build(self) -> Hat {
        let contents = self
            .initial
            .iter()
            .flat_map(|(colour, count)| std::iter::repeat(colour.clone()).take(*count))
            .collect();
        Hat {
            initial: self.initial,
            contents,
        }
    }
}

/// Fraction of trials in which drawing `balls_drawn` balls from a fresh copy
/// of `hat` yields at least the `expected` count of every listed colour.
pub fn experiment(
    hat: &Hat,
    expected: &[(&str, usize)],
    balls_drawn: usize,
    options: &ExperimentOptions,
) -> Result<f64> {
    if options.experiments == 0 {
        return Err(ExerciseError::NonPositiveParameter {
            parameter: "number of experiments",
        });
    }

    let mut rng = SmallRng::seed_from_u64(options.seed);
    let mut successes = 0usize;
    for _ in 0..options.experiments {
        let drawn = hat.refilled().draw(balls_drawn, &mut rng);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for ball in &drawn {
            *counts.entry(ball.as_str()).or_default() += 1;
        }
        if expected
            .iter()
            .all(|(colour, needed)| counts.get(colour).copied().unwrap_or(0) >= *needed)
        {
            successes += 1;
        }
    }

    let probability = successes as f64 / options.experiments as f64;
    debug!(
        "{successes} of {} trials matched ({probability:.4})",
        options.experiments
    );
    Ok(probability)
}
