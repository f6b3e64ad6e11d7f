/*
Step Patterns
=============

A step pattern is one bar of a drum-machine grid written as text, one
character per step. The marker 'X' means "hit on this step", anything else
is silence:

    beats = 4, subbeats = 4  →  16 steps

    kick   "X...X...X...X..."
    snare  "....X.......X..."
    hihat  "X.X.X.X.X.X.X.X."

Using '.' for rests is only a convention; '-' or ' ' read the same.
*/

/// Character that marks a hit.
pub const HIT_MARKER: char = 'X';

/// One bar of on/off steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPattern {
    steps: Vec<bool>,
}

impl StepPattern {
    pub fn parse(pattern: &str) -> Self {
        Self {
            steps: pattern.chars().map(|c| c == HIT_MARKER).collect(),
        }
    }

    /// Whether `step` is a hit. Steps past the end are silent.
    pub fn is_hit(&self, step: usize) -> bool {
        self.steps.get(step).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.steps.iter().filter(|&&hit| hit).count()
    }
}

impl std::str::FromStr for StepPattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for StepPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &hit in &self.steps {
            write!(f, "{}", if hit { HIT_MARKER } else { '.' })?;
        }
        Ok(())
    }
}
