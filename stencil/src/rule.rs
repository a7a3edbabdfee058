// rule.rs - Transition rules: neighborhood in, next cell state out

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::StencilError;
use crate::neighborhood::Neighborhood;

/// A pure, total update rule. Any `Fn(&Neighborhood) -> bool` is one.
pub trait TransitionRule {
    fn next_state(&self, nbhd: &Neighborhood) -> bool;
}

impl<F> TransitionRule for F
where
    F: Fn(&Neighborhood) -> bool,
{
    fn next_state(&self, nbhd: &Neighborhood) -> bool {
        self(nbhd)
    }
}

/// Placeholder rule: every cell dies.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDead;

impl TransitionRule for AlwaysDead {
    fn next_state(&self, _nbhd: &Neighborhood) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExactlyOne;

impl TransitionRule for ExactlyOne {
    fn next_state(&self, nbhd: &Neighborhood) -> bool {
        nbhd.alive_count() == 1
    }
}

/// Alive when more than half of the sampled fields are alive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Majority;

impl TransitionRule for Majority {
    fn next_state(&self, nbhd: &Neighborhood) -> bool {
        nbhd.alive_count() * 2 > nbhd.fields().len()
    }
}

// NOTE: a survive-on-2/3, birth-on-3 rule needs the centre cell's own state,
// which `Neighborhood` does not carry.

/// Rules selectable by name from config or the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    #[default]
    AlwaysDead,
    ExactlyOne,
    Majority,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [RuleKind::AlwaysDead, RuleKind::ExactlyOne, RuleKind::Majority];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::AlwaysDead => "always-dead",
            RuleKind::ExactlyOne => "exactly-one",
            RuleKind::Majority => "majority",
        }
    }
}

impl TransitionRule for RuleKind {
    fn next_state(&self, nbhd: &Neighborhood) -> bool {
        match self {
            RuleKind::AlwaysDead => AlwaysDead.next_state(nbhd),
            RuleKind::ExactlyOne => ExactlyOne.next_state(nbhd),
            RuleKind::Majority => Majority.next_state(nbhd),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| StencilError::UnknownRule(s.to_string()))
    }
}
