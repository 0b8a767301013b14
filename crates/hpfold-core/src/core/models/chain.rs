use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidueLabel {
    H, // Hydrophobic
    P, // Polar
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown residue label '{character}' at position {position}")]
pub struct ParseLabelError {
    pub character: char,
    pub position: usize,
}

impl ResidueLabel {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Self::H),
            'P' => Some(Self::P),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::H => 'H',
            Self::P => 'P',
        }
    }
}

impl fmt::Display for ResidueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An HP sequence, one label per residue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HpChain {
    labels: Vec<ResidueLabel>,
}

impl HpChain {
    pub fn new(labels: Vec<ResidueLabel>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[ResidueLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn count(&self, label: ResidueLabel) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}

impl FromStr for HpChain {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(position, character)| {
                ResidueLabel::from_char(character).ok_or(ParseLabelError {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl fmt::Display for HpChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.labels.iter().try_for_each(|l| write!(f, "{}", l))
    }
}
