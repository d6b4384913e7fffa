use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceParseError {
    #[error("Sequence is empty")]
    Empty,

    #[error("Unrecognized monomer symbol '{symbol}' at position {position}")]
    InvalidSymbol { position: usize, symbol: char },
}

/// The two monomer classes of the HP model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Monomer {
    Hydrophobic, // H
    Polar,       // P
}

impl Monomer {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'H' => Some(Self::Hydrophobic),
            'P' => Some(Self::Polar),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Hydrophobic => 'H',
            Self::Polar => 'P',
        }
    }

    #[inline]
    pub fn is_hydrophobic(&self) -> bool {
        matches!(self, Self::Hydrophobic)
    }
}

/// An ordered, immutable sequence of monomer types.
///
/// This is the fixed input to a folding search; only the realized walk changes
/// during a run. Construction rejects empty sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpSequence {
    monomers: Vec<Monomer>,
}

impl HpSequence {
    pub fn new(monomers: Vec<Monomer>) -> Result<Self, SequenceParseError> {
        if monomers.is_empty() {
            return Err(SequenceParseError::Empty);
        }
        Ok(Self { monomers })
    }

    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }

    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }
}

impl FromStr for HpSequence {
    type Err = SequenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let monomers = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Monomer::from_symbol(symbol)
                    .ok_or(SequenceParseError::InvalidSymbol { position, symbol })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(monomers)
    }
}

impl fmt::Display for HpSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for monomer in &self.monomers {
            write!(f, "{}", monomer.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_case_symbols() {
        let sequence: HpSequence = "HpHh".parse().unwrap();
        assert_eq!(
            sequence.monomers(),
            &[
                Monomer::Hydrophobic,
                Monomer::Polar,
                Monomer::Hydrophobic,
                Monomer::Hydrophobic,
            ]
        );
        assert_eq!(sequence.len(), 4);
    }

    #[test]
    fn rejects_unknown_symbol_with_position() {
        let result = "HPXH".parse::<HpSequence>();
        assert_eq!(
            result,
            Err(SequenceParseError::InvalidSymbol {
                position: 2,
                symbol: 'X'
            })
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<HpSequence>(), Err(SequenceParseError::Empty));
        assert_eq!(HpSequence::new(vec![]), Err(SequenceParseError::Empty));
    }

    #[test]
    fn display_round_trips_the_symbols() {
        let sequence: HpSequence = "HPHPPH".parse().unwrap();
        assert_eq!(sequence.to_string(), "HPHPPH");
    }
}
