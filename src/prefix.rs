/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

/// Which side of unity a prefix multiplies into. An atom's
/// [`crate::atom::PrefixPolicy`] says which of these (if any) it
/// accepts.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PrefixSide {
    Sub,
    Super,
}

/// A single recognised metric prefix.
#[derive(Clone, Copy, Debug)]
pub struct PrefixSpec {
    pub symbol: &'static str,
    pub multiplier: f64,
    pub side: PrefixSide,
}

impl Display for PrefixSpec {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol)
    }
}

/// The full prefix table, 10^-24 .. 10^24. Ordered longest-symbol-first
/// so a linear scan naturally prefers `da` over a spurious `d` + `a`
/// split.
pub static PREFIXES: &[PrefixSpec] = &[
    PrefixSpec {
        symbol: "da",
        multiplier: 1e1,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "y",
        multiplier: 1e-24,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "z",
        multiplier: 1e-21,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "a",
        multiplier: 1e-18,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "f",
        multiplier: 1e-15,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "p",
        multiplier: 1e-12,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "n",
        multiplier: 1e-9,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "u",
        multiplier: 1e-6,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "m",
        multiplier: 1e-3,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "c",
        multiplier: 1e-2,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "d",
        multiplier: 1e-1,
        side: PrefixSide::Sub,
    },
    PrefixSpec {
        symbol: "h",
        multiplier: 1e2,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "k",
        multiplier: 1e3,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "M",
        multiplier: 1e6,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "G",
        multiplier: 1e9,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "T",
        multiplier: 1e12,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "P",
        multiplier: 1e15,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "E",
        multiplier: 1e18,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "Z",
        multiplier: 1e21,
        side: PrefixSide::Super,
    },
    PrefixSpec {
        symbol: "Y",
        multiplier: 1e24,
        side: PrefixSide::Super,
    },
];

/// All recognised prefix symbols, longest first, for display or
/// enumeration by a host tool.
pub fn prefix_symbols() -> impl Iterator<Item = &'static str> {
    PREFIXES.iter().map(|p| p.symbol)
}
