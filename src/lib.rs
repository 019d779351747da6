/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Parser for FITS/WCS-style physical units specifications.
//!
//! Given a units string such as `"10**-12 erg/(cm**2 s Angstrom)"`,
//! `"log(Hz)"` or `"[Jy/beam]"`, [`parse`] returns the enclosing
//! function tag (if any), the scale factor relative to SI base units,
//! and the exponent vector over the recognised base quantities — or
//! one of a small, stable taxonomy of diagnostics ([`UnitError`]) if
//! the string isn't a well-formed units specification.
//!
//! The hard part lives in [`parser`]: a mode-driven scanner, not a
//! grammar-generated one, since the longest-match disambiguation
//! between a bare atom and a prefix-plus-atom reading needs direct
//! lookahead over the unit and prefix tables.

pub mod atom;
pub mod dimension;
pub mod error;
pub mod func;
pub mod parser;
pub mod prefix;

pub use atom::{atom_names, AtomSpec, PrefixPolicy};
pub use dimension::{BaseQuantity, BaseVector};
pub use error::{ErrorKind, UnitError};
pub use func::FuncTag;
pub use parser::parse;
pub use prefix::{prefix_symbols, PrefixSide, PrefixSpec};

use serde::{Deserialize, Serialize};

/// The result of a successful parse: a function tag, a scale factor
/// relative to SI base units, and the exponent vector over the base
/// quantities in [`BaseQuantity::ALL`] order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ParseOutcome {
    pub func: FuncTag,
    pub scale: f64,
    pub vector: BaseVector,
}

impl ParseOutcome {
    pub fn is_dimensionless(&self) -> bool {
        self.vector.is_dimensionless()
    }
}

/// Equivalent to within floating-point rounding: `scale` is compared
/// with a relative tolerance rather than bit-exact `==`, since two
/// syntactically different but dimensionally equal unit strings (e.g.
/// differently parenthesised divisions) accumulate their scale via
/// different `powf` chains that need not be bit-identical. Matches
/// [`BaseVector`]'s own tolerant `PartialEq`.
impl PartialEq for ParseOutcome {
    fn eq(&self, other: &Self) -> bool {
        self.func == other.func
            && (self.scale - other.scale).abs() <= 1e-9 * self.scale.abs().max(other.scale.abs())
            && self.vector == other.vector
    }
}
