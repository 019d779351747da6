/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The enclosing unary function a `log(...)`, `ln(...)`, `exp(...)` or
/// bare unit string denotes. A caller applies this to a measurand
/// *after* scaling it by [`crate::ParseOutcome::scale`].
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum FuncTag {
    #[default]
    None,
    Log,
    Ln,
    Exp,
}

impl FuncTag {
    /// Apply the tagged function to a scaled value. External
    /// collaborators are free to ignore this and apply the function
    /// themselves; it is provided for convenience only.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            FuncTag::None => x,
            FuncTag::Log => x.log10(),
            FuncTag::Ln => x.ln(),
            FuncTag::Exp => x.exp(),
        }
    }
}

impl Display for FuncTag {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            FuncTag::None => "none",
            FuncTag::Log => "log",
            FuncTag::Ln => "ln",
            FuncTag::Exp => "exp",
        };
        write!(f, "{s}")
    }
}
