/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;

use crate::dimension::BaseQuantity::{
    self, Beam, Bin, Bit, Charge, Count, Length, LuminousIntensity,
    Magnitude, MassRatioSolar, Mass, Mole, PlaneAngle, Pixel, SolidAngle,
    Temperature, Time, Voxel,
};
use crate::prefix::PrefixSide;

/// Which metric prefixes (if any) an atom accepts.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PrefixPolicy {
    None,
    SubOnly,
    SuperOnly,
    Any,
}

impl PrefixPolicy {
    pub fn accepts(&self, side: PrefixSide) -> bool {
        match (self, side) {
            (PrefixPolicy::Any, _) => true,
            (PrefixPolicy::SubOnly, PrefixSide::Sub) => true,
            (PrefixPolicy::SuperOnly, PrefixSide::Super) => true,
            _ => false,
        }
    }
}

/// A single recognised unit name and what it means.
#[derive(Clone, Copy, Debug)]
pub struct AtomSpec {
    /// All spellings this entry recognises (e.g. `["ohm", "Ohm"]`).
    pub names: &'static [&'static str],
    pub factor: f64,
    pub vector: &'static [(BaseQuantity, f64)],
    pub policy: PrefixPolicy,
}

macro_rules! atom {
    ($names:expr, $factor:expr, [$(($q:expr, $n:expr)),+ $(,)?], $policy:expr) => {
        AtomSpec {
            names: $names,
            factor: $factor,
            vector: &[$(($q, $n)),+],
            policy: $policy,
        }
    };
}

/// The full atom table. Linear scan is adequate: at most a few dozen
/// entries, looked up once per term.
pub static ATOMS: &[AtomSpec] = &[
    // SI basic and derived units: admit any prefix.
    atom!(&["s"], 1.0, [(Time, 1.0)], PrefixPolicy::Any),
    atom!(&["m"], 1.0, [(Length, 1.0)], PrefixPolicy::Any),
    atom!(&["g"], 1e-3, [(Mass, 1.0)], PrefixPolicy::Any),
    atom!(&["rad"], 180.0 / PI, [(PlaneAngle, 1.0)], PrefixPolicy::Any),
    atom!(&["sr"], 1.0, [(SolidAngle, 1.0)], PrefixPolicy::Any),
    atom!(&["K"], 1.0, [(Temperature, 1.0)], PrefixPolicy::Any),
    atom!(
        &["A"],
        1.0,
        [(Charge, 1.0), (Time, -1.0)],
        PrefixPolicy::Any
    ),
    atom!(&["mol"], 1.0, [(Mole, 1.0)], PrefixPolicy::Any),
    atom!(&["cd"], 1.0, [(LuminousIntensity, 1.0)], PrefixPolicy::Any),
    atom!(&["Hz"], 1.0, [(Time, -1.0)], PrefixPolicy::Any),
    atom!(
        &["J"],
        1.0,
        [(Mass, 1.0), (Length, 2.0), (Time, -2.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["W"],
        1.0,
        [(Mass, 1.0), (Length, 2.0), (Time, -3.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["V"],
        1.0,
        [(Mass, 1.0), (Length, 1.0), (Time, -2.0), (Charge, -1.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["N"],
        1.0,
        [(Mass, 1.0), (Length, 1.0), (Time, -2.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["Pa"],
        1.0,
        [(Mass, 1.0), (Length, -1.0), (Time, -2.0)],
        PrefixPolicy::Any
    ),
    atom!(&["C"], 1.0, [(Charge, 1.0)], PrefixPolicy::Any),
    atom!(
        &["ohm", "Ohm"],
        1.0,
        [(Mass, 1.0), (Length, 2.0), (Time, -1.0), (Charge, -2.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["S"],
        1.0,
        [(Mass, -1.0), (Length, -2.0), (Time, 1.0), (Charge, 2.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["F"],
        1.0,
        [(Mass, -1.0), (Length, -2.0), (Time, 3.0), (Charge, 2.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["Wb"],
        1.0,
        [(Mass, 1.0), (Length, 2.0), (Time, 1.0), (Charge, -1.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["T"],
        1.0,
        [(Mass, 1.0), (Time, 1.0), (Charge, -1.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["H"],
        1.0,
        [(Mass, 1.0), (Length, 2.0), (Time, 2.0), (Charge, -2.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["lm"],
        1.0,
        [(LuminousIntensity, 1.0), (SolidAngle, 1.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["lx"],
        1.0,
        [
            (LuminousIntensity, 1.0),
            (SolidAngle, 1.0),
            (Length, -2.0)
        ],
        PrefixPolicy::Any
    ),
    atom!(
        &["eV"],
        1.6021765e-19,
        [(Mass, 1.0), (Length, 2.0), (Time, -2.0)],
        PrefixPolicy::Any
    ),
    // Explicitly any-prefix non-SI units.
    atom!(
        &["Jy"],
        1e-26,
        [(Mass, 1.0), (Time, -2.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["R"],
        1e10 / (4.0 * PI),
        [(Length, -2.0), (Time, -1.0), (SolidAngle, -1.0)],
        PrefixPolicy::Any
    ),
    atom!(
        &["G"],
        1e-4,
        [(Mass, 1.0), (Time, 1.0), (Charge, -1.0)],
        PrefixPolicy::Any
    ),
    atom!(&["barn"], 1e-28, [(Length, 2.0)], PrefixPolicy::Any),
    // Super-prefix-only units.
    atom!(&["a", "yr"], 31557600.0, [(Time, 1.0)], PrefixPolicy::SuperOnly),
    atom!(&["pc"], 3.0857e16, [(Length, 1.0)], PrefixPolicy::SuperOnly),
    atom!(&["bit"], 1.0, [(Bit, 1.0)], PrefixPolicy::SuperOnly),
    atom!(&["byte", "Byte"], 8.0, [(Bit, 1.0)], PrefixPolicy::SuperOnly),
    // Sub-prefix-only unit.
    atom!(&["mag"], 1.0, [(Magnitude, 1.0)], PrefixPolicy::SubOnly),
    // Unprefixable units (angles, time fragments, cgs/astro/device).
    atom!(&["deg"], 1.0, [(PlaneAngle, 1.0)], PrefixPolicy::None),
    atom!(
        &["arcmin"],
        1.0 / 60.0,
        [(PlaneAngle, 1.0)],
        PrefixPolicy::None
    ),
    atom!(
        &["arcsec"],
        1.0 / 3600.0,
        [(PlaneAngle, 1.0)],
        PrefixPolicy::None
    ),
    atom!(
        &["mas"],
        1.0 / 3.6e6,
        [(PlaneAngle, 1.0)],
        PrefixPolicy::None
    ),
    atom!(&["turn"], 360.0, [(PlaneAngle, 1.0)], PrefixPolicy::None),
    atom!(&["min"], 60.0, [(Time, 1.0)], PrefixPolicy::None),
    atom!(&["h"], 3600.0, [(Time, 1.0)], PrefixPolicy::None),
    atom!(&["d"], 86400.0, [(Time, 1.0)], PrefixPolicy::None),
    atom!(&["cy"], 3.15576e9, [(Time, 1.0)], PrefixPolicy::None),
    atom!(
        &["erg"],
        1e-7,
        [(Mass, 1.0), (Length, 2.0), (Time, -2.0)],
        PrefixPolicy::None
    ),
    atom!(
        &["Ry"],
        13.605692 * 1.6021765e-19,
        [(Mass, 1.0), (Length, 2.0), (Time, -2.0)],
        PrefixPolicy::None
    ),
    atom!(&["u"], 1.6605387e-27, [(Mass, 1.0)], PrefixPolicy::None),
    atom!(
        &["D"],
        1e-29 / 3.0,
        [(Charge, 1.0), (Length, 1.0)],
        PrefixPolicy::None
    ),
    atom!(
        &["angstrom", "Angstrom"],
        1e-10,
        [(Length, 1.0)],
        PrefixPolicy::None
    ),
    atom!(&["AU"], 1.49598e11, [(Length, 1.0)], PrefixPolicy::None),
    atom!(
        &["lyr"],
        2.99792458e8 * 31557600.0,
        [(Length, 1.0)],
        PrefixPolicy::None
    ),
    atom!(&["beam"], 1.0, [(Beam, 1.0)], PrefixPolicy::None),
    atom!(&["solRad"], 6.9599e8, [(Length, 1.0)], PrefixPolicy::None),
    atom!(&["solMass"], 1.9891e30, [(Mass, 1.0)], PrefixPolicy::None),
    atom!(
        &["solLum"],
        3.8268e26,
        [(Mass, 1.0), (Length, 2.0), (Time, -3.0)],
        PrefixPolicy::None
    ),
    atom!(&["Sun"], 1.0, [(MassRatioSolar, 1.0)], PrefixPolicy::None),
    atom!(&["adu"], 1.0, [(Count, 1.0)], PrefixPolicy::None),
    atom!(&["bin"], 1.0, [(Bin, 1.0)], PrefixPolicy::None),
    atom!(&["chan"], 1.0, [(Bin, 1.0)], PrefixPolicy::None),
    atom!(&["count", "ct"], 1.0, [(Count, 1.0)], PrefixPolicy::None),
    atom!(&["photon", "ph"], 1.0, [(Count, 1.0)], PrefixPolicy::None),
    atom!(&["pixel", "pix"], 1.0, [(Pixel, 1.0)], PrefixPolicy::None),
    atom!(&["voxel"], 1.0, [(Voxel, 1.0)], PrefixPolicy::None),
];

/// All recognised atom spellings, for display or enumeration by a host
/// tool (a `--help`-style listing, a formatter's alias table, ...).
pub fn atom_names() -> impl Iterator<Item = &'static str> {
    ATOMS.iter().flat_map(|a| a.names.iter().copied())
}
