/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use serde::{Deserialize, Serialize};

/// The base quantities a parsed unit's exponent vector is expressed over.
///
/// Order is part of the external contract: callers that serialize a
/// [`BaseVector`] as a plain array rely on this exact position assignment.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BaseQuantity {
    Time,
    Length,
    Mass,
    PlaneAngle,
    SolidAngle,
    Charge,
    Mole,
    Temperature,
    LuminousIntensity,
    MassRatioSolar,
    Magnitude,
    Pixel,
    Count,
    Voxel,
    Bin,
    Bit,
    Beam,
}

impl BaseQuantity {
    pub const COUNT: usize = 17;

    /// All base quantities, in contract order.
    pub const ALL: [BaseQuantity; Self::COUNT] = [
        BaseQuantity::Time,
        BaseQuantity::Length,
        BaseQuantity::Mass,
        BaseQuantity::PlaneAngle,
        BaseQuantity::SolidAngle,
        BaseQuantity::Charge,
        BaseQuantity::Mole,
        BaseQuantity::Temperature,
        BaseQuantity::LuminousIntensity,
        BaseQuantity::MassRatioSolar,
        BaseQuantity::Magnitude,
        BaseQuantity::Pixel,
        BaseQuantity::Count,
        BaseQuantity::Voxel,
        BaseQuantity::Bin,
        BaseQuantity::Bit,
        BaseQuantity::Beam,
    ];

    pub const fn index(&self) -> usize {
        match self {
            BaseQuantity::Time => 0,
            BaseQuantity::Length => 1,
            BaseQuantity::Mass => 2,
            BaseQuantity::PlaneAngle => 3,
            BaseQuantity::SolidAngle => 4,
            BaseQuantity::Charge => 5,
            BaseQuantity::Mole => 6,
            BaseQuantity::Temperature => 7,
            BaseQuantity::LuminousIntensity => 8,
            BaseQuantity::MassRatioSolar => 9,
            BaseQuantity::Magnitude => 10,
            BaseQuantity::Pixel => 11,
            BaseQuantity::Count => 12,
            BaseQuantity::Voxel => 13,
            BaseQuantity::Bin => 14,
            BaseQuantity::Bit => 15,
            BaseQuantity::Beam => 16,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseQuantity::Time => "T",
            BaseQuantity::Length => "L",
            BaseQuantity::Mass => "M",
            BaseQuantity::PlaneAngle => "Phi",
            BaseQuantity::SolidAngle => "Omega",
            BaseQuantity::Charge => "Q",
            BaseQuantity::Mole => "N",
            BaseQuantity::Temperature => "Theta",
            BaseQuantity::LuminousIntensity => "I",
            BaseQuantity::MassRatioSolar => "Sun",
            BaseQuantity::Magnitude => "mag",
            BaseQuantity::Pixel => "pix",
            BaseQuantity::Count => "ct",
            BaseQuantity::Voxel => "vox",
            BaseQuantity::Bin => "bin",
            BaseQuantity::Bit => "bit",
            BaseQuantity::Beam => "beam",
        }
    }
}

impl Display for BaseQuantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/// The exponent vector of a parsed (possibly composite) unit, one entry
/// per [`BaseQuantity`]. The all-zero vector denotes a dimensionless
/// quantity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct BaseVector(
    #[serde(with = "serde_arrays")] pub [f64; BaseQuantity::COUNT],
);

impl BaseVector {
    pub const ZERO: BaseVector = BaseVector([0.0; BaseQuantity::COUNT]);

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&n| n == 0.0)
    }

    /// Component-wise equality within a small floating-point tolerance,
    /// since vectors are built up from a chain of multiplications and
    /// divisions of literal table constants.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() < 1e-9)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BaseQuantity, f64)> + '_ {
        BaseQuantity::ALL.into_iter().map(|q| (q, self[q]))
    }
}

impl PartialEq for BaseVector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Index<BaseQuantity> for BaseVector {
    type Output = f64;
    fn index(&self, q: BaseQuantity) -> &f64 {
        &self.0[q.index()]
    }
}

impl IndexMut<BaseQuantity> for BaseVector {
    fn index_mut(&mut self, q: BaseQuantity) -> &mut f64 {
        &mut self.0[q.index()]
    }
}

impl Add<BaseVector> for BaseVector {
    type Output = BaseVector;
    fn add(self, rhs: BaseVector) -> BaseVector {
        let mut r = self;
        for i in 0..BaseQuantity::COUNT {
            r.0[i] += rhs.0[i];
        }
        r
    }
}

impl Sub<BaseVector> for BaseVector {
    type Output = BaseVector;
    fn sub(self, rhs: BaseVector) -> BaseVector {
        let mut r = self;
        for i in 0..BaseQuantity::COUNT {
            r.0[i] -= rhs.0[i];
        }
        r
    }
}

impl Mul<f64> for BaseVector {
    type Output = BaseVector;
    fn mul(self, rhs: f64) -> BaseVector {
        let mut r = self;
        for i in 0..BaseQuantity::COUNT {
            r.0[i] *= rhs;
        }
        r
    }
}

impl Display for BaseVector {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let parts: Vec<String> = self
            .iter()
            .filter(|(_, n)| *n != 0.0)
            .map(|(q, n)| format!("{q}^{n}"))
            .collect();
        match parts.is_empty() {
            true => write!(f, "dimensionless"),
            false => write!(f, "{}", parts.join(" ")),
        }
    }
}

/// Tiny local shim so `[f64; 17]` can derive `Serialize`/`Deserialize`
/// through serde's `with` attribute without pulling in a whole crate
/// for fixed-size array support.
mod serde_arrays {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::BaseQuantity;

    pub fn serialize<S: Serializer>(
        arr: &[f64; BaseQuantity::COUNT],
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        arr.to_vec().serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<[f64; BaseQuantity::COUNT], D::Error> {
        let v = Vec::<f64>::deserialize(de)?;
        v.try_into().map_err(|v: Vec<f64>| {
            serde::de::Error::custom(format!(
                "expected {} entries, got {}",
                BaseQuantity::COUNT,
                v.len()
            ))
        })
    }
}
