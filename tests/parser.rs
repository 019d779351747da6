/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use fits_units::{parse, BaseQuantity::*, BaseVector, FuncTag};

fn vector(entries: &[(fits_units::BaseQuantity, f64)]) -> BaseVector {
    let mut v = BaseVector::ZERO;
    for (q, n) in entries {
        v[*q] = *n;
    }
    v
}

#[test]
fn bare_metre() {
    let out = parse("m").unwrap();
    assert_eq!(out.func, FuncTag::None);
    assert_eq!(out.scale, 1.0);
    assert_eq!(out.vector, vector(&[(Length, 1.0)]));
}

#[test]
fn kilometre_per_second() {
    let out = parse("km/s").unwrap();
    assert_eq!(out.func, FuncTag::None);
    assert_eq!(out.scale, 1000.0);
    assert_eq!(out.vector, vector(&[(Length, 1.0), (Time, -1.0)]));
}

#[test]
fn spectral_flux_density_per_wavelength() {
    let out = parse("10**-12 erg/(cm**2 s Angstrom)").unwrap();
    assert_eq!(out.func, FuncTag::None);
    assert!((out.scale - 1e-5).abs() / 1e-5 < 1e-9);
    assert_eq!(
        out.vector,
        vector(&[(Mass, 1.0), (Length, -1.0), (Time, -3.0)])
    );
}

#[test]
fn log_of_frequency() {
    let out = parse("log(Hz)").unwrap();
    assert_eq!(out.func, FuncTag::Log);
    assert_eq!(out.scale, 1.0);
    assert_eq!(out.vector, vector(&[(Time, -1.0)]));
}

#[test]
fn jansky_per_beam() {
    let out = parse("Jy/beam").unwrap();
    assert_eq!(out.func, FuncTag::None);
    assert!((out.scale - 1e-26).abs() / 1e-26 < 1e-9);
    assert_eq!(
        out.vector,
        vector(&[(Mass, 1.0), (Time, -2.0), (Beam, -1.0)])
    );
}

#[test]
fn bracketed_unit_strips_brackets() {
    let bare = parse("Jy/beam").unwrap();
    let bracketed = parse("[Jy/beam]").unwrap();
    assert_eq!(bare, bracketed);
}

#[test]
fn parenthesised_unit_matches_bare() {
    assert_eq!(parse("m/s").unwrap(), parse("(m/s)").unwrap());
}

#[test]
fn implicit_multiplication_by_whitespace() {
    let out = parse("kg m").unwrap();
    assert_eq!(out.scale, 1.0);
    assert_eq!(out.vector, vector(&[(Mass, 1.0), (Length, 1.0)]));
}

#[test]
fn explicit_star_multiplication_matches_whitespace() {
    assert_eq!(parse("kg m").unwrap(), parse("kg*m").unwrap());
    assert_eq!(parse("kg m").unwrap(), parse("kg.m").unwrap());
}

#[test]
fn leading_reciprocal() {
    let out = parse("1/s").unwrap();
    assert_eq!(out.scale, 1.0);
    assert_eq!(out.vector, vector(&[(Time, -1.0)]));
}

#[test]
fn caret_exponent_matches_double_star() {
    assert_eq!(parse("m**2").unwrap(), parse("m^2").unwrap());
}

#[test]
fn marker_less_exponent() {
    let out = parse("cm2").unwrap();
    assert_eq!(out.vector, vector(&[(Length, 2.0)]));
    assert!((out.scale - 1e-4).abs() / 1e-4 < 1e-9);
}

#[test]
fn rational_exponent() {
    let out = parse("m**(1/2)").unwrap();
    assert_eq!(out.vector, vector(&[(Length, 0.5)]));
}

#[test]
fn sqrt_of_unit() {
    let out = parse("sqrt(m)").unwrap();
    assert_eq!(out.vector, vector(&[(Length, 0.5)]));
}

#[test]
fn byte_shares_bit_vector() {
    let bit = parse("bit").unwrap();
    let byte = parse("byte").unwrap();
    assert_eq!(byte.scale, 8.0 * bit.scale);
    assert_eq!(byte.vector, bit.vector);
}

#[test]
fn year_prefers_bare_atom_over_atto_prefix() {
    // "a" alone is the year atom, not the atto prefix with nothing
    // following it.
    let out = parse("a").unwrap();
    assert_eq!(out.vector, vector(&[(Time, 1.0)]));
    assert_eq!(out.scale, 31557600.0);
}

#[test]
fn tesla_prefers_bare_atom_over_tera_prefix() {
    let out = parse("T").unwrap();
    assert_eq!(out.vector, vector(&[(Mass, 1.0), (Time, 1.0), (Charge, -1.0)]));
    assert_eq!(out.scale, 1.0);
}

#[test]
fn attosecond_prefers_prefix_plus_atom() {
    let out = parse("as").unwrap();
    assert_eq!(out.vector, vector(&[(Time, 1.0)]));
    assert!((out.scale - 1e-18).abs() / 1e-18 < 1e-9);
}

#[test]
fn megayear_prefers_prefix_plus_atom() {
    let out = parse("Ma").unwrap();
    assert_eq!(out.vector, vector(&[(Time, 1.0)]));
    assert!((out.scale - 1e6 * 31557600.0).abs() / (1e6 * 31557600.0) < 1e-9);
}
