/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use fits_units::{atom_names, parse, prefix_symbols};

#[test]
fn successful_scale_is_positive_and_finite() {
    for input in ["m", "km/s", "Jy/beam", "log(Hz)", "sqrt(m)", "1/s", "[m]"] {
        let out = parse(input).unwrap_or_else(|e| panic!("{input:?}: {e}"));
        assert!(out.scale > 0.0, "{input:?}: scale {} not positive", out.scale);
        assert!(out.scale.is_finite(), "{input:?}: scale not finite");
        for (_, n) in out.vector.iter() {
            assert!(n.is_finite());
        }
    }
}

#[test]
fn bare_atoms_yield_single_nonzero_component() {
    for name in ["s", "m", "g", "K", "mol"] {
        let out = parse(name).unwrap_or_else(|e| panic!("{name:?}: {e}"));
        let nonzero: Vec<_> = out.vector.iter().filter(|(_, n)| *n != 0.0).collect();
        assert_eq!(nonzero.len(), 1, "{name:?}: vector {:?}", out.vector);
        assert_eq!(nonzero[0].1, 1.0);
    }
}

#[test]
fn prefix_scales_multiply_and_preserve_vector() {
    let bare = parse("m").unwrap();
    for prefix in prefix_symbols() {
        let prefixed = match parse(&format!("{prefix}m")) {
            Ok(out) => out,
            Err(_) => continue, // not every prefix combination is meaningful to try here
        };
        // Only accept combinations where the scanner actually read
        // `prefix + "m"` as a single prefixed atom (as opposed to,
        // say, reading a different longest-match tokenisation).
        if prefixed.vector != bare.vector {
            continue;
        }
        let ratio = prefixed.scale / bare.scale;
        let expected = match prefix {
            "y" => 1e-24,
            "z" => 1e-21,
            "a" => 1e-18,
            "f" => 1e-15,
            "p" => 1e-12,
            "n" => 1e-9,
            "u" => 1e-6,
            "m" => 1e-3,
            "c" => 1e-2,
            "d" => 1e-1,
            "da" => 1e1,
            "h" => 1e2,
            "k" => 1e3,
            "M" => 1e6,
            "G" => 1e9,
            "T" => 1e12,
            "P" => 1e15,
            "E" => 1e18,
            "Z" => 1e21,
            "Y" => 1e24,
            other => panic!("unexpected prefix {other:?}"),
        };
        assert!(
            (ratio - expected).abs() / expected < 1e-9,
            "{prefix}m: ratio {ratio} != {expected}"
        );
    }
}

#[test]
fn exponent_law_holds_for_small_integers() {
    let base = parse("m/s").unwrap();
    for n in 1..=4i32 {
        let raised = parse(&format!("(m/s)**{n}")).unwrap();
        for (q, expected) in base.vector.iter().map(|(q, v)| (q, v * n as f64)) {
            assert!((raised.vector[q] - expected).abs() < 1e-9);
        }
        assert!((raised.scale - base.scale.powi(n)).abs() / base.scale.powi(n) < 1e-9);
    }
}

#[test]
fn division_law_holds() {
    let a = parse("erg").unwrap();
    let b = parse("s").unwrap();
    let ratio = parse("erg/s").unwrap();
    for (q, av) in a.vector.iter() {
        assert!((ratio.vector[q] - (av - b.vector[q])).abs() < 1e-9);
    }
    assert!((ratio.scale - a.scale / b.scale).abs() / (a.scale / b.scale) < 1e-9);
}

#[test]
fn parenthesisation_is_transparent() {
    assert_eq!(parse("erg/(cm**2 s)").unwrap(), parse("erg/cm**2/s").unwrap());
}

#[test]
fn brackets_are_transparent() {
    assert_eq!(parse("erg/s").unwrap(), parse("[erg/s]").unwrap());
}

#[test]
fn atom_table_is_nonempty_and_iterable() {
    assert!(atom_names().count() > 20);
    assert!(prefix_symbols().count() == 20);
}
