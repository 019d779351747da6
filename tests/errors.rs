/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use fits_units::{parse, ErrorKind};

fn expect_kind(input: &str, kind: ErrorKind) {
    let err = parse(input).expect_err(&format!("{input:?} unexpectedly parsed"));
    assert_eq!(err.kind, kind, "{input:?}: got {:?}", err.kind);
    assert_eq!(err.input, input);
}

#[test]
fn unmatched_open_paren() {
    expect_kind("(", ErrorKind::UnbalParen);
    expect_kind("erg/(m", ErrorKind::UnbalParen);
}

#[test]
fn dangling_trailing_operator() {
    expect_kind("m**", ErrorKind::DanglingBinop);
    expect_kind("m*", ErrorKind::DanglingBinop);
    expect_kind("1/", ErrorKind::DanglingBinop);
}

#[test]
fn leading_operator_is_dangling() {
    expect_kind("*m", ErrorKind::DanglingBinop);
    expect_kind(".m", ErrorKind::DanglingBinop);
    expect_kind("/m", ErrorKind::DanglingBinop);
}

#[test]
fn consecutive_operators() {
    expect_kind("m//s", ErrorKind::ConsecBinops);
    expect_kind("m**/2", ErrorKind::ConsecBinops);
}

#[test]
fn bad_initial_symbol() {
    expect_kind("%", ErrorKind::BadInitialSymbol);
    // An explicit integer exponent resets `operator` to 0 on commit,
    // so (unlike after a bare `*`/`.`/`/`) a following bad character
    // is reported as-is rather than upgraded to DANGLING_BINOP.
    expect_kind("m**2%", ErrorKind::BadInitialSymbol);
}

#[test]
fn bad_exponent_symbol() {
    // No `**`/`^` marker was consumed here, so `operator` is still 0
    // when the bad character is hit and the EOF check does not
    // upgrade this to DANGLING_BINOP (see `exponent_marker_with_bad_...`
    // below for the case where it does).
    expect_kind("m&", ErrorKind::BadExponSymbol);
}

#[test]
fn exponent_marker_with_non_numeral_is_dangling_not_bad_symbol() {
    // The `**` marker sets `operator=1`; since that is never reset
    // before EOF, the dangling-operator check takes priority over the
    // BAD_EXPON_SYMBOL that "x" would otherwise trigger.
    expect_kind("m**x", ErrorKind::DanglingBinop);
}

#[test]
fn function_tag_inside_parens_is_rejected() {
    expect_kind("exp(log(Hz))", ErrorKind::FunctionContext);
    expect_kind("(log(Hz))", ErrorKind::FunctionContext);
}

#[test]
fn num_multiplier_followed_by_digit() {
    expect_kind("100", ErrorKind::BadNumMultiplier);
    expect_kind("109", ErrorKind::BadNumMultiplier);
}

#[test]
fn double_open_bracket_is_unbalanced_at_eof() {
    expect_kind("[[m]", ErrorKind::UnbalBracket);
}

#[test]
fn unmatched_close_bracket() {
    expect_kind("m]", ErrorKind::UnbalBracket);
}

#[test]
fn every_error_reports_the_original_input() {
    let input = "exp(log(s))*";
    let err = parse(input).unwrap_err();
    assert_eq!(err.input, input);
}
