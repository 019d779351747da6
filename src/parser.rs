/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The scanner/parser engine: a mode-driven scanner over the input
//! bytes, recursing into a fresh instance of itself for parenthesised
//! sub-expressions.
//!
//! The six modes from the design notes (INITIAL, PAREN, PREFIX, UNITS,
//! EXPON, FLUSH) collapse into three loop states here: `Initial`
//! (covers INITIAL, and folds the PREFIX/UNITS atom lookup into a
//! single longest-match step), `Expon`, and `Flush`. PAREN is not a
//! loop state at all: it is a single recursive call (see
//! [`capture_paren`]) that returns control to `Expon` once the
//! matching `)` is found.

use nom::{
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::{map, map_res, opt, recognize},
    number::complete::double,
    sequence::{delimited, separated_pair, tuple},
    IResult,
};

use crate::atom::ATOMS;
use crate::dimension::BaseVector;
use crate::error::{ErrorKind, UnitError};
use crate::func::FuncTag;
use crate::prefix::PREFIXES;
use crate::ParseOutcome;

/// Nesting depth at which a pathological `(((((...` input is rejected
/// with `PARSER_ERROR` rather than recursing further.
const MAX_RECURSION_DEPTH: u32 = 32;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Mode {
    Initial,
    Expon,
    Flush,
}

/// Per-invocation parse state. A recursive call into a parenthesised
/// sub-expression gets its own fresh `State`, never sharing this one.
struct State {
    func: FuncTag,
    scale: f64,
    units: BaseVector,
    types: BaseVector,
    expon: f64,
    factor: f64,
    bracket: u8,
    operator: u8,
    any_term_seen: bool,
    pending_error: Option<ErrorKind>,
}

impl State {
    fn new() -> Self {
        State {
            func: FuncTag::None,
            scale: 1.0,
            units: BaseVector::ZERO,
            types: BaseVector::ZERO,
            expon: 1.0,
            factor: 1.0,
            bracket: 0,
            operator: 0,
            any_term_seen: false,
            pending_error: None,
        }
    }

    /// Term commit: fold the pending term into the running scale and
    /// exponent vector, then reset the per-term accumulators.
    fn commit(&mut self) {
        self.scale *= self.factor.powf(self.expon);
        self.units = self.units + self.types * self.expon;
        self.types = BaseVector::ZERO;
        self.expon = 1.0;
        self.factor = 1.0;
    }

    /// Record one occurrence of a binary-operator-shaped token (`*`,
    /// `.`, `/`, an implicit whitespace multiply, or a `**`/`^`
    /// exponent marker). A second occurrence with no term in between
    /// drops the scanner into FLUSH; the actual diagnostic (dangling
    /// vs. consecutive) is resolved at end of input.
    fn see_operator(&mut self) -> Mode {
        match self.operator {
            0 => {
                self.operator = 1;
                Mode::Initial
            }
            _ => {
                self.operator = 2;
                Mode::Flush
            }
        }
    }

    /// Like [`State::see_operator`], but used for the `**`/`^`
    /// exponent marker, which stays in EXPON (awaiting the numeral)
    /// rather than returning to INITIAL.
    fn see_operator_expon(&mut self) -> Mode {
        match self.see_operator() {
            Mode::Flush => Mode::Flush,
            _ => Mode::Expon,
        }
    }

    fn flush(&mut self, kind: ErrorKind) -> Mode {
        self.pending_error.get_or_insert(kind);
        Mode::Flush
    }
}

/// Parse a complete FITS-style units specification.
pub fn parse(input: &str) -> Result<ParseOutcome, UnitError> {
    parse_inner(input, input, 0)
}

fn parse_inner(to_scan: &str, original: &str, depth: u32) -> Result<ParseOutcome, UnitError> {
    let mut st = State::new();
    let mut rest: &str = to_scan;
    let mut mode = Mode::Initial;

    loop {
        if mode == Mode::Flush {
            rest = "";
        }
        if rest.is_empty() {
            break;
        }
        mode = match mode {
            Mode::Initial => step_initial(&mut st, &mut rest, original, depth)?,
            Mode::Expon => step_expon(&mut st, &mut rest),
            Mode::Flush => unreachable!("flushed input is always empty"),
        };
    }

    if mode == Mode::Expon {
        st.commit();
    }

    let kind = if st.bracket != 0 {
        Some(ErrorKind::UnbalBracket)
    } else if st.operator == 1 {
        Some(ErrorKind::DanglingBinop)
    } else if st.operator > 1 {
        Some(ErrorKind::ConsecBinops)
    } else {
        st.pending_error
    };

    match kind {
        Some(kind) => Err(UnitError::new(kind, original)),
        None => Ok(ParseOutcome {
            func: st.func,
            scale: st.scale,
            vector: st.units,
        }),
    }
}

fn is_unit_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn step_initial<'a>(
    st: &mut State,
    rest: &mut &'a str,
    original: &str,
    depth: u32,
) -> Result<Mode, UnitError> {
    *rest = rest.trim_start_matches(is_unit_space);
    if rest.is_empty() {
        return Ok(Mode::Initial);
    }

    if let Some(r) = rest.strip_prefix('[') {
        if st.bracket == 0 {
            st.bracket = 1;
            *rest = r;
            return Ok(Mode::Initial);
        }
        *rest = r;
        return Ok(st.flush(ErrorKind::UnbalBracket));
    }

    if let Some(r) = rest.strip_prefix("10") {
        return match r.as_bytes().first() {
            Some(b) if b.is_ascii_digit() => {
                *rest = "";
                Ok(st.flush(ErrorKind::BadNumMultiplier))
            }
            _ => {
                st.factor = 10.0;
                st.any_term_seen = true;
                *rest = r;
                Ok(Mode::Expon)
            }
        };
    }

    for (kw, tag) in [
        ("log", FuncTag::Log),
        ("ln", FuncTag::Ln),
        ("exp", FuncTag::Exp),
    ] {
        if let Some(r) = rest.strip_prefix(kw) {
            if r.starts_with('(') {
                return enter_function(st, rest, kw.len(), tag, original, depth);
            }
        }
    }

    if rest.starts_with("sqrt(") {
        return enter_sqrt(st, rest, original, depth);
    }

    if rest.starts_with('(') {
        let (after, inner) = capture_paren(rest, original, depth)?;
        let mode = after_paren(st, inner);
        *rest = after;
        return Ok(mode);
    }

    let leading = !st.any_term_seen && st.operator == 0;

    if leading {
        if let Some(r) = rest.strip_prefix("1/") {
            st.expon = -1.0;
            st.operator = 1;
            *rest = r;
            return Ok(Mode::Initial);
        }
        if rest.starts_with('*') || rest.starts_with('.') || rest.starts_with('/') {
            *rest = "";
            return Ok(st.flush(ErrorKind::DanglingBinop));
        }
    }

    if rest.starts_with('*') || rest.starts_with('.') {
        *rest = &rest[1..];
        return Ok(st.see_operator());
    }

    if let Some(r) = rest.strip_prefix('/') {
        st.expon = -st.expon;
        *rest = r;
        return Ok(st.see_operator());
    }

    if let Some((len, factor, vector)) = match_atom(rest) {
        st.factor *= factor;
        st.types = st.types + vector;
        st.operator = 0;
        st.any_term_seen = true;
        *rest = &rest[len..];
        return Ok(Mode::Expon);
    }

    if let Some(r) = rest.strip_prefix(']') {
        st.bracket ^= 1;
        *rest = r;
        return Ok(Mode::Flush);
    }

    *rest = "";
    Ok(st.flush(ErrorKind::BadInitialSymbol))
}

/// Shared tail of the `log(`/`ln(`/`exp(` handling: set the function
/// tag, capture the parenthesised argument, and fold it in exactly as
/// a bare parenthesised sub-expression would be.
fn enter_function<'a>(
    st: &mut State,
    rest: &mut &'a str,
    keyword_len: usize,
    tag: FuncTag,
    original: &str,
    depth: u32,
) -> Result<Mode, UnitError> {
    let after_keyword = &rest[keyword_len..];
    debug_assert!(after_keyword.starts_with('('));
    let (after, inner) = capture_paren(after_keyword, original, depth)?;
    if inner.func != FuncTag::None {
        *rest = after;
        return Ok(st.flush(ErrorKind::FunctionContext));
    }
    st.func = tag;
    st.factor *= inner.scale;
    st.types = st.types + inner.vector;
    st.any_term_seen = true;
    st.operator = 0;
    *rest = after;
    Ok(Mode::Expon)
}

fn enter_sqrt<'a>(
    st: &mut State,
    rest: &mut &'a str,
    original: &str,
    depth: u32,
) -> Result<Mode, UnitError> {
    st.expon *= 0.5;
    let after_keyword = &rest[4..]; // "sqrt", leaving the '('
    let (after, inner) = capture_paren(after_keyword, original, depth)?;
    if inner.func != FuncTag::None {
        *rest = after;
        return Ok(st.flush(ErrorKind::FunctionContext));
    }
    st.factor *= inner.scale;
    st.types = st.types + inner.vector;
    st.any_term_seen = true;
    st.operator = 0;
    *rest = after;
    Ok(Mode::Expon)
}

/// Fold a bare (non-function) parenthesised sub-expression's outcome
/// into `st`.
fn after_paren(st: &mut State, inner: ParseOutcome) -> Mode {
    if inner.func != FuncTag::None {
        return st.flush(ErrorKind::FunctionContext);
    }
    st.factor *= inner.scale;
    st.types = st.types + inner.vector;
    st.any_term_seen = true;
    st.operator = 0;
    Mode::Expon
}

fn step_expon(st: &mut State, rest: &mut &str) -> Mode {
    let trimmed = rest.trim_start_matches(is_unit_space);

    if let Some(r) = trimmed.strip_prefix("**") {
        let consumed = rest.len() - r.len();
        *rest = &rest[consumed..];
        return st.see_operator_expon();
    }
    if let Some(r) = trimmed.strip_prefix('^') {
        let consumed = rest.len() - r.len();
        *rest = &rest[consumed..];
        return st.see_operator_expon();
    }

    if let Some((consumed, value)) = exponent_numeral(trimmed) {
        st.expon *= value;
        st.commit();
        st.operator = 0;
        let ws_skipped = rest.len() - trimmed.len();
        *rest = &rest[ws_skipped + consumed..];
        return Mode::Initial;
    }

    if rest.starts_with(is_unit_space) {
        st.commit();
        *rest = rest.trim_start_matches(is_unit_space);
        // Trailing whitespace with nothing left to multiply is not an
        // implicit-multiply operator: FITS header values are routinely
        // padded with trailing spaces and that padding must parse.
        if rest.is_empty() {
            return Mode::Initial;
        }
        return st.see_operator();
    }
    if rest.starts_with('*') || rest.starts_with('.') {
        st.commit();
        *rest = &rest[1..];
        return st.see_operator();
    }
    if rest.starts_with('(') {
        st.commit();
        return Mode::Initial;
    }
    if let Some(r) = rest.strip_prefix('/') {
        st.commit();
        st.expon = -1.0;
        *rest = r;
        return st.see_operator();
    }
    if let Some(r) = rest.strip_prefix(']') {
        st.commit();
        st.bracket ^= 1;
        *rest = r;
        return Mode::Flush;
    }

    *rest = "";
    st.flush(ErrorKind::BadExponSymbol)
}

/// Find the parenthesised group starting at `rest[0] == '('`, parse
/// its contents with fresh, independent state, and return the text
/// following the closing `)` together with the inner parse's outcome.
///
/// A nested function tag inside the group is left for the caller to
/// turn into a (deferred) `FUNCTION_CONTEXT` diagnostic; this function
/// only returns `Err` for the two conditions that make no sense to
/// defer: an unmatched `(` and exceeding the recursion-depth limit.
fn capture_paren<'a>(
    rest: &'a str,
    original: &str,
    depth: u32,
) -> Result<(&'a str, ParseOutcome), UnitError> {
    debug_assert!(rest.starts_with('('));
    let mut nesting = 1i32;
    let mut close_at = None;
    for (idx, c) in rest.char_indices().skip(1) {
        match c {
            '(' => nesting += 1,
            ')' => {
                nesting -= 1;
                if nesting == 0 {
                    close_at = Some(idx);
                    break;
                }
            }
            _ => {}
        }
    }
    let close_at = close_at.ok_or_else(|| UnitError::new(ErrorKind::UnbalParen, original))?;

    if depth + 1 > MAX_RECURSION_DEPTH {
        return Err(UnitError::new(ErrorKind::ParserError, original));
    }

    let inner_text = &rest[1..close_at];
    let after = &rest[close_at + 1..];
    let inner = parse_inner(inner_text, original, depth + 1)?;
    Ok((after, inner))
}

/// The concrete resolution of the atom/prefix disambiguation: every
/// way of reading a prefix of `rest` as a bare atom or a `prefix+atom`
/// pair is considered, and the one consuming the most characters wins
/// (ties go to the bare atom). Returns the consumed length, the
/// combined factor and the delta vector.
fn match_atom(rest: &str) -> Option<(usize, f64, BaseVector)> {
    let mut best: Option<(usize, f64, BaseVector)> = None;

    // Bare atoms first: on an exact length tie with a later
    // prefix+atom candidate, the strict `>` below keeps this one.
    for atom in ATOMS {
        for name in atom.names {
            if rest.starts_with(name) {
                let len = name.len();
                let better = match best {
                    Some((blen, ..)) => len > blen,
                    None => true,
                };
                if better {
                    best = Some((len, atom.factor, vector_of(atom)));
                }
            }
        }
    }

    for prefix in PREFIXES {
        let Some(after_prefix) = rest.strip_prefix(prefix.symbol) else {
            continue;
        };
        for atom in ATOMS {
            if !atom.policy.accepts(prefix.side) {
                continue;
            }
            for name in atom.names {
                if after_prefix.starts_with(name) {
                    let len = prefix.symbol.len() + name.len();
                    let better = match best {
                        Some((blen, ..)) => len > blen,
                        None => true,
                    };
                    if better {
                        best = Some((len, prefix.multiplier * atom.factor, vector_of(atom)));
                    }
                }
            }
        }
    }

    best
}

fn vector_of(atom: &crate::atom::AtomSpec) -> BaseVector {
    let mut v = BaseVector::ZERO;
    for (q, n) in atom.vector {
        v[*q] += n;
    }
    v
}

/* Leaf numeric grammar for EXPON's exponent literal: a signed integer,
 * or one of the parenthesised forms `(n)`, `(n/m)`, `(x.y)`. */

fn exponent_numeral(input: &str) -> Option<(usize, f64)> {
    let parsed: IResult<&str, f64> = alt((paren_rational, paren_int, paren_float, signed_int))(input);
    match parsed {
        Ok((remaining, value)) => Some((input.len() - remaining.len(), value)),
        Err(_) => None,
    }
}

fn signed_int(input: &str) -> IResult<&str, f64> {
    map(
        recognize(tuple((
            opt(alt((char('+'), char('-')))),
            one_of("123456789"),
            nom::character::complete::digit0,
        ))),
        |s: &str| s.parse::<f64>().unwrap(),
    )(input)
}

fn paren_int(input: &str) -> IResult<&str, f64> {
    delimited(char('('), signed_int, char(')'))(input)
}

fn paren_rational(input: &str) -> IResult<&str, f64> {
    map_res(
        delimited(
            char('('),
            separated_pair(signed_int, char('/'), natural),
            char(')'),
        ),
        |(num, den): (f64, f64)| if den >= 1.0 { Ok(num / den) } else { Err(()) },
    )(input)
}

fn natural(input: &str) -> IResult<&str, f64> {
    map(digit1, |s: &str| s.parse::<f64>().unwrap())(input)
}

fn paren_float(input: &str) -> IResult<&str, f64> {
    delimited(char('('), double, char(')'))(input)
}
