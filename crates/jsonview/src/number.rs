//! Numeric tokens: cheap classification and locale-independent parsing.
use core::str::FromStr;

use crate::{
    error::ViewError,
    unit::{CodeUnit, NUMBER_BUFFER_LEN},
};

/// Every unit is one a JSON number can contain. No grammar check, so `--1`
/// passes.
pub(crate) fn is_number_token<C: CodeUnit>(units: &[C]) -> bool {
    !units.is_empty()
        && units.iter().all(|u| {
            matches!(
                u.ascii(),
                Some(b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
            )
        })
}

fn digits<C: CodeUnit>(units: &[C]) -> usize {
    units
        .iter()
        .take_while(|u| u.ascii().is_some_and(|b| b.is_ascii_digit()))
        .count()
}

fn strip_sign<C: CodeUnit>(units: &[C]) -> &[C] {
    match units.split_first() {
        Some((first, rest)) if first.is(b'-') => rest,
        _ => units,
    }
}

/// `-?[0-9]+`
pub(crate) fn is_integer_token<C: CodeUnit>(units: &[C]) -> bool {
    let body = strip_sign(units);
    !body.is_empty() && digits(body) == body.len()
}

/// `-?(0|[1-9][0-9]*)\.[0-9]+([eE][+-]?[0-9]+)?`
pub(crate) fn is_float_token<C: CodeUnit>(units: &[C]) -> bool {
    let rest = strip_sign(units);

    let int_len = digits(rest);
    if int_len == 0 || (int_len > 1 && rest[0].is(b'0')) {
        return false;
    }
    let rest = &rest[int_len..];

    let Some((dot, rest)) = rest.split_first() else {
        return false;
    };
    let frac_len = digits(rest);
    if !dot.is(b'.') || frac_len == 0 {
        return false;
    }
    let rest = &rest[frac_len..];

    let Some((e, rest)) = rest.split_first() else {
        return true;
    };
    if !(e.is(b'e') || e.is(b'E')) {
        return false;
    }
    let rest = match rest.split_first() {
        Some((sign, tail)) if sign.is(b'+') || sign.is(b'-') => tail,
        _ => rest,
    };
    let exp_len = digits(rest);
    exp_len > 0 && exp_len == rest.len()
}

/// Parses the whole token as `T`; anything left unconsumed is an error.
pub(crate) fn parse<C: CodeUnit, T: FromStr>(units: &[C]) -> Result<T, ViewError> {
    let mut buf = [0u8; NUMBER_BUFFER_LEN];
    let text = C::number_text(units, &mut buf)?;
    text.parse::<T>().map_err(|_| ViewError::InvalidNumber)
}
