use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::one_of;

// -- Grammar ------------------------------------------------------------------
//
//   numeral  := sign? ("Infinity" | decimal)
//   decimal  := (digits ("." digits?)? | "." digits) exponent?
//   exponent := ("e" | "E") sign? digits

fn sign(input: &mut &str) -> ModalResult<()> {
    one_of(['+', '-']).void().parse_next(input)
}

fn exponent(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), opt(sign), digit1)
        .void()
        .parse_next(input)
}

fn decimal(input: &mut &str) -> ModalResult<()> {
    (
        alt((
            (digit1, opt(('.', digit0))).void(),
            ('.', digit1).void(),
        )),
        opt(exponent),
    )
        .void()
        .parse_next(input)
}

pub(super) fn numeral<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (opt(sign), alt(("Infinity".void(), decimal)))
        .take()
        .parse_next(input)
}
