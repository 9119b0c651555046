//! # Field Formatter — Span-Rendering Primitives
//!
//! Stateless functions that render one logical value into its
//! exact-width character span. Widths are counted in characters, not
//! bytes, so accented names pad correctly.
//!
//! Truncation is deliberately **not** performed here: a value wider
//! than its span is a validation error caught upstream, not a silent
//! cut. The padding functions return over-wide input unchanged, which
//! the assembler's width assertion then catches — in correct operation
//! that path is unreachable.

use chrono::NaiveDate;

use crate::layout::{CaseFold, FieldSpec, Pad};

/// Pad `value` on the left with `pad` up to `width` characters.
///
/// Values already at or beyond `width` are returned unchanged — no
/// truncation.
pub fn pad_left(value: &str, width: usize, pad: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut out = String::with_capacity(width);
    for _ in 0..width - len {
        out.push(pad);
    }
    out.push_str(value);
    out
}

/// Pad `value` on the right with `pad` up to `width` characters.
///
/// Values already at or beyond `width` are returned unchanged — no
/// truncation.
pub fn pad_right(value: &str, width: usize, pad: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut out = String::with_capacity(width);
    out.push_str(value);
    for _ in 0..width - len {
        out.push(pad);
    }
    out
}

/// Apply a case transform.
pub fn fold_case(value: &str, case: CaseFold) -> String {
    match case {
        CaseFold::None => value.to_string(),
        CaseFold::Upper => value.to_uppercase(),
        CaseFold::Lower => value.to_lowercase(),
    }
}

/// Render a populated value into its span: case-fold, then pad per the
/// field spec.
pub fn render_span(value: &str, spec: &FieldSpec) -> String {
    let folded = fold_case(value, spec.case);
    match spec.pad {
        Pad::Left(c) => pad_left(&folded, spec.width, c),
        Pad::Right(c) => pad_right(&folded, spec.width, c),
    }
}

/// The all-spaces span for a conditionally blanked field.
pub fn blank_span(spec: &FieldSpec) -> String {
    " ".repeat(spec.width)
}

/// Render a calendar date as `DD/MM/YYYY` — always ten characters for
/// four-digit years, which the validator guarantees.
///
/// The date is a pure calendar value: no timezone interpretation, no
/// time component.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Field;

    #[test]
    fn pad_left_zero_fills() {
        assert_eq!(pad_left("3", 2, '0'), "03");
        assert_eq!(pad_left("12", 2, '0'), "12");
    }

    #[test]
    fn pad_right_space_fills() {
        assert_eq!(pad_right("AB", 5, ' '), "AB   ");
        assert_eq!(pad_right("", 3, ' '), "   ");
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(pad_left("12345", 2, '0'), "12345");
        assert_eq!(pad_right("12345", 2, ' '), "12345");
    }

    #[test]
    fn padding_is_idempotent() {
        let once = pad_right("Rossi", 10, ' ');
        let twice = pad_right(&once, 10, ' ');
        assert_eq!(once, twice);
    }

    #[test]
    fn padding_counts_characters_not_bytes() {
        // 'È' is two bytes but one character.
        let padded = pad_right("È", 3, ' ');
        assert_eq!(padded.chars().count(), 3);
    }

    #[test]
    fn fold_case_variants() {
        assert_eq!(fold_case("Rossi", CaseFold::Upper), "ROSSI");
        assert_eq!(fold_case("Mario", CaseFold::Lower), "mario");
        assert_eq!(fold_case("MiXeD", CaseFold::None), "MiXeD");
    }

    #[test]
    fn render_span_folds_then_pads() {
        let spec = FieldSpec {
            field: Field::Cognome,
            name: "cognome",
            width: 8,
            pad: Pad::Right(' '),
            case: CaseFold::Upper,
        };
        assert_eq!(render_span("Rossi", &spec), "ROSSI   ");
    }

    #[test]
    fn blank_span_is_all_spaces() {
        let spec = FieldSpec {
            field: Field::ComuneNascita,
            name: "comune-nascita",
            width: 9,
            pad: Pad::Right(' '),
            case: CaseFold::None,
        };
        assert_eq!(blank_span(&spec), "         ");
    }

    #[test]
    fn date_renders_dd_mm_yyyy() {
        let d = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        assert_eq!(format_date(d), "01/01/1980");
        assert_eq!(format_date(d).len(), 10);
    }

    #[test]
    fn date_renders_end_of_year() {
        let d = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(format_date(d), "31/12/2026");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pad_right_idempotent(s in "[A-Za-zÀ-ö ]{0,40}", width in 0usize..60) {
                let once = pad_right(&s, width, ' ');
                prop_assert_eq!(pad_right(&once, width, ' '), once);
            }

            #[test]
            fn short_values_pad_to_exact_width(s in "[A-Za-z]{0,10}", width in 10usize..30) {
                prop_assert_eq!(pad_left(&s, width, '0').chars().count(), width);
                prop_assert_eq!(pad_right(&s, width, ' ').chars().count(), width);
            }

            #[test]
            fn wide_values_pass_through_untruncated(s in "[A-Za-z]{10,40}", width in 0usize..10) {
                prop_assert_eq!(pad_left(&s, width, '0'), s.clone());
                prop_assert_eq!(pad_right(&s, width, ' '), s);
            }
        }
    }
}
