/*
 * Sign normalization for additive chains
 *
 * Goal: never emit `a + -b` or `a - -b`, and lead with a positive term.
 *
 * Algorithm:
 *   1. sense(term) = term text starts with '-'
 *      for '-', every term after the first has its sense flipped
 *   2. stable sort: positive sense first
 *   3. first still negative and several terms -> flip all, wrap in -( ... )
 *   4. join with ' + ' / ' - ' by sense; negative text loses its '-'
 *
 * Examples:
 *   -(a, b)         -> a - b
 *   +(a, -b)        -> a - b
 *   +(-a, b)        -> b - a
 *   +(-a, -b)       -> -(a + b)
 *   -(a, (b + c))   -> a - (b + c)
 */

use crate::features::arithmetic::domain::{ChainOp, NormalizedChain, Term};

struct SignedTerm<'a> {
    term: &'a Term,
    text_negative: bool,
    subtract: bool,
}

impl SignedTerm<'_> {
    fn render(&self, leading: bool) -> &str {
        if self.text_negative {
            self.term
                .plain
                .strip_prefix('-')
                .unwrap_or(&self.term.plain)
        } else if !leading && (self.subtract || self.term.plain.starts_with('-')) {
            // subtracting a chain keeps its grouping, and so does an
            // inner leading minus like `-a * d`
            &self.term.grouped
        } else {
            &self.term.plain
        }
    }
}

/// Render an additive chain with canonical signs
pub fn normalize(op: ChainOp, terms: &[Term]) -> NormalizedChain {
    if terms.len() <= 1 {
        // nothing to absorb a sign into
        return NormalizedChain {
            text: terms.first().map(|t| t.plain.clone()).unwrap_or_default(),
            negated: false,
        };
    }

    let mut signed: Vec<SignedTerm<'_>> = terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            let text_negative = term.is_negative();
            let subtract = if op == ChainOp::Subtract && i > 0 {
                !text_negative
            } else {
                text_negative
            };
            SignedTerm {
                term,
                text_negative,
                subtract,
            }
        })
        .collect();

    // Vec::sort_by_key is stable
    signed.sort_by_key(|s| s.subtract);

    let negated = signed[0].subtract;
    if negated {
        for s in &mut signed {
            s.subtract = !s.subtract;
        }
    }

    let mut text = String::new();
    for (i, s) in signed.iter().enumerate() {
        if i > 0 {
            text.push_str(if s.subtract { " - " } else { " + " });
        }
        text.push_str(s.render(i == 0));
    }

    if negated {
        text = format!("-({})", text);
    }

    NormalizedChain { text, negated }
}
