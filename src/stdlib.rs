// SPDX: CC0-1.0

use crate::Number;
use std::collections::BTreeMap; // assumes Number = f64

pub type Fun = fn(Number) -> Number;
pub type Functions = BTreeMap<&'static str, Fun>;

pub const DEFAULT_FUNCTION: &str = "x-1";

pub fn standard_functions() -> Functions {
    let mut ret: Functions = BTreeMap::new();

    // polynomials
    ret.insert(DEFAULT_FUNCTION, shifted);
    ret.insert("x", identity);
    ret.insert("x^2", square);
    ret.insert("x^3", cube);
    ret.insert("1/x", reciprocal);

    ret.insert("abs", Number::abs);
    ret.insert("sqrt", Number::sqrt);
    ret.insert("ln", Number::ln);
    ret.insert("exp", Number::exp);

    // trig
    ret.insert("sin", Number::sin);
    ret.insert("cos", Number::cos);
    ret.insert("tan", Number::tan);
    ret.insert("asin", Number::asin);
    ret.insert("acos", Number::acos);
    ret.insert("atan", Number::atan);
    ret
}

/// Name in `functions` most similar to `name`, if any is similar enough to
/// suggest.
pub fn most_similar<'a, V>(
    functions: &'a BTreeMap<&'static str, V>,
    name: &str,
) -> Option<&'a str> {
    let name = name.to_ascii_lowercase();
    functions
        .keys()
        .map(|key| {
            (
                strsim::normalized_damerau_levenshtein(&name, &key.to_ascii_lowercase()),
                *key,
            )
        })
        .reduce(|(acc_sim, acc_key), (elem_sim, elem_key)| {
            if elem_sim > acc_sim {
                (elem_sim, elem_key)
            } else {
                (acc_sim, acc_key)
            }
        })
        .and_then(|(sim, key)| (sim > 0.3).then_some(key))
}

pub fn shifted(x: Number) -> Number {
    x - 1.0
}

pub fn identity(x: Number) -> Number {
    x
}

pub fn square(x: Number) -> Number {
    x * x
}

pub fn cube(x: Number) -> Number {
    x * x * x
}

pub fn reciprocal(x: Number) -> Number {
    1.0 / x
}
