use std::{
    collections::HashMap,
    ops::{Add, Div, Mul, Sub},
};

use lazy_static::lazy_static;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

pub type BinaryHandler = fn(f64, f64) -> f64;

lazy_static! {
    pub static ref BINARY_LOOKUP: HashMap<&'static str, (BindingPower, BinaryHandler)> = {
        let mut map: HashMap<&'static str, (BindingPower, BinaryHandler)> = HashMap::new();
        map.insert("+", (BindingPower::Additive, <f64 as Add>::add as BinaryHandler));
        map.insert("-", (BindingPower::Additive, <f64 as Sub>::sub as BinaryHandler));
        map.insert("*", (BindingPower::Multiplicative, <f64 as Mul>::mul as BinaryHandler));
        map.insert("/", (BindingPower::Multiplicative, <f64 as Div>::div as BinaryHandler));
        map
    };
}

/// Returns the handler for `token` if it is an operator binding at exactly `bp`.
///
/// Only Operator tokens qualify, so punctuation that happens to read `+` never folds.
pub fn binary_operator(token: &Token, bp: BindingPower) -> Option<BinaryHandler> {
    if token.kind != TokenKind::Operator {
        return None;
    }

    match BINARY_LOOKUP.get(token.value.as_str()) {
        Some((power, handler)) if *power == bp => Some(*handler),
        _ => None,
    }
}
