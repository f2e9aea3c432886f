//! Key structures, such as values, signs, and nodes.
//!
//! # Formulas
//!
//! A formula 𝐅 is built from atoms with the connectives of negation (`~`), conjunction (`&`), disjunction (`|`), and (material) implication (`->`).
//! Within the library a formula is a [Formula](crate::formula::Formula), and each subformula of the formula is a [node].
//!
//! ## (Boolean) values
//!
//! During a solve a subformula may have a value of true, a value of false, or no value.
//! This is represented by an optional boolean, with `None` standing for 'no value', see [valuation::Value].
//!
//! ## Signs
//!
//! Atoms are written with [signs](sign), and a handful of signs are reserved for constants.

pub mod node;
pub mod sign;
pub mod valuation;
