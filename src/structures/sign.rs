/*!
The signs of atoms, and the reserved vocabulary of a formula.

A sign is a string of non-whitespace characters which is not a bracket or a connective.
Examples: `p`, `atom_one`, `96`, `x-y`.

Two signs are reserved for constants:
- [TOP] (`T`), which is always true.
- [BOTTOM] (`F`), which is always false.

Signs are case sensitive, and so `t` and `f` are (non-constant) atoms.
*/

/// The sign of the constant true.
pub const TOP: &str = "T";

/// The sign of the constant false.
pub const BOTTOM: &str = "F";

/// The value of a sign, if the sign is the sign of a constant.
///
/// ```rust
/// # use horn_sat::structures::sign;
/// assert_eq!(sign::constant("T"), Some(true));
/// assert_eq!(sign::constant("F"), Some(false));
/// assert_eq!(sign::constant("p"), None);
/// ```
pub fn constant(sign: &str) -> Option<bool> {
    match sign {
        TOP => Some(true),
        BOTTOM => Some(false),
        _ => None,
    }
}

/// Whether the sign is the sign of a constant.
pub fn is_constant(sign: &str) -> bool {
    constant(sign).is_some()
}
