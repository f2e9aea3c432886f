/*!
Values, models, and valuations.

A [Value] is the (possibly absent) value of a node during a solve.

A valuation is a (partial) function from atoms to truth values, and within the library is anything which implements [Valuation].
The trait is implemented for hash and b-tree maps from (something which borrows as) a string to booleans.

A [Model] is the valuation returned from a satisfiable solve, and maps each (non-constant) atom of a formula to a value.

```rust
# use std::collections::HashMap;
# use horn_sat::structures::valuation::Valuation;
let mut valuation = HashMap::new();
valuation.insert("p", true);

assert_eq!(valuation.value_of("p"), Some(true));
assert_eq!(valuation.value_of("q"), None);
```
*/

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// The value of a node: `Some(true)`, `Some(false)`, or no value (`None`).
pub type Value = Option<bool>;

/// A model of a formula, from the sign of each atom to the value of the atom.
pub type Model = BTreeMap<String, bool>;

/// A valuation is something which stores the value of an atom, given the sign of the atom.
pub trait Valuation {
    /// The value of the atom with the given sign, if the atom has some value.
    fn value_of(&self, sign: &str) -> Option<bool>;
}

impl<K: Borrow<str> + Hash + Eq, S: BuildHasher> Valuation for HashMap<K, bool, S> {
    fn value_of(&self, sign: &str) -> Option<bool> {
        self.get(sign).copied()
    }
}

impl<K: Borrow<str> + Ord> Valuation for BTreeMap<K, bool> {
    fn value_of(&self, sign: &str) -> Option<bool> {
        self.get(sign).copied()
    }
}
