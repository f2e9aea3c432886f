/*!
Formulas, as a registry of nodes together with a root node.

A [Formula] owns exactly one [Registry], and every node reachable from the root of the formula is a node of the registry.

Formulas are typically [parsed](crate::builder) from text, [rewritten](crate::procedures::horn) to Horn form, and then solved within some [context](crate::context).

# Solving state

During a solve the nodes of a formula are given values, and this state is retained after the solve so the values may be inspected.
Solves [reset](Formula::reset) the state of a formula before starting, and so a formula may be solved any number of times.

```rust
# use horn_sat::context::Context;
# use horn_sat::formula::Formula;
let mut the_context = Context::default();
let mut formula = Formula::parse("p & ~q").unwrap();

assert!(the_context.solve_linear(&mut formula).is_ok());
assert_eq!(formula.value_of_sign("q"), Some(Some(false)));

formula.reset();
assert_eq!(formula.value_of_sign("q"), Some(None));
```

# Clones

Cloning a formula clones the registry of the formula in bulk, together with the solving state.
The clone shares no node with the original, and so the clone may be given values without changing the original.
Further, as the registry is cloned as a whole, the [key](NodeKey) to some node in the original is also the key to the corresponding node in the clone.
*/

use crate::{
    db::{NodeKey, Registry},
    reports::Decision,
    structures::{
        node::{Expr, Node},
        sign,
        valuation::{Model, Value},
    },
};

/// A formula.
#[derive(Clone)]
pub struct Formula {
    /// The nodes of the formula.
    pub(crate) registry: Registry,

    /// The node of the formula itself.
    pub(crate) root: NodeKey,
}

impl Formula {
    /// A formula from a registry and the key to some node of the registry.
    pub fn from_parts(registry: Registry, root: NodeKey) -> Self {
        Formula { registry, root }
    }

    /// The key to the root node of the formula.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// The registry of the formula.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A count of the (distinct) subformulas of the formula.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether the formula has no nodes, which is never the case for a formula built by the library.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The node with the given key.
    ///
    /// # Panics
    /// If the key is not the key to some node of the formula.
    pub fn node(&self, key: NodeKey) -> &Node {
        &self.registry[key]
    }

    /// The key of the node with the given canonical text, if the formula has such a subformula.
    pub fn key_of(&self, text: &str) -> Option<NodeKey> {
        self.registry.lookup(text)
    }

    /// The value of the node with the given key.
    pub fn value_of(&self, key: NodeKey) -> Value {
        self.registry[key].value
    }

    /// The value of the atom with the given sign, or nothing if the formula does not contain the atom.
    pub fn value_of_sign(&self, sign: &str) -> Option<Value> {
        self.registry
            .lookup(sign)
            .map(|key| self.registry[key].value)
    }

    /// An iterator over the signs of atoms in the formula, excluding constants, in the order the atoms were stored.
    pub fn signs(&self) -> impl Iterator<Item = &str> {
        self.registry
            .nodes()
            .filter_map(|node| node.sign())
            .filter(|atom| !sign::is_constant(atom))
    }

    /// Whether every subformula of the formula is an atom, negation, or conjunction.
    pub fn is_horn(&self) -> bool {
        self.registry.nodes().all(|node| node.expr().is_horn())
    }

    /// Clears the solving state of every node.
    pub fn reset(&mut self) {
        self.registry.reset_values();
    }

    /// Whether any node of the formula was assigned a value contradicting the value of the node.
    pub fn found_contradiction(&self) -> bool {
        self.registry.nodes().any(|node| node.contradiction)
    }

    /// Whether every node of the formula has some value.
    pub fn fully_assigned(&self) -> bool {
        self.registry.nodes().all(|node| node.value.is_some())
    }

    /// The value of each (non-constant) atom which has some value.
    pub fn model(&self) -> Model {
        self.registry
            .nodes()
            .filter_map(|node| match (node.expr(), node.value) {
                (Expr::Var(atom), Some(value)) if !sign::is_constant(atom) => {
                    Some((atom.to_string(), value))
                }
                _ => None,
            })
            .collect()
    }

    /// The decision supported by the current solving state of the formula.
    ///
    /// - Unsatisfiable, if a contradiction has been found.
    /// - Satisfiable, if every node has some value.
    /// - Unknown, otherwise.
    pub fn decision(&self) -> Decision {
        if self.found_contradiction() {
            Decision::Unsat
        } else if self.fully_assigned() {
            Decision::Sat(self.model())
        } else {
            Decision::Unknown
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.registry[self.root])
    }
}

impl std::fmt::Debug for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Formula({})", self.registry[self.root])
    }
}
