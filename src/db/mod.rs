/*!
The registry of nodes of a formula, aka. the node database.

A [Registry] owns every node of a formula, and is the only way to create a node.

# Hash-consing

Each node is stored with its canonical text, and before a node is stored the registry checks whether some node with the same canonical text has already been stored.
If so, the key to the stored node is returned and the candidate is discarded.
As a consequence, a subformula which occurs many times in a formula is a single node, and any value given to the subformula during a solve is shared between each occurrence.

```rust
# use horn_sat::db::Registry;
let mut registry = Registry::default();

let p = registry.var("p");
let q = registry.var("q");

let p_and_q = registry.and(p, q);
let q_and_p = registry.and(q, p);

assert_eq!(p_and_q, q_and_p);
assert_eq!(registry[p_and_q].text(), "(p & q)");
assert_eq!(registry.len(), 3);
```

# Order

Nodes are iterated in the order in which they were stored.
As the children of a node are always stored before the node, every child of a node is visited before the node.

# Keys

Nodes are stored in a [SlotMap], and the key to a node is a [NodeKey].
As nodes are never removed from a registry, the order of nodes in the map is (also) the order in which the nodes were stored.
Cloning a registry clones the map, and so the key to a node in some registry is also the key to the corresponding node in any clone of the registry.
*/

use std::{collections::HashMap, rc::Rc};

use slotmap::SlotMap;

use crate::{
    misc::log::targets::{self},
    structures::node::{Expr, Node},
};

slotmap::new_key_type! {
    /// The key to a node in a [Registry].
    pub struct NodeKey;
}

/// The registry of nodes of a formula.
#[derive(Clone, Default)]
pub struct Registry {
    /// The nodes.
    nodes: SlotMap<NodeKey, Node>,

    /// Keys, in the order the nodes were stored.
    order: Vec<NodeKey>,

    /// A map from canonical text to the key of the node with the text.
    index: HashMap<Rc<str>, NodeKey>,
}

impl Registry {
    /// A count of nodes in the registry.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The node with the given key, if the key is a key to some node in the registry.
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// The node with the given key, if the key is a key to some node in the registry.
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// The key of the node with the given canonical text, if some such node is in the registry.
    pub fn lookup(&self, text: &str) -> Option<NodeKey> {
        self.index.get(text).copied()
    }

    /// The key of the `index`th node stored.
    pub fn key_at(&self, index: usize) -> Option<NodeKey> {
        self.order.get(index).copied()
    }

    /// An iterator over the keys of the registry, in the order the nodes were stored.
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.order.iter().copied()
    }

    /// An iterator over the nodes of the registry, in the order the nodes were stored.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().map(|key| &self.nodes[*key])
    }

    /// An iterator over all nodes of the registry, in the order the nodes were stored.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// Stores the expression as a node, unless a node with the same canonical text is already stored.
    /// In either case, the key to the node with the canonical text of the expression is returned.
    ///
    /// If the expression is a conjunction or disjunction, the children of the expression are ordered by canonical text before the canonical text of the expression is determined.
    ///
    /// # Panics
    /// If some child of the expression is not a node of the registry.
    pub fn intern(&mut self, expr: Expr) -> NodeKey {
        let expr = match expr {
            Expr::And(left, right) => {
                let (left, right) = self.sorted(left, right);
                Expr::And(left, right)
            }
            Expr::Or(left, right) => {
                let (left, right) = self.sorted(left, right);
                Expr::Or(left, right)
            }
            other => other,
        };

        let text = self.canonical_text(&expr);

        if let Some(key) = self.index.get(text.as_str()) {
            return *key;
        }

        let text: Rc<str> = Rc::from(text);
        let key = self.nodes.insert(Node::new(expr, text.clone()));
        log::trace!(target: targets::REGISTRY, "Stored {text} as node {}", self.order.len());
        self.order.push(key);
        self.index.insert(text, key);
        key
    }

    /// The key to the atom (or constant) with the given sign.
    pub fn var(&mut self, sign: &str) -> NodeKey {
        if let Some(key) = self.index.get(sign) {
            return *key;
        }
        self.intern(Expr::Var(Rc::from(sign)))
    }

    /// The key to the negation of `atom`.
    pub fn neg(&mut self, atom: NodeKey) -> NodeKey {
        self.intern(Expr::Neg(atom))
    }

    /// The key to the conjunction of `left` and `right`.
    pub fn and(&mut self, left: NodeKey, right: NodeKey) -> NodeKey {
        self.intern(Expr::And(left, right))
    }

    /// The key to the disjunction of `left` and `right`.
    pub fn or(&mut self, left: NodeKey, right: NodeKey) -> NodeKey {
        self.intern(Expr::Or(left, right))
    }

    /// The key to the implication of `right` by `left`.
    pub fn imply(&mut self, left: NodeKey, right: NodeKey) -> NodeKey {
        self.intern(Expr::Imply(left, right))
    }

    /// Clears the solving state of every node.
    pub fn reset_values(&mut self) {
        for node in self.nodes.values_mut() {
            node.reset();
        }
    }

    /// The pair of keys, ordered by the canonical text of the nodes.
    fn sorted(&self, left: NodeKey, right: NodeKey) -> (NodeKey, NodeKey) {
        match self.nodes[left].text() > self.nodes[right].text() {
            true => (right, left),
            false => (left, right),
        }
    }

    /// The canonical text of an expression whose children are nodes of the registry.
    fn canonical_text(&self, expr: &Expr) -> String {
        match expr {
            Expr::Var(sign) => sign.to_string(),
            Expr::Neg(atom) => format!("~{}", self.nodes[*atom].text()),
            Expr::And(left, right) => {
                format!("({} & {})", self.nodes[*left].text(), self.nodes[*right].text())
            }
            Expr::Or(left, right) => {
                format!("({} | {})", self.nodes[*left].text(), self.nodes[*right].text())
            }
            Expr::Imply(left, right) => {
                format!("({} -> {})", self.nodes[*left].text(), self.nodes[*right].text())
            }
        }
    }
}

impl std::ops::Index<NodeKey> for Registry {
    type Output = Node;

    fn index(&self, key: NodeKey) -> &Self::Output {
        &self.nodes[key]
    }
}

impl std::ops::IndexMut<NodeKey> for Registry {
    fn index_mut(&mut self, key: NodeKey) -> &mut Self::Output {
        &mut self.nodes[key]
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn intern_is_idempotent() {
        let mut registry = Registry::default();
        let p = registry.var("p");
        let not_p = registry.neg(p);

        assert_eq!(registry.var("p"), p);
        assert_eq!(registry.intern(Expr::Neg(p)), not_p);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn commutative_children_are_sorted() {
        let mut registry = Registry::default();
        let q = registry.var("q");
        let p = registry.var("p");

        let q_or_p = registry.or(q, p);
        assert_eq!(registry[q_or_p].expr(), &Expr::Or(p, q));
        assert_eq!(registry[q_or_p].text(), "(p | q)");
        assert_eq!(registry.or(p, q), q_or_p);
    }

    #[test]
    fn implication_is_ordered() {
        let mut registry = Registry::default();
        let p = registry.var("p");
        let q = registry.var("q");

        let p_q = registry.imply(p, q);
        let q_p = registry.imply(q, p);

        assert_ne!(p_q, q_p);
        assert_eq!(registry[q_p].text(), "(q -> p)");
    }

    #[test]
    fn sorting_compares_text() {
        let mut registry = Registry::default();
        let p = registry.var("p");
        let not_p = registry.neg(p);
        let r = registry.var("r");

        // '(' < 'r' < '~'
        let not_p_and_r = registry.and(not_p, r);
        assert_eq!(registry[not_p_and_r].text(), "(r & ~p)");

        let p_and_r = registry.and(r, p);
        let conjunction = registry.and(not_p_and_r, p_and_r);
        assert_eq!(registry[conjunction].text(), "((p & r) & (r & ~p))");
    }

    #[test]
    fn insertion_order() {
        let mut registry = Registry::default();
        let p = registry.var("p");
        let q = registry.var("q");
        let p_and_q = registry.and(q, p);
        let _ = registry.var("p");

        assert_eq!(registry.keys().collect::<Vec<_>>(), vec![p, q, p_and_q]);
        assert_eq!(registry.key_at(2), Some(p_and_q));
        assert_eq!(registry.lookup("(p & q)"), Some(p_and_q));
    }

    #[test]
    fn clones_share_keys() {
        let mut registry = Registry::default();
        let p = registry.var("p");
        registry[p].value = Some(true);

        let mut clone = registry.clone();
        assert_eq!(clone[p].value, Some(true));

        clone[p].value = Some(false);
        assert_eq!(registry[p].value, Some(true));
    }
}
