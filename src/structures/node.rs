/*!
Nodes, the subformulas of a formula.

Each node is one of five kinds of [expression](Expr), and the children of a node are referenced by [key](NodeKey) into the [registry](crate::db::Registry) which owns the node.

| Expression | Children | Canonical text |
|------------|----------|----------------|
| `Var`      | none, a sign | the sign |
| `Neg`      | one      | `~a` |
| `And`      | two, ordered by canonical text | `(a & b)` |
| `Or`       | two, ordered by canonical text | `(a | b)` |
| `Imply`    | two, in the given order | `(a -> b)` |

The canonical text of a node is used both for display and as the key of the node in a registry.
As conjunction and disjunction are commutative, the children of a conjunction or disjunction are sorted by (lexicographic) comparison of the canonical text of each child, so that `q & p` and `p & q` are the same node.

Alongside the expression, a node has some solving state:
- A [Value].
- A flag noting whether some value contradicting the value of the node was assigned to the node.

Solving state is transient, and may be cleared with [reset](Node::reset).
*/

use std::rc::Rc;

use crate::{db::NodeKey, structures::valuation::Value};

/// The expression of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// An atom, or a constant.
    Var(Rc<str>),

    /// The negation of a node.
    Neg(NodeKey),

    /// The conjunction of two nodes.
    And(NodeKey, NodeKey),

    /// The disjunction of two nodes.
    Or(NodeKey, NodeKey),

    /// The implication of the second node by the first.
    Imply(NodeKey, NodeKey),
}

impl Expr {
    /// An iterator over the children of the expression, in order.
    pub fn children(&self) -> impl Iterator<Item = NodeKey> {
        let (first, second) = match self {
            Expr::Var(_) => (None, None),
            Expr::Neg(atom) => (Some(*atom), None),
            Expr::And(left, right) | Expr::Or(left, right) | Expr::Imply(left, right) => {
                (Some(*left), Some(*right))
            }
        };
        first.into_iter().chain(second)
    }

    /// Whether the expression may appear in a formula in Horn form.
    pub fn is_horn(&self) -> bool {
        matches!(self, Expr::Var(_) | Expr::Neg(_) | Expr::And(..))
    }

    /// Whether the children of the expression are unordered.
    pub fn is_commutative(&self) -> bool {
        matches!(self, Expr::And(..) | Expr::Or(..))
    }
}

/// A node of a formula.
#[derive(Clone, Debug)]
pub struct Node {
    /// The expression of the node.
    expr: Expr,

    /// The canonical text of the node.
    text: Rc<str>,

    /// The value of the node.
    pub value: Value,

    /// Whether a value contradicting the value of the node was assigned.
    pub contradiction: bool,
}

impl Node {
    /// A node with no value, and so no contradiction.
    pub(crate) fn new(expr: Expr, text: Rc<str>) -> Self {
        Node {
            expr,
            text,
            value: None,
            contradiction: false,
        }
    }

    /// The expression of the node.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The canonical text of the node.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The sign of the node, if the node is an atom or constant.
    pub fn sign(&self) -> Option<&str> {
        match &self.expr {
            Expr::Var(sign) => Some(&**sign),
            _ => None,
        }
    }

    /// Clears the solving state of the node.
    pub fn reset(&mut self) {
        self.value = None;
        self.contradiction = false;
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
