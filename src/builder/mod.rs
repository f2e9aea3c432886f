/*!
Tools for building a formula.

# Parsing

Formulas are parsed from text with [Formula::parse](crate::formula::Formula::parse), or equivalently through [FromStr](std::str::FromStr).

The vocabulary of a formula is:

| Token | Meaning |
|-------|---------|
| `(` `)`, `[` `]`, `{` `}` | grouping, all three pairs are equivalent |
| `~`, `neg` | negation |
| `&`, `and` | conjunction |
| `\|`, `or` | disjunction |
| `->`, `implies` | implication |
| `T`, `F` | the constants true and false |

Words are case-insensitive, so `AND` and `And` are conjunction.
Any other string of non-whitespace characters is the sign of an atom.

Within a group negation applies to the (already parsed) formula immediately to its right, and connectives are then applied strictly left to right, *without* precedence.
So, `a & b | c` is `(a & b) | c` while `a | b & c` is `(a | b) & c`.

```rust
# use horn_sat::formula::Formula;
let formula = Formula::parse("a & b | c").unwrap();
assert_eq!(formula.to_string(), "((a & b) | c)");

let formula = Formula::parse("~~p implies [q or {r AND ~s}]").unwrap();
// Disjunction is commutative, and '(' is before 'q'.
assert_eq!(formula.to_string(), "(~~p -> ((r & ~s) | q))");
```

# Structural sharing

Every node is built through the [registry](crate::db::Registry) of the formula, and so a subformula which appears twice in the text is a single node of the formula.

```rust
# use horn_sat::formula::Formula;
let formula = Formula::parse("(p | q) & (q | p)").unwrap();
assert_eq!(formula.to_string(), "((p | q) & (p | q))");
assert_eq!(formula.len(), 4);
```
*/

mod parse;
