/*!
Procedures on formulas.

- [horn], the rewrite of a formula to Horn form.
- [bcp], boolean constraint propagation, top-down and bottom-up.
- [linear], the linear procedure for formulas in Horn form.
- [cubic], the cubic procedure for any formula, by splitting.
- [evaluate], the value of a formula on a (total) valuation.

Propagation, and so both solves, is defined only for formulas in Horn form.
Rewriting and evaluation are defined for any formula.
*/

pub mod bcp;
pub mod cubic;
pub mod evaluate;
pub mod horn;
pub mod linear;
