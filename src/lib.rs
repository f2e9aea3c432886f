//! A library for determining the satisfiability of propositional formulas through boolean constraint propagation over hash-consed expression graphs.
//!
//! horn_sat reads formulas built from atoms, negation, conjunction, disjunction, and implication, and decides satisfiability in one of two ways:
//! - A linear procedure, restricted to formulas in Horn form (atoms, negation, and conjunction only).
//!   The procedure is a single sweep of propagation, and so runs in time linear in the size of the formula.
//! - A cubic procedure, for any formula.
//!   The formula is rewritten to Horn form, the linear procedure is applied, and if the linear procedure is indeterminate each undetermined subformula is split on.
//!
//! The library is small, and is intended as a verification engine for small formulas rather than as a competitive solver.
//! For a solver with clause learning, watched literals, etc. see [MiniSAT](http://minisat.se).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [formula](crate::formula::Formula).
//!
//! - A formula owns a [registry](crate::db::Registry) of [nodes](crate::structures::node), one node for each distinct subformula.
//!   Every node is created through the registry, and the registry ensures structurally identical subformulas are the same node (aka. 'hash-consing').
//!   As a consequence, a formula is a directed acyclic graph rather than a tree.
//! - Nodes carry a (transient) value, and a note on whether some contradictory value was assigned to the node.
//!   These are the only parts of a node which change after the node is created.
//! - Formulas are [built](crate::builder) by parsing text.
//! - Solves take place within a [context](crate::context), which holds a [configuration](crate::config) and some counters.
//!
//! Useful starting points, then, may be:
//! - The [procedures] to inspect propagation, rewriting, and the solves.
//! - The [registry](crate::db) to inspect the representation of a formula.
//! - The [configuration](crate::config) to see which choices can be made about a solve.
//!
//! # Examples
//!
//! + Parse a formula, rewrite the formula to Horn form, and solve with the linear procedure.
//!
//! ```rust
//! # use horn_sat::config::Config;
//! # use horn_sat::context::Context;
//! # use horn_sat::formula::Formula;
//! # use horn_sat::reports::Decision;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let formula = Formula::parse("~(p | q) & ~r").unwrap();
//! let mut horn = the_context.horn(&formula);
//!
//! match the_context.solve_linear(&mut horn) {
//!     Ok(Decision::Sat(model)) => {
//!         assert_eq!(model.get("p"), Some(&false));
//!         assert_eq!(model.get("q"), Some(&false));
//!         assert_eq!(model.get("r"), Some(&false));
//!         assert_eq!(formula.evaluate(&model), Ok(true));
//!     }
//!     _ => panic!("Expected a model"),
//! }
//! ```
//!
//! + Solve a formula which the linear procedure cannot decide.
//!
//! ```rust
//! # use horn_sat::context::Context;
//! # use horn_sat::formula::Formula;
//! # use horn_sat::reports::{Decision, Report};
//! let mut the_context = Context::default();
//! let formula = Formula::parse("~(p and q)").unwrap();
//!
//! let mut horn = the_context.horn(&formula);
//! assert_eq!(the_context.solve_linear(&mut horn), Ok(Decision::Unknown));
//!
//! let decision = the_context.solve_cubic(&formula).unwrap();
//! assert_eq!(decision.report(), Report::Satisfiable);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is provided by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to splitting can be filtered with `RUST_LOG=split …` or,
//! - Contradictions found during propagation can be found with `RUST_LOG=propagation=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod formula;
pub mod reports;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
