//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! heron_sat is a conflict-driven clause-learning solver, built around two-watched-literal propagation, breadth-first conflict analysis to a unique implication point, non-chronological backtracking, scheduled restarts, and decayed activity.
//! The choice of literal to decide on is made by a pluggable [branching strategy](crate::branching).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [formula](crate::formula).
//!
//! Formulas are built with a [configuration](crate::config), and clauses may be added through the [DIMACS](crate::formula::Formula::read_dimacs) representation of a formula or [programatically](crate::formula::Formula::add_clause).
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - Clauses, original and learnt, are stored in a [clause database](crate::db::clause).
//! - A valuation, together with the occurrences and activity of each variable, is stored in a [variable database](crate::db::variable).
//! - The sequence of assignments made is stored on the [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the elements of a solve and their representation (literals, clauses, etc.)
//! - The [configuration](crate::config) to see what is supported.
//!
//! # Examples
//!
//! + Find (a count of) all valuations of some collection of variables.
//!
//! ```rust
//! # use heron_sat::formula::Formula;
//! # use heron_sat::reports::Report;
//! let mut the_formula = Formula::default();
//! let variables = [1, 2, 3, 4, 5];
//! for variable in variables {
//!     assert!(the_formula.add_clause([variable, -variable]).is_ok());
//! }
//!
//! let mut count = 0;
//!
//! loop {
//!     assert!(the_formula.solve().is_ok());
//!
//!     match the_formula.report() {
//!         Report::Satisfiable => {}
//!         _ => break,
//!     };
//!
//!     count += 1;
//!
//!     // Block the current valuation.
//!     let clause = the_formula
//!         .valuation_ints()
//!         .iter()
//!         .map(|literal| -literal)
//!         .collect::<Vec<_>>();
//!
//!     match the_formula.add_clause(clause) {
//!         Ok(_) => {}
//!         Err(_) => break,
//!     };
//! }
//!
//! assert_eq!(count, 2_usize.pow(variables.len() as u32));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use heron_sat::formula::Formula;
//! # use heron_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_formula = Formula::default();
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ");
//!
//! assert!(the_formula.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! No logger is provided by the library.
//! The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so, for example:
//!
//! ```sh
//! RUST_LOG=restart=info,decay=info cargo run --features log -- problem.cnf
//! ```

pub mod branching;
pub mod builder;
pub mod config;
pub mod db;
pub mod formula;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
pub mod verify;
