//! Determines the satisfiability of a formula.
//!
//! # Overview
//!
//! A solve moves between a handful of [states](SearchState), beginning with propagation:
//!
//! - **Propagating**: the formula is closed under unit implication, from the trail.
//!   + If some clause is false, the solve moves to *conflicted*.
//!   + If every clause is satisfied, the solve moves to *satisfied*.
//!   + Otherwise, the solve moves to *deciding*.
//! - **Deciding**: scheduled restarts and decay take place, and then a literal is chosen by the [branching strategy](crate::branching) and recorded as a retryable decision.
//!   If a restart took place, the solve moves back to propagating without a decision, as the emptied trail may have consequences.
//! - **Conflicted**: the conflict is [analysed](crate::procedures::analysis), possibly learning a clause.
//! - **Backtracking**: a [backjump](crate::procedures::backjump) is made, non-chronologically if a clause was learnt and chronologically otherwise.
//!   If the trail is exhausted, the formula is unsatisfiable. Otherwise the solve moves back to propagating.
//! - **Satisfied**: every variable without a value is given the value true, and the formula is satisfiable.
//! - **Exhausted**: the formula is unsatisfiable.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                      +----------+
//!   +------------------| deciding |<-------------+
//!   |                  +----------+              |
//!   |                                            | some clause is open
//!   ⌄                                            |
//! +-------------+  every clause satisfied  +-----------+
//! | satisfied   |<-------------------------|propagating|<---------+
//! +-------------+                          +-----------+          |
//!                                                |                |
//!                                    some clause | is false       |
//!                                                ⌄                |
//!                                          +------------+   +--------------+
//!                                          | conflicted |-->| backtracking |
//!                                          +------------+   +--------------+
//!                                                                 |
//!                                                                 | trail exhausted
//!                                                                 ⌄
//!                                                           +-----------+
//!                                                           | exhausted |
//!                                                           +-----------+
//! ```
//!
//! If a time limit is configured, the limit is checked before each decision, and on exceeding the limit the solve reports [Unknown](Report::Unknown).
//!
//! # Example
//!
//! ```rust
//! # use heron_sat::formula::Formula;
//! # use heron_sat::reports::Report;
//! let mut the_formula = Formula::default();
//!
//! let _ = the_formula.add_clause([-1, 2]);
//! let _ = the_formula.add_clause([1, -2]);
//!
//! assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_formula.value_of(1), the_formula.value_of(2));
//!
//! let _ = the_formula.add_clause([1]);
//! let _ = the_formula.add_clause([-2]);
//!
//! assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
//! ```

use crate::{
    branching::{self, BranchingStrategy},
    db::ClauseKey,
    formula::{Formula, FormulaState},
    misc::log::targets::{self},
    procedures::analysis::AnalysisResult,
    reports::Report,
    structures::literal::Literal,
    types::err::{BcpError, ErrorKind},
};

/// The states of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    Propagating,
    Deciding,
    Conflicted(ClauseKey),
    Backtracking(AnalysisResult),
    Satisfied,
    Exhausted,
}

impl Formula {
    /// Determines the satisfiability of the formula, using the branching strategy given by the configuration.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let mut strategy = branching::from_config(&self.config);
        self.solve_with(strategy.as_mut())
    }

    /// For documentation see [procedures::solve](crate::procedures::solve).
    pub fn solve_with(
        &mut self,
        strategy: &mut dyn BranchingStrategy,
    ) -> Result<Report, ErrorKind> {
        let total_time = std::time::Instant::now();
        self.state = FormulaState::Solving;

        log::info!(target: targets::SOLVE,
            "Solving {} clauses over {} variables with {}",
            self.clause_db.count(),
            self.variable_db.count(),
            strategy.name()
        );

        let mut state = SearchState::Propagating;

        'solve_loop: loop {
            state = match state {
                SearchState::Propagating => match self.propagate_to_fixpoint() {
                    Err(BcpError::Conflict(key)) => SearchState::Conflicted(key),

                    Ok(()) => match self.all_satisfied() {
                        true => SearchState::Satisfied,
                        false => SearchState::Deciding,
                    },
                },

                SearchState::Deciding => {
                    self.counters.time = total_time.elapsed();
                    if self
                        .config
                        .time_limit
                        .is_some_and(|limit| self.counters.time >= limit)
                    {
                        log::info!(target: targets::SOLVE, "Time limit reached");
                        self.state = FormulaState::Unknown;
                        break 'solve_loop;
                    }

                    let restarted = self.restart_check();
                    self.decay_check();

                    match restarted {
                        true => SearchState::Propagating,
                        false => {
                            let decision = self.make_decision(strategy)?;
                            self.assign(decision, None, true);
                            SearchState::Propagating
                        }
                    }
                }

                SearchState::Conflicted(key) => {
                    self.counters.total_conflicts += 1;
                    SearchState::Backtracking(self.register_conflict(key)?)
                }

                SearchState::Backtracking(analysis) => match analysis {
                    AnalysisResult::Learnt { cut, .. } => {
                        match self.non_chronological_backtrack(&cut) {
                            true => SearchState::Propagating,
                            false => SearchState::Exhausted,
                        }
                    }

                    AnalysisResult::NoImplication | AnalysisResult::Duplicate => {
                        match self.backtrack() {
                            Some(flipped) => {
                                self.assign(flipped, None, false);
                                SearchState::Propagating
                            }
                            None => SearchState::Exhausted,
                        }
                    }
                },

                SearchState::Satisfied => {
                    self.complete_valuation();
                    self.state = FormulaState::Satisfiable;
                    break 'solve_loop;
                }

                SearchState::Exhausted => {
                    self.state = FormulaState::Unsatisfiable;
                    break 'solve_loop;
                }
            };
        }

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::SOLVE,
            "{} after {} conflicts, {} decisions, {} restarts in {:.2?}",
            self.report(),
            self.counters.total_conflicts,
            self.counters.total_decisions,
            self.counters.restarts,
            self.counters.time
        );

        Ok(self.report())
    }

    /// Gives every variable without a value the value true, as a choice which may not be retried.
    ///
    /// As every clause is satisfied when called, the values given have no consequence.
    fn complete_valuation(&mut self) {
        let unassigned = self.variable_db.unassigned().collect::<Vec<_>>();
        for variable in unassigned {
            self.assign(Literal::new(variable, true), None, false);
        }
        self.trail.q_head = self.trail.len();
    }
}
