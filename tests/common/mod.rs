#![allow(dead_code)]

use rand::Rng;

use heron_sat::{config::Config, formula::Formula, generic::minimal_pcg::MinimalPCG32};

pub type IntClause = Vec<i32>;

/// A formula built from the given clauses.
pub fn formula_from(clauses: &[IntClause], config: Config) -> Formula {
    let mut the_formula = Formula::from_config(config);
    for clause in clauses {
        assert!(the_formula.add_clause(clause).is_ok());
    }
    the_formula
}

/// The pigeonhole principle for `pigeons` pigeons and `holes` holes, unsatisfiable whenever pigeons exceed holes.
///
/// Pigeon *p* in hole *h* is variable *p · holes + h + 1*.
pub fn pigeonhole(pigeons: i32, holes: i32) -> Vec<IntClause> {
    let variable = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;
    let mut clauses = Vec::default();

    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| variable(pigeon, hole)).collect());
    }

    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                clauses.push(vec![-variable(a, hole), -variable(b, hole)]);
            }
        }
    }

    clauses
}

/// A random formula of `clause_count` clauses, each of three literals over variables 1 to `variables`.
pub fn random_3cnf(rng: &mut MinimalPCG32, variables: i32, clause_count: usize) -> Vec<IntClause> {
    (0..clause_count)
        .map(|_| {
            (0..3)
                .map(|_| {
                    let variable = rng.random_range(1..=variables);
                    match rng.random_bool(0.5) {
                        true => variable,
                        false => -variable,
                    }
                })
                .collect()
        })
        .collect()
}

/// Whether some valuation of variables 1 to `variables` satisfies every clause, by enumeration.
pub fn brute_force(clauses: &[IntClause], variables: i32) -> bool {
    (0..(1_u32 << variables)).any(|valuation| satisfied_by(clauses, valuation))
}

/// Whether the valuation, with bit *n* the value of variable *n + 1*, satisfies every clause.
pub fn satisfied_by(clauses: &[IntClause], valuation: u32) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|literal| {
            let value = (valuation >> (literal.unsigned_abs() - 1)) & 1 == 1;
            value == literal.is_positive()
        })
    })
}

/// Whether the formula holds a valuation in which every original clause has a true literal, checked against integer clauses.
pub fn model_satisfies(the_formula: &Formula, clauses: &[IntClause]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|literal| {
            the_formula.value_of(literal.unsigned_abs()) == Some(literal.is_positive())
        })
    })
}

/// Every configuration of branching strategy, with default parameters.
pub fn every_branching() -> Vec<Config> {
    use heron_sat::config::Branching;

    [
        Branching::DLCS,
        Branching::DLIS,
        Branching::Bohm,
        Branching::JeroslowWang,
        Branching::MOMS,
        Branching::VSIDS,
    ]
    .into_iter()
    .map(|branching| {
        let mut config = Config::default();
        config.branching.value = branching;
        config
    })
    .collect()
}
