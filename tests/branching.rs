use heron_sat::{
    branching::{
        bohm::Bohm, dlcs::Dlcs, dlis::Dlis, jeroslow_wang::JeroslowWang, moms::Moms,
        vsids::Vsids, BranchingStrategy,
    },
    config::Config,
    reports::Report,
};

mod common;
use common::*;

fn strategies() -> Vec<Box<dyn BranchingStrategy>> {
    vec![
        Box::new(Dlcs),
        Box::new(Dlis),
        Box::new(Bohm::default()),
        Box::new(JeroslowWang),
        Box::new(Moms::default()),
        Box::new(Vsids::from_seed(0)),
    ]
}

mod every_strategy {
    use super::*;

    #[test]
    fn binary_clause() {
        for config in every_branching() {
            let mut the_formula = formula_from(&[vec![1, 2]], config);
            assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
            assert!(
                the_formula.value_of(1) == Some(true) || the_formula.value_of(2) == Some(true)
            );
        }
    }

    #[test]
    fn pigeonhole_four_three() {
        for config in every_branching() {
            let mut the_formula = formula_from(&pigeonhole(4, 3), config);
            assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
        }
    }

    #[test]
    fn pigeons_fit() {
        for config in every_branching() {
            let clauses = pigeonhole(3, 3);
            let mut the_formula = formula_from(&clauses, config);
            assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
            assert!(model_satisfies(&the_formula, &clauses));
            assert!(the_formula.verify().is_ok());
        }
    }

    #[test]
    fn solve_with_each() {
        let clauses = vec![
            vec![1, 2, -3],
            vec![-1, 3],
            vec![-2, 3, 4],
            vec![-4, -3],
            vec![2, 4],
        ];

        for mut strategy in strategies() {
            let mut the_formula = formula_from(&clauses, Config::default());
            assert_eq!(
                the_formula.solve_with(strategy.as_mut()),
                Ok(Report::Satisfiable),
                "{}",
                strategy.name()
            );
            assert!(model_satisfies(&the_formula, &clauses), "{}", strategy.name());
        }
    }

    #[test]
    fn choices_are_unassigned() {
        let clauses = vec![vec![1, 2, 3], vec![-1, 2], vec![-2, 4], vec![3, -4, 5]];

        for mut strategy in strategies() {
            let mut the_formula = formula_from(&clauses, Config::default());
            let one = the_formula.literal_from_int(1).expect("literal");
            let two = the_formula.literal_from_int(2).expect("literal");
            the_formula.assign(one, None, true);
            the_formula.assign(two, None, true);

            let choice = strategy.choose(&the_formula);
            if let Some(literal) = choice {
                assert_eq!(
                    the_formula.variable_db.value_of(literal.variable()),
                    None,
                    "{}",
                    strategy.name()
                );
            }
        }
    }
}

mod seeded {
    use super::*;

    #[test]
    fn vsids_is_reproducible() {
        let clauses = pigeonhole(5, 4);

        let trail_for = |seed: u64| {
            let mut config = Config::default();
            config.branching.value = heron_sat::config::Branching::VSIDS;
            config.seed.value = seed;

            let mut the_formula = formula_from(&clauses, config);
            assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
            (
                the_formula.counters.total_decisions,
                the_formula.counters.total_conflicts,
            )
        };

        assert_eq!(trail_for(9), trail_for(9));
    }
}
