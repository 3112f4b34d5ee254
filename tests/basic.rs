use heron_sat::{
    builder::ClauseOk,
    config::Config,
    formula::Formula,
    reports::Report,
    types::err::{BuildError, ErrorKind},
};

mod basic {

    use super::*;
    #[test]
    fn one_literal() {
        let mut the_formula = Formula::from_config(Config::default());
        assert!(the_formula.add_clause([1]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_formula.value_of(1), Some(true));
    }

    #[test]
    fn contradictory_units() {
        let mut the_formula = Formula::default();
        assert!(the_formula.add_clause([1]).is_ok());
        assert!(the_formula.add_clause([-1]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_formula.clause_db.learnt_count(), 0);
    }

    #[test]
    fn unit_forces_conflict() {
        let mut the_formula = Formula::default();
        assert!(the_formula.add_clause([1, 2]).is_ok());
        assert!(the_formula.add_clause([-1, 2]).is_ok());
        assert!(the_formula.add_clause([-2]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn conflict() {
        let mut the_formula = Formula::default();
        assert!(the_formula.add_clause([1, 2]).is_ok());
        assert!(the_formula.add_clause([-1, -2]).is_ok());
        assert!(the_formula.add_clause([1, -2]).is_ok());
        assert!(the_formula.add_clause([-1, 2]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn binary_clause() {
        let mut the_formula = Formula::default();
        assert!(the_formula.add_clause([1, 2]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
        assert!(the_formula.value_of(1) == Some(true) || the_formula.value_of(2) == Some(true));
        assert!(the_formula.verify().is_ok());
    }

    #[test]
    fn propagation_alone_resolve() {
        let mut the_formula = Formula::default();
        assert!(the_formula.add_clause([1]).is_ok());
        assert!(the_formula.add_clause([-1, 2]).is_ok());
        assert!(the_formula.add_clause([-2, 3]).is_ok());

        for _ in 0..2 {
            assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
            assert_eq!(the_formula.valuation_string(), "1 2 3");
            assert!(the_formula
                .trail
                .iter()
                .all(|choice| !choice.decision && choice.reason.is_some()));
        }
        assert_eq!(the_formula.counters.total_decisions, 0);
    }

    #[test]
    fn duplicates() {
        let mut the_formula = Formula::default();
        assert!(matches!(the_formula.add_clause([1, 2, 2]), Ok(ClauseOk::Added(_))));
        assert_eq!(the_formula.add_clause([2, 1]), Ok(ClauseOk::Duplicate));
        assert_eq!(the_formula.clause_db.count(), 1);
        assert_eq!(the_formula.clause_db.all_clauses().next().map(|c| c.len()), Some(2));
    }

    #[test]
    fn tautology_skip() {
        let mut the_formula = Formula::default();
        assert_eq!(the_formula.add_clause([1, 2, -1]), Ok(ClauseOk::Tautology));
        assert_eq!(the_formula.clause_db.count(), 0);
        assert_eq!(the_formula.variable_db.count(), 2);
    }

    #[test]
    fn malformed_clauses() {
        let mut the_formula = Formula::default();
        assert_eq!(
            the_formula.add_clause(Vec::<i32>::default()),
            Err(ErrorKind::Build(BuildError::EmptyClause))
        );
        assert_eq!(
            the_formula.add_clause([1, 0, 2]),
            Err(ErrorKind::Build(BuildError::ZeroLiteral))
        );
        assert_eq!(
            the_formula.add_clause([i32::MIN]),
            Err(ErrorKind::Build(BuildError::LiteralOutOfRange))
        );
        assert_eq!(the_formula.clause_db.count(), 0);

        assert!(the_formula.add_clause([i32::MAX, -i32::MAX + 1]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
        let valuation = the_formula.valuation_ints();
        assert_eq!(
            valuation.iter().map(|int| int.unsigned_abs()).collect::<Vec<_>>(),
            vec![i32::MAX as u32 - 1, i32::MAX as u32]
        );
        assert!(valuation.contains(&i32::MAX) || valuation.contains(&(-i32::MAX + 1)));
    }

    #[test]
    fn clause_after_solve() {
        let mut the_formula = Formula::default();
        assert!(the_formula.add_clause([1, 2]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));

        assert!(the_formula.add_clause([-1]).is_ok());
        assert_eq!(the_formula.report(), Report::Unknown);
        assert!(the_formula.trail.is_empty());

        assert!(the_formula.add_clause([-2]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn free_variables_are_true() {
        let mut the_formula = Formula::default();
        assert!(the_formula.add_clause([-1]).is_ok());
        assert!(the_formula.add_clause([-1, 2, 3]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_formula.valuation_string(), "-1 2 3");
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        config.time_limit = Some(std::time::Duration::ZERO);
        let mut the_formula = Formula::from_config(config);
        assert!(the_formula.add_clause([1, 2]).is_ok());
        assert!(the_formula.add_clause([-1, -2]).is_ok());
        assert_eq!(the_formula.solve(), Ok(Report::Unknown));
    }
}
