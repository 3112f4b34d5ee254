use std::io::{BufReader, Write};

use heron_sat::{
    config::Config,
    formula::Formula,
    reports::Report,
    types::err::{BuildError, ErrorKind, ParseError},
};

mod common;
use common::*;

/// The form of a formula from the SATLIB uniform random collections, with a trailing `%` and `0`.
const SATLIB_STYLE: &str = "c This Formula is generated by mcnf
c
c    horn? no
c    forced? no
c    mixed sat? no
c    clause length = 3
c
p cnf 5  8
 1 -5 4 0
-1 5 3 0
 -3 -4 2 0
2 -3 -5 0
-2 3 5 0
 4 -1 2 0
 -4 -2 -1 0
1 3 -2 0
%
0

";

mod dimacs {
    use super::*;

    #[test]
    fn satlib_style() {
        let mut the_formula = Formula::default();
        let info = the_formula
            .read_dimacs(SATLIB_STYLE.as_bytes())
            .expect("readable");

        assert_eq!(info.expected_variables, Some(5));
        assert_eq!(info.expected_clauses, Some(8));
        assert_eq!(info.added_variables, 5);
        assert_eq!(info.added_clauses, 8);

        let clauses = SATLIB_STYLE
            .lines()
            .skip_while(|line| !line.starts_with('p'))
            .skip(1)
            .take_while(|line| !line.starts_with('%'))
            .map(|line| {
                line.split_whitespace()
                    .filter_map(|literal| literal.parse::<i32>().ok())
                    .filter(|literal| *literal != 0)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let expected = match brute_force(&clauses, 5) {
            true => Report::Satisfiable,
            false => Report::Unsatisfiable,
        };
        assert_eq!(the_formula.solve(), Ok(expected));
    }

    #[test]
    fn from_file() {
        let path = std::env::temp_dir().join("heron_sat_dimacs_from_file.cnf");
        {
            let mut file = std::fs::File::create(&path).expect("writable");
            let _ = file.write_all(b"p cnf 3 4\n1 2 0\n-1 2 0\n-2 3 0\n-3 -1 0\n");
        }

        let mut the_formula = Formula::from_config(Config::default());
        let file = std::fs::File::open(&path).expect("readable");
        assert!(the_formula.read_dimacs(BufReader::new(&file)).is_ok());
        let _ = std::fs::remove_file(&path);

        assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_formula.value_of(1), Some(false));
        assert_eq!(the_formula.value_of(2), Some(true));
        assert_eq!(the_formula.value_of(3), Some(true));
    }

    #[test]
    fn pigeonhole_from_dimacs() {
        let clauses = pigeonhole(4, 3);
        let mut dimacs = format!("p cnf 12 {}\n", clauses.len());
        for clause in &clauses {
            for literal in clause {
                dimacs.push_str(&format!("{literal} "));
            }
            dimacs.push_str("0\n");
        }

        let mut the_formula = Formula::default();
        let info = the_formula.read_dimacs(dimacs.as_bytes()).expect("readable");
        assert_eq!(info.added_clauses, clauses.len());
        assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn minimum_integer_literal() {
        let mut the_formula = Formula::default();
        let dimacs = format!("p cnf 1 2\n1 0\n{} 0\n", i32::MIN);
        assert_eq!(
            the_formula.read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Build(BuildError::LiteralOutOfRange))
        );
    }

    #[test]
    fn second_problem_line() {
        let mut the_formula = Formula::default();
        assert_eq!(
            the_formula.read_dimacs("p cnf 1 1\n1 0\np cnf 1 1\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Line(3)))
        );
    }
}
