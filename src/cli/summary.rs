use std::{path::Path, time::Duration};

use serde::Serialize;

use heron_sat::{formula::Formula, reports::Report};

/// A one-line summary of a solve.
///
/// The solution lists each variable id followed by its value, e.g. `"1 true 2 false"`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
    instance: String,
    time: String,
    result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
}

impl Summary {
    pub fn new(path: &Path, time: Duration, formula: &Formula) -> Self {
        let result = match formula.report() {
            Report::Satisfiable => "SAT",
            Report::Unsatisfiable => "UNSAT",
            Report::Unknown => "UNKNOWN",
        };

        let solution = match formula.report() {
            Report::Satisfiable => Some(
                formula
                    .valuation_ints()
                    .iter()
                    .map(|literal| format!("{} {}", literal.unsigned_abs(), literal.is_positive()))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        };

        Summary {
            instance: path.display().to_string(),
            time: format!("{:.2}", time.as_secs_f64()),
            result,
            solution,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfiable_summary() {
        let mut formula = Formula::default();
        let _ = formula.add_clause([1, -2]);
        let _ = formula.add_clause([-1]);
        let _ = formula.solve();

        let summary = Summary::new(Path::new("a.cnf"), Duration::from_millis(1250), &formula);
        assert_eq!(
            summary.to_json().expect("serialisable"),
            r#"{"Instance":"a.cnf","Time":"1.25","Result":"SAT","Solution":"1 false 2 false"}"#
        );
    }

    #[test]
    fn unsatisfiable_summary_has_no_solution() {
        let mut formula = Formula::default();
        let _ = formula.add_clause([1]);
        let _ = formula.add_clause([-1]);
        let _ = formula.solve();

        let summary = Summary::new(Path::new("b.cnf"), Duration::ZERO, &formula);
        assert_eq!(
            summary.to_json().expect("serialisable"),
            r#"{"Instance":"b.cnf","Time":"0.00","Result":"UNSAT"}"#
        );
    }
}
