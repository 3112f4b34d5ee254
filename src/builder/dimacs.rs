use std::io::BufRead;

use crate::{
    formula::Formula,
    structures::literal::IntLiteral,
    types::err::{self, ErrorKind},
};

/// Information about a parsed DIMACS formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of variables given in the problem specification, if one was found.
    pub expected_variables: Option<usize>,

    /// The count of clauses given in the problem specification, if one was found.
    pub expected_clauses: Option<usize>,

    /// The count of variables in the formula after parsing.
    pub added_variables: usize,

    /// The count of clauses read, including any tautologies or duplicates (which are read but not stored).
    pub added_clauses: usize,
}

impl Formula {
    /// Reads a DIMACS file into the formula.
    ///
    /// ```rust,ignore
    /// formula.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// - Lines beginning with `c` are comments.
    /// - An optional problem specification `p cnf <variables> <clauses>` may precede the clauses.
    /// - Clauses are whitespace separated integers, terminated by `0`, and may span lines.
    /// - A line beginning with `%` ends the formula.
    ///
    /// A final clause without a terminating `0` is still added.
    ///
    /// ```rust
    /// # use heron_sat::formula::Formula;
    /// # use heron_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_formula = Formula::default();
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_formula.read_dimacs(dimacs.as_slice()).expect("readable");
    /// assert_eq!(info.expected_clauses, Some(7));
    /// assert_eq!(info.added_variables, 4);
    ///
    /// assert_eq!(the_formula.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<IntLiteral> = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the formula begins
        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(1);

                    if problem_details.next() != Some("cnf") {
                        return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                    }

                    let mut count = || -> Result<usize, ErrorKind> {
                        match problem_details.next().map(|string| string.parse()) {
                            Some(Ok(count)) => Ok(count),
                            _ => Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                        }
                    };

                    info.expected_variables = Some(count()?);
                    info.expected_clauses = Some(count()?);

                    buffer.clear();
                    break;
                }

                // Some line of the formula, kept in the buffer for the formula loop.
                _ => break,
            }
        }

        // second phase, read until the formula ends
        'formula_loop: loop {
            if buffer.is_empty() {
                match reader.read_line(&mut buffer) {
                    Ok(0) => break,
                    Ok(_) => line_counter += 1,
                    Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
                }
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,

                None | Some('c') => {}

                Some('p') => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),

                _ => {
                    for item in buffer.split_whitespace() {
                        let literal = match item.parse::<IntLiteral>() {
                            Ok(int) => int,
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::Literal(line_counter)))
                            }
                        };

                        match literal {
                            0 => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }
                            _ => clause_buffer.push(literal),
                        }
                    }
                }
            }

            buffer.clear();
        }

        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            info.added_clauses += 1;
        }

        info.added_variables = self.variable_db.count();
        Ok(info)
    }
}
