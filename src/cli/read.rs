use std::{ffi::OsString, path::Path};

use heron_sat::{
    builder::ParserInfo,
    formula::Formula,
    types::err::{BuildError, ErrorKind},
};

pub(super) enum ReadError {
    /// The formula contains an empty clause, and so is unsatisfiable.
    EmptyClause,
    FailedToOpen,
    NoExtension,
    ParseError(ErrorKind),
    UnknownExtension(OsString),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::EmptyClause => write!(f, "The formula contains an empty clause."),
            Self::FailedToOpen => write!(f, "Failed to open CNF file."),
            Self::NoExtension => write!(f, "The file does not have an extension."),
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
        }
    }
}

/// Reads the DIMACS file at `path` to `formula` and writes a report.
pub(super) fn read_dimacs(path: &Path, formula: &mut Formula) -> Result<ParserInfo, ReadError> {
    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            formula.read_dimacs(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if extension == "cnf" || extension == "dimacs" => {
            formula.read_dimacs(std::io::BufReader::new(&file))
        }

        Some(unknown) => return Err(ReadError::UnknownExtension(unknown.to_owned())),

        None => return Err(ReadError::NoExtension),
    };

    match parse_report {
        Ok(info) => {
            match info.expected_variables {
                Some(count) => println!("c Expected variables: {count}"),
                None => println!("c No preamble was found."),
            }

            println!("c Variable count:     {}", info.added_variables);

            if let Some(count) = info.expected_clauses {
                println!("c Expected clauses:   {count}")
            }

            println!("c Clause count:       {}", info.added_clauses);

            Ok(info)
        }

        Err(ErrorKind::Build(BuildError::EmptyClause)) => Err(ReadError::EmptyClause),

        Err(e) => Err(ReadError::ParseError(e)),
    }
}
