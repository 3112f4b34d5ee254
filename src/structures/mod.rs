/*!
Structures of the library, independent of any database.

- [Variables](variable), paired with a polarity to form [literals](literal).
- [Clauses](clause), as collections of literals.
- [Valuations](valuation), as maps from variables to optional values.
*/

pub mod clause;
pub mod literal;
pub mod valuation;
pub mod variable;
