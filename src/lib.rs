/*!
# cadre

A CDCL SAT solver: given a propositional formula in Conjunctive Normal
Form, it returns either a satisfying assignment or a proof that none
exists. The engine combines two-watched-literal propagation, first-UIP
clause learning with non-chronological backjumping, a literal-activity
(VSIDS) decision heap, Luby-sequence restarts, activity-based deletion of
learnt clauses, and a one-pass subsumption preprocessor.

# Examples

```
use cadre::{Certificate, SatSolverIF, Solver};

let mut s = Solver::default();
s.set_number_of_variables(3).unwrap();
s.add_clause(&[1]);
s.add_clause(&[-1, 2]);
s.add_clause(&[-2, 3]);
assert_eq!(s.solve(), Ok(Certificate::SAT(vec![1, 2, 3])));
```
*/
/// assignment stack, propagation, and the decision heuristic
pub mod assign;
/// clause database
pub mod cdb;
/// DIMACS reader
pub mod cnf;
/// configuration and CLI options
pub mod config;
/// subsumption preprocessor
pub mod processor;
/// the top-level solver API
pub mod solver;
/// runtime statistics and progress reporting
pub mod state;
/// plumbing layer
pub mod types;

pub use crate::{
    config::Config,
    solver::{Certificate, SatSolverIF, Solver, SolverResult, ValidateIF},
    types::SolverError,
};
