//! Module `solver` provides the top-level API as a SAT solver.

/// instantiation and clause ingestion
mod build;
/// conflict analysis and clause learning
mod conflict;
/// Luby-driven restart scheduling
mod restart;
/// the main CDCL loop
mod search;
/// answer checking
mod validate;

pub use self::{
    build::SatSolverBuildIF,
    restart::{RestartIF, Restarter},
    search::SatSolverSearchIF,
    validate::ValidateIF,
};

use crate::{
    assign::AssignStack, cdb::ClauseDB, processor::Eliminator, state::State, types::*,
};

/// Normal results returned by Solver.
#[derive(Debug, Eq, PartialEq)]
pub enum Certificate {
    SAT(Vec<i32>),
    UNSAT,
}

/// The return type of `Solver::solve`.
/// This captures the following three cases:
/// * `Certificate::SAT` -- solved with a satisfiable assignment set,
/// * `Certificate::UNSAT` -- proved that it's an unsatisfiable problem, and
/// * `SolverError::*` -- caused by a bad configuration or input.
pub type SolverResult = Result<Certificate, SolverError>;

/// API for SAT solver like `build`, `add_clause`, `solve` and so on.
pub trait SatSolverIF: SatSolverBuildIF + SatSolverSearchIF {
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file, or a DIMACS format violation.
    fn build(config: &Config) -> Result<Solver, SolverError>;
    /// fix the number of variables; must come before any clause.
    ///
    /// # Errors
    ///
    /// `SolverError::AlreadySized` on a repeated call.
    fn set_number_of_variables(&mut self, n: usize) -> MaybeInconsistent;
    /// add a clause in DIMACS signed form; return `true` if the clause set
    /// became unsatisfiable at the root level.
    fn add_clause(&mut self, clause: &[i32]) -> bool;
    /// search an assignment.
    fn solve(&mut self) -> SolverResult;
    /// the model of the last satisfiable answer, in DIMACS signed form.
    fn model(&self) -> &[i32];
}

impl SatSolverIF for Solver {
    fn build(config: &Config) -> Result<Solver, SolverError> {
        Solver::solver_build(config)
    }
    fn set_number_of_variables(&mut self, n: usize) -> MaybeInconsistent {
        self.solver_set_number_of_variables(n)
    }
    fn add_clause(&mut self, clause: &[i32]) -> bool {
        self.solver_add_clause(clause)
    }
    fn solve(&mut self) -> SolverResult {
        <Solver as SatSolverSearchIF>::solve(self)
    }
    fn model(&self) -> &[i32] {
        &self.state.model
    }
}

/// The SAT solver object consisting of 5 sub modules.
///
/// ```
/// use cadre::{Certificate, SatSolverIF, Solver};
///
/// let mut s = Solver::default();
/// s.set_number_of_variables(3).unwrap();
/// s.add_clause(&[1]);
/// s.add_clause(&[-1, 2]);
/// s.add_clause(&[-2, 3]);
/// assert_eq!(s.solve(), Ok(Certificate::SAT(vec![1, 2, 3])));
/// ```
#[derive(Debug)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// clause container
    pub cdb: ClauseDB,
    /// clause subsumption
    pub elim: Eliminator,
    /// restart management
    pub rst: Restarter,
    /// misc data holder
    pub state: State,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_facade() {
        let mut s = Solver::default();
        s.set_number_of_variables(2).unwrap();
        assert!(matches!(
            s.set_number_of_variables(2),
            Err(SolverError::AlreadySized)
        ));
        assert!(!s.add_clause(&[1, 2]));
        let Ok(Certificate::SAT(model)) = SatSolverIF::solve(&mut s) else {
            panic!("a trivially satisfiable problem");
        };
        assert!(model.contains(&1) || model.contains(&2));
        assert_eq!(s.model(), &model[..]);
    }
}
