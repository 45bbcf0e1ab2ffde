/// Solver Builder
use {
    super::{Restarter, Solver},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF},
        cdb::{ClauseDB, ClauseDBIF, ClauseIF},
        cnf,
        processor::Eliminator,
        state::State,
        types::*,
    },
    std::{fs::File, io::BufReader},
};

/// API for loading a problem into a solver.
pub trait SatSolverBuildIF {
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// IO error by failing to load a CNF file, or a DIMACS format violation.
    fn solver_build(config: &Config) -> Result<Solver, SolverError>;
    /// fix the number of variables; must come before any clause.
    fn solver_set_number_of_variables(&mut self, n: usize) -> MaybeInconsistent;
    /// add a clause in DIMACS signed form; return the conflict flag.
    fn solver_add_clause(&mut self, clause: &[i32]) -> bool;
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::instantiate(&Config::default(), &CNFDescription::default())
    }
}

impl Instantiate for Solver {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Solver {
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            cdb: ClauseDB::instantiate(config, cnf),
            elim: Eliminator::instantiate(config, cnf),
            rst: Restarter::instantiate(config, cnf),
            state: State::instantiate(config, cnf),
        }
    }
}

impl TryFrom<&str> for Solver {
    type Error = SolverError;
    /// return a new solver built for a CNF file.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Solver::solver_build(&Config::from(s))
    }
}

impl SatSolverBuildIF for Solver {
    fn solver_build(config: &Config) -> Result<Solver, SolverError> {
        match &config.cnf_file {
            Some(path) => {
                let file = File::open(path)?;
                let pathname = path.to_string_lossy().into_owned();
                cnf::load_cnf(config, &mut BufReader::new(file), &pathname)
            }
            None => {
                let stdin = std::io::stdin();
                cnf::load_cnf(config, &mut stdin.lock(), "--")
            }
        }
    }
    fn solver_set_number_of_variables(&mut self, n: usize) -> MaybeInconsistent {
        if 0 != self.asg.num_vars {
            return Err(SolverError::AlreadySized);
        }
        let cnf = CNFDescription {
            num_of_variables: n,
            ..CNFDescription::default()
        };
        *self = Solver::instantiate(&self.state.config.clone(), &cnf);
        Ok(())
    }
    fn solver_add_clause(&mut self, clause: &[i32]) -> bool {
        let lits = clause.iter().map(|i| Lit::from(*i)).collect::<Vec<Lit>>();
        self.add_origin_clause(lits)
    }
}

impl Solver {
    /// normalize a proposed clause and install it: drop literals false at
    /// level 0, discard satisfied clauses and tautologies, deduplicate,
    /// assert units, and watch the rest. Returns `true` on a root-level
    /// conflict.
    fn add_origin_clause(&mut self, mut lits: Vec<Lit>) -> bool {
        debug_assert_eq!(self.asg.decision_level(), 0);
        let mut j = 0;
        'next_lit: for i in 0..lits.len() {
            let li = lits[i];
            match self.asg.assigned(li) {
                Value::True => return false,
                Value::False => continue 'next_lit,
                Value::Unassigned => {
                    for k in i + 1..lits.len() {
                        if lits[k] == li {
                            continue 'next_lit;
                        }
                        if lits[k] == !li {
                            return false;
                        }
                    }
                    lits[j] = li;
                    j += 1;
                }
            }
        }
        lits.truncate(j);
        match lits.len() {
            0 => {
                self.state.ok = false;
                true
            }
            1 => match self.asg.assign_at_root_level(lits[0]) {
                Ok(_) => false,
                Err(_) => {
                    self.state.ok = false;
                    true
                }
            },
            _ => {
                let cid = self.cdb.new_clause(&self.asg, &lits, false);
                debug_assert!(!self.cdb[cid].is_dead());
                for l in &lits {
                    self.asg.bump_activity(*l);
                }
                false
            }
        }
    }
}
