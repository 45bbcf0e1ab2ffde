//! Module `processor` implements the one-pass subsumption preprocessor:
//! original clauses whose literal set contains another original clause are
//! removed before search starts.

mod subsume;

use crate::{
    cdb::{ClauseDBIF, ClauseIF},
    types::*,
};

/// API for the preprocessor lifecycle.
pub trait EliminateIF {
    /// build the occurrence lists over the original clauses.
    fn prepare(&mut self, cdb: &impl ClauseDBIF, originals: &[ClauseId]);
    /// run the subsumption pass; return the number of removed clauses.
    fn eliminate_subsumed<C>(&mut self, cdb: &mut C) -> usize
    where
        C: ClauseDBIF;
    /// drop the occurrence index; the preprocessor holds no state afterward.
    fn stop(&mut self);
}

/// Clause subsumption machinery with per-literal occurrence lists.
#[derive(Clone, Debug, Default)]
pub struct Eliminator {
    pub enable: bool,
    /// occurrence lists over original clauses, indexed by literal
    occur: Vec<Vec<ClauseId>>,
    /// ids of the original clauses, captured by `prepare`
    targets: Vec<ClauseId>,
    /// the number of subsumed clauses removed so far
    pub num_subsumed: usize,
}

impl Instantiate for Eliminator {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Eliminator {
        Eliminator {
            enable: config.use_elim(),
            occur: vec![Vec::new(); 2 * cnf.num_of_variables],
            ..Eliminator::default()
        }
    }
}

impl EliminateIF for Eliminator {
    fn prepare(&mut self, cdb: &impl ClauseDBIF, originals: &[ClauseId]) {
        for list in self.occur.iter_mut() {
            list.clear();
        }
        self.targets.clear();
        self.targets.extend_from_slice(originals);
        for &cid in originals {
            for l in cdb[cid].iter() {
                self.occur[usize::from(*l)].push(cid);
            }
        }
    }
    fn eliminate_subsumed<C>(&mut self, cdb: &mut C) -> usize
    where
        C: ClauseDBIF,
    {
        subsume::eliminate_subsumed(self, cdb)
    }
    fn stop(&mut self) {
        self.occur = Vec::new();
        self.targets = Vec::new();
    }
}

impl Eliminator {
    pub(super) fn occurrences(&self, l: Lit) -> &[ClauseId] {
        &self.occur[usize::from(l)]
    }
    pub(super) fn targets(&self) -> &[ClauseId] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            assign::AssignStack,
            cdb::{ClauseDB, ClauseDBIF},
        },
    };

    fn setup(nv: usize) -> (AssignStack, ClauseDB, Eliminator) {
        let cnf = CNFDescription {
            num_of_variables: nv,
            ..CNFDescription::default()
        };
        let config = Config::default();
        (
            AssignStack::instantiate(&config, &cnf),
            ClauseDB::instantiate(&config, &cnf),
            Eliminator::instantiate(&config, &cnf),
        )
    }

    fn lits(v: &[i32]) -> Vec<Lit> {
        v.iter().map(|i| Lit::from(*i)).collect()
    }

    #[test]
    fn test_occurrence_lists() {
        let (asg, mut cdb, mut elim) = setup(3);
        let c1 = cdb.new_clause(&asg, &lits(&[1, 2]), false);
        let c2 = cdb.new_clause(&asg, &lits(&[1, -3]), false);
        elim.prepare(&cdb, &cdb.originals);
        assert_eq!(elim.occurrences(Lit::from(1i32)), &[c1, c2]);
        assert_eq!(elim.occurrences(Lit::from(2i32)), &[c1]);
        assert!(elim.occurrences(Lit::from(3i32)).is_empty());
        elim.stop();
        assert!(elim.occur.is_empty());
    }
}
