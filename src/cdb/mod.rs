//! Module `cdb` provides the clause database: the clause arena, the
//! two-watched-literal index, and the learned-clause deletion policy.

/// clause activity and activity-based reduction
mod activity;
/// methods on clause
mod clause;

pub use self::clause::{subset, Clause, ClauseIF};

use {
    crate::{assign::AssignIF, types::*},
    std::ops::{Index, IndexMut},
};

/// API for the clause database like
/// [`new_clause`](`crate::cdb::ClauseDBIF::new_clause`),
/// [`remove_clause`](`crate::cdb::ClauseDBIF::remove_clause`), and the
/// watch-list sweep primitives used by propagation.
pub trait ClauseDBIF: IndexMut<ClauseId, Output = Clause> {
    /// allocate a new clause over at least two literals and register it in
    /// the watch lists. For a learnt clause, position 1 receives a literal
    /// of maximal decision level among positions 1.. .
    fn new_clause(&mut self, asg: &impl AssignIF, lits: &[Lit], learnt: bool) -> ClauseId;
    /// detach a clause from its watch lists and free its arena slot. The
    /// caller owns the pool lists (`originals`/`learnts`) compaction.
    fn remove_clause(&mut self, cid: ClauseId);
    /// take a whole watch list out for a single-pass sweep.
    fn take_watchers(&mut self, l: Lit) -> Vec<ClauseId>;
    /// register a clause into the watch list of `l`.
    fn push_watcher(&mut self, l: Lit, cid: ClauseId);
    /// put the unvisited suffix of a taken watch list back.
    fn restore_watchers(&mut self, l: Lit, tail: &[ClauseId]);
    /// take the original pool out for compaction.
    fn take_originals(&mut self) -> Vec<ClauseId>;
    /// put the compacted original pool back.
    fn restore_originals(&mut self, originals: Vec<ClauseId>);
    /// drop roughly half of the removable learnt clauses, by ascending
    /// activity; return the number of dropped clauses.
    fn reduce(&mut self, asg: &impl AssignIF) -> usize;
    /// the one-shot root-level simplification: remove satisfied original
    /// clauses and strip false literals from the rest.
    fn simplify_database(&mut self, asg: &impl AssignIF);
}

/// Clause database with an arena, watch lists, and clause activities.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    /// container of clauses
    clause: Vec<Clause>,
    /// freed arena slots awaiting recycling
    free: Vec<ClauseId>,
    /// watch lists, indexed by watched literal
    watch: Vec<Vec<ClauseId>>,
    /// ids of the original clauses, in insertion order
    pub originals: Vec<ClauseId>,
    /// ids of the learnt clauses
    pub learnts: Vec<ClauseId>,
    /// the current clause activity increment
    pub(super) activity_bump: f64,
    /// reciprocal of the clause decay factor
    pub(super) activity_inv_decay: f64,
    /// the number of reductions
    pub num_reduction: usize,
}

impl Instantiate for ClauseDB {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> ClauseDB {
        ClauseDB {
            clause: Vec::with_capacity(cnf.num_of_clauses),
            watch: vec![Vec::new(); 2 * cnf.num_of_variables],
            activity_bump: 1.0,
            activity_inv_decay: 1.0 / config.cla_decay,
            ..ClauseDB::default()
        }
    }
}

impl Index<ClauseId> for ClauseDB {
    type Output = Clause;
    #[inline]
    fn index(&self, cid: ClauseId) -> &Clause {
        &self.clause[cid]
    }
}

impl IndexMut<ClauseId> for ClauseDB {
    #[inline]
    fn index_mut(&mut self, cid: ClauseId) -> &mut Clause {
        &mut self.clause[cid]
    }
}

impl ClauseDBIF for ClauseDB {
    fn new_clause(&mut self, asg: &impl AssignIF, lits: &[Lit], learnt: bool) -> ClauseId {
        debug_assert!(1 < lits.len());
        let mut c = Clause::new(lits.to_vec(), learnt, self.activity_bump);
        if learnt {
            // place a literal of the highest decision level at position 1,
            // so that any future backjump past this clause's level makes it
            // a unit again
            let mut max_i = 1;
            let mut max_lv = asg.level(c[1].vi());
            for (i, l) in c.iter().enumerate().skip(2) {
                let lv = asg.level(l.vi());
                if max_lv < lv {
                    max_lv = lv;
                    max_i = i;
                }
            }
            c.swap_lits(1, max_i);
        }
        let cid = match self.free.pop() {
            Some(cid) => {
                debug_assert!(self.clause[cid].is_dead());
                self.clause[cid] = c;
                cid
            }
            None => {
                self.clause.push(c);
                self.clause.len() - 1
            }
        };
        self.push_watcher(self.clause[cid].lit0(), cid);
        self.push_watcher(self.clause[cid].lit1(), cid);
        if learnt {
            self.learnts.push(cid);
        } else {
            self.originals.push(cid);
        }
        cid
    }
    fn remove_clause(&mut self, cid: ClauseId) {
        debug_assert!(!self.clause[cid].is_dead());
        let l0 = self.clause[cid].lit0();
        let l1 = self.clause[cid].lit1();
        self.watch[usize::from(l0)].delete_unstable(|x| *x == cid);
        self.watch[usize::from(l1)].delete_unstable(|x| *x == cid);
        self.clause[cid].kill();
        self.free.push(cid);
    }
    #[inline]
    fn take_watchers(&mut self, l: Lit) -> Vec<ClauseId> {
        std::mem::take(&mut self.watch[usize::from(l)])
    }
    #[inline]
    fn push_watcher(&mut self, l: Lit, cid: ClauseId) {
        self.watch[usize::from(l)].push(cid);
    }
    #[inline]
    fn restore_watchers(&mut self, l: Lit, tail: &[ClauseId]) {
        self.watch[usize::from(l)].extend_from_slice(tail);
    }
    fn take_originals(&mut self) -> Vec<ClauseId> {
        std::mem::take(&mut self.originals)
    }
    fn restore_originals(&mut self, originals: Vec<ClauseId>) {
        self.originals = originals;
    }
    fn reduce(&mut self, asg: &impl AssignIF) -> usize {
        if self.learnts.is_empty() {
            return 0;
        }
        let mut learnts = std::mem::take(&mut self.learnts);
        // remove any clause below this activity in the upper half
        let extra_lim = self.activity_bump / learnts.len() as f64;
        learnts.sort_unstable_by(|a, b| {
            self.clause[*a].activity().total_cmp(&self.clause[*b].activity())
        });
        let half = learnts.len() / 2;
        let mut j = 0;
        for i in 0..learnts.len() {
            let cid = learnts[i];
            let c = &self.clause[cid];
            // a clause justifying an assignment must outlive it
            let locked = c.len() == 2
                || asg.reason(c.lit0().vi()) == AssignReason::Implication(cid);
            let keep = locked || (half <= i && extra_lim <= c.activity());
            if keep {
                learnts[j] = cid;
                j += 1;
            } else {
                self.remove_clause(cid);
            }
        }
        let dropped = learnts.len() - j;
        learnts.truncate(j);
        self.learnts = learnts;
        self.num_reduction += 1;
        dropped
    }
    fn simplify_database(&mut self, asg: &impl AssignIF) {
        debug_assert_eq!(asg.decision_level(), 0);
        let mut originals = std::mem::take(&mut self.originals);
        let mut j = 0;
        for i in 0..originals.len() {
            let cid = originals[i];
            if self.simplify_clause(asg, cid) {
                self.remove_clause(cid);
            } else {
                originals[j] = cid;
                j += 1;
            }
        }
        originals.truncate(j);
        self.originals = originals;
    }
}

impl ClauseDB {
    /// strip the literals false at level 0; return `true` if the clause is
    /// satisfied there and can be removed instead.
    fn simplify_clause(&mut self, asg: &impl AssignIF, cid: ClauseId) -> bool {
        let c = &mut self.clause[cid];
        let mut j = 0;
        for i in 0..c.len() {
            let l = c[i];
            match asg.assigned(l) {
                Value::True => return true,
                Value::Unassigned => {
                    c[j] = l;
                    j += 1;
                }
                Value::False => (),
            }
        }
        c.shrink(j);
        debug_assert!(1 < c.len(), "a root-level unit survived propagation");
        false
    }
}
