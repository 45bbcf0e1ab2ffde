/// implement boolean constraint propagation and backjump
use {
    super::{heap::LitHeapIF, AssignIF, AssignReason, AssignStack},
    crate::{
        cdb::{ClauseDBIF, ClauseIF},
        types::*,
    },
};

/// API for Boolean Constraint Propagation like
/// [`propagate`](`crate::assign::PropagateIF::propagate`),
/// [`assign_by_decision`](`crate::assign::PropagateIF::assign_by_decision`),
/// and [`cancel_until`](`crate::assign::PropagateIF::cancel_until`).
pub trait PropagateIF {
    /// add an assignment at decision level 0.
    ///
    /// # Errors
    ///
    /// emit `SolverError::RootLevelConflict` if the negation is already true.
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent;
    /// unsafe enqueue (assign by implication); callers must assure the
    /// literal is unassigned.
    fn assign_by_implication(&mut self, l: Lit, reason: AssignReason);
    /// open a new decision level and assign by decision.
    fn assign_by_decision(&mut self, l: Lit);
    /// execute *backjump* to `lv`.
    fn cancel_until(&mut self, lv: DecisionLevel);
    /// execute *boolean constraint propagation* or *unit propagation*; return
    /// the conflicting clause if any.
    fn propagate<C>(&mut self, cdb: &mut C) -> Option<ClauseId>
    where
        C: ClauseDBIF;
}

impl PropagateIF for AssignStack {
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent {
        debug_assert_eq!(self.decision_level(), 0);
        match self.assigned(l) {
            Value::True => Ok(()),
            Value::False => Err(SolverError::RootLevelConflict),
            Value::Unassigned => {
                self.assign(l, AssignReason::None);
                Ok(())
            }
        }
    }
    fn assign_by_implication(&mut self, l: Lit, reason: AssignReason) {
        debug_assert_ne!(l, NULL_LIT, "null literal is about to be enqueued");
        debug_assert_eq!(self.assigned(l), Value::Unassigned);
        self.assign(l, reason);
    }
    fn assign_by_decision(&mut self, l: Lit) {
        debug_assert_eq!(self.assigned(l), Value::Unassigned);
        self.trail_lim.push(self.trail.len());
        self.num_decision += 1;
        self.assign(l, AssignReason::Decision);
    }
    fn cancel_until(&mut self, lv: DecisionLevel) {
        while lv < self.decision_level() {
            self.cancel();
        }
        self.q_head = self.trail.len();
    }
    /// UNIT PROPAGATION.
    ///
    /// Sweep the trail from `q_head`; for each newly false literal, visit
    /// every clause watching it exactly once, in a single pass over its
    /// watch list. Implied literals are enqueued in breadth-first order and
    /// the loop runs to fixpoint or to the first conflict.
    fn propagate<C>(&mut self, cdb: &mut C) -> Option<ClauseId>
    where
        C: ClauseDBIF,
    {
        while self.q_head < self.trail.len() {
            let p = self.trail[self.q_head];
            self.q_head += 1;
            self.num_propagation += 1;
            let false_lit = !p;
            // all clauses in this list just had a watched literal become
            // false; survivors are pushed back one by one
            let watchers = cdb.take_watchers(false_lit);
            let mut i = 0;
            'next_clause: while i < watchers.len() {
                let cid = watchers[i];
                i += 1;
                let first = {
                    let c = &mut cdb[cid];
                    if c.lit0() == false_lit {
                        c.swap_watch_lits();
                    }
                    c.lit0()
                };
                debug_assert_eq!(cdb[cid].lit1(), false_lit);
                // the clause is already satisfied through its other watch
                if self.assigned(first) == Value::True {
                    cdb.push_watcher(false_lit, cid);
                    continue 'next_clause;
                }
                // search a non-false literal to watch instead
                let new_watch = {
                    let c = &mut cdb[cid];
                    let mut found = NULL_LIT;
                    for k in 2..c.len() {
                        if self.assigned(c[k]) != Value::False {
                            c.swap_lits(1, k);
                            found = c.lit1();
                            break;
                        }
                    }
                    found
                };
                if new_watch != NULL_LIT {
                    cdb.push_watcher(new_watch, cid);
                    continue 'next_clause;
                }
                // no replacement: the clause stays here and is a unit or a
                // conflict on its first literal
                cdb.push_watcher(false_lit, cid);
                match self.assigned(first) {
                    Value::Unassigned => {
                        self.assign_by_implication(first, AssignReason::Implication(cid));
                    }
                    _ => {
                        debug_assert_eq!(self.assigned(first), Value::False);
                        cdb.restore_watchers(false_lit, &watchers[i..]);
                        self.num_conflict += 1;
                        return Some(cid);
                    }
                }
            }
        }
        None
    }
}

impl AssignStack {
    /// record `l` as true at the current level; the single write path for
    /// decisions, implications and root-level units.
    fn assign(&mut self, l: Lit, reason: AssignReason) {
        let vi = l.vi();
        debug_assert!(vi < self.num_vars);
        debug_assert_eq!(self.values[vi], Value::Unassigned);
        self.values[vi] = Value::from(!l.is_negated());
        self.level[vi] = self.decision_level();
        self.reason[vi] = reason;
        self.trail.push(l);
    }
    /// pop one decision level.
    fn cancel(&mut self) {
        let lim = *self.trail_lim.last().expect("no decision level to cancel");
        while lim < self.trail.len() {
            self.undo_one();
        }
        self.trail_lim.pop();
    }
    /// unassign the newest trail entry and give its literals back to the
    /// decision heap.
    pub(crate) fn undo_one(&mut self) {
        let l = self.trail.pop().expect("empty trail");
        let vi = l.vi();
        self.values[vi] = Value::Unassigned;
        self.reason[vi] = AssignReason::None;
        self.level[vi] = 0;
        self.insert_heap(Lit::from((vi, false)));
        self.insert_heap(Lit::from((vi, true)));
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::cdb::{ClauseDB, ClauseDBIF},
    };

    fn setup(nv: usize) -> (AssignStack, ClauseDB) {
        let cnf = CNFDescription {
            num_of_variables: nv,
            ..CNFDescription::default()
        };
        let config = Config::default();
        (
            AssignStack::instantiate(&config, &cnf),
            ClauseDB::instantiate(&config, &cnf),
        )
    }

    fn lits(v: &[i32]) -> Vec<Lit> {
        v.iter().map(|i| Lit::from(*i)).collect()
    }

    #[test]
    fn test_unit_implication_chain() {
        let (mut asg, mut cdb) = setup(3);
        cdb.new_clause(&asg, &lits(&[-1, 2]), false);
        cdb.new_clause(&asg, &lits(&[-2, 3]), false);
        asg.assign_at_root_level(Lit::from(1i32)).unwrap();
        assert_eq!(asg.propagate(&mut cdb), None);
        assert_eq!(asg.assigned(Lit::from(2i32)), Value::True);
        assert_eq!(asg.assigned(Lit::from(3i32)), Value::True);
        assert_eq!(asg.stack_len(), 3);
    }

    #[test]
    fn test_propagate_finds_conflict() {
        let (mut asg, mut cdb) = setup(2);
        cdb.new_clause(&asg, &lits(&[-1, 2]), false);
        let c2 = cdb.new_clause(&asg, &lits(&[-1, -2]), false);
        asg.assign_by_decision(Lit::from(1i32));
        let conflict = asg.propagate(&mut cdb);
        assert_eq!(conflict, Some(c2));
    }

    #[test]
    fn test_watches_follow_backjump() {
        let (mut asg, mut cdb) = setup(4);
        cdb.new_clause(&asg, &lits(&[1, 2, 3, 4]), false);
        asg.assign_by_decision(Lit::from(-1i32));
        assert_eq!(asg.propagate(&mut cdb), None);
        asg.assign_by_decision(Lit::from(-2i32));
        assert_eq!(asg.propagate(&mut cdb), None);
        asg.assign_by_decision(Lit::from(-3i32));
        assert_eq!(asg.propagate(&mut cdb), None);
        assert_eq!(asg.assigned(Lit::from(4i32)), Value::True);
        asg.cancel_until(0);
        assert_eq!(asg.stack_len(), 0);
        // the clause must still propagate after the backjump
        asg.assign_by_decision(Lit::from(-4i32));
        assert_eq!(asg.propagate(&mut cdb), None);
        asg.assign_by_decision(Lit::from(-2i32));
        assert_eq!(asg.propagate(&mut cdb), None);
        asg.assign_by_decision(Lit::from(-3i32));
        assert_eq!(asg.propagate(&mut cdb), None);
        assert_eq!(asg.assigned(Lit::from(1i32)), Value::True);
    }
}
