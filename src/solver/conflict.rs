/// Conflict analysis: first-UIP clause learning with self-subsuming
/// minimization, and non-chronological backjumping.
use {
    super::Solver,
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF},
        cdb::{ClauseDB, ClauseDBIF, ClauseIF},
        state::State,
        types::*,
    },
};

/// resolve a conflict: learn a first-UIP clause, backjump, assert the
/// learnt clause's first literal, then decay both activity spaces.
pub(super) fn handle_conflict(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    ci: ClauseId,
) {
    debug_assert!(0 < asg.decision_level());
    let bt_level = conflict_analyze(asg, cdb, state, ci);
    asg.cancel_until(bt_level);
    if state.new_learnt.len() == 1 {
        // a learnt unit is never stored; assert it at the root level
        debug_assert_eq!(bt_level, 0);
        debug_assert_eq!(asg.assigned(state.new_learnt[0]), Value::Unassigned);
        let _ = asg.assign_at_root_level(state.new_learnt[0]);
    } else {
        let cid = cdb.new_clause(asg, &state.new_learnt, true);
        let l0 = cdb[cid].lit0();
        debug_assert_eq!(asg.assigned(l0), Value::Unassigned);
        asg.assign_by_implication(l0, AssignReason::Implication(cid));
    }
    asg.decay_activity();
    cdb.decay_activity();
}

/// Build the first-UIP clause into `state.new_learnt` by backwards
/// resolution along the trail, unassigning the current-level literals it
/// consumes on the way, and return the backjump level.
///
/// Every newly seen literal is activity-bumped, and so is every learnt
/// clause taking part in the resolution.
fn conflict_analyze(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    conflicting: ClauseId,
) -> DecisionLevel {
    let dl = asg.decision_level();
    let minimize = state.config.use_minimize();
    let State {
        ref mut new_learnt,
        ref mut an_seen,
        ..
    } = *state;
    for seen in an_seen.iter_mut() {
        *seen = false;
    }
    new_learnt.clear();
    // reserve the slot for the assertion literal
    new_learnt.push(NULL_LIT);
    let mut bt_level: DecisionLevel = 0;
    let mut path_cnt = 0;
    let mut p = NULL_LIT;
    let mut confl = conflicting;
    loop {
        if cdb[confl].is(FlagClause::LEARNT) {
            cdb.bump_activity(confl);
        }
        // when resolving on `p`, position 0 holds `p` itself and is skipped
        let skip = (p != NULL_LIT) as usize;
        for i in skip..cdb[confl].len() {
            let q = cdb[confl][i];
            let vi = q.vi();
            if an_seen[vi] {
                continue;
            }
            debug_assert_ne!(asg.var_value(vi), Value::Unassigned);
            an_seen[vi] = true;
            asg.bump_activity(q);
            let lv = asg.level(vi);
            if lv == dl {
                path_cnt += 1;
            } else if 0 < lv {
                new_learnt.push(q);
                bt_level = bt_level.max(lv);
            }
        }
        // walk the trail back to the next literal on the conflict side
        let reason = loop {
            p = asg.stack_last();
            let r = asg.reason(p.vi());
            let seen = an_seen[p.vi()];
            asg.undo_one();
            if seen {
                break r;
            }
        };
        path_cnt -= 1;
        if path_cnt == 0 {
            break;
        }
        confl = match reason {
            AssignReason::Implication(cid) => cid,
            _ => unreachable!("resolved through a decision before the first UIP"),
        };
    }
    new_learnt[0] = !p;
    if minimize {
        // self-subsuming reduction: a reason literal is redundant when its
        // whole antecedent is already covered by the seen set
        let mut j = 1;
        for i in 1..new_learnt.len() {
            let l = new_learnt[i];
            let keep = match asg.reason(l.vi()) {
                AssignReason::Implication(cid) => cdb[cid]
                    .iter()
                    .skip(1)
                    .any(|q| !an_seen[q.vi()] && asg.level(q.vi()) != 0),
                _ => true,
            };
            if keep {
                new_learnt[j] = l;
                j += 1;
            }
        }
        new_learnt.truncate(j);
    }
    bt_level
}

impl Solver {
    /// expose analysis to integration tests through a full driver step.
    #[cfg(test)]
    pub(crate) fn force_conflict_step(&mut self, ci: ClauseId) {
        handle_conflict(&mut self.asg, &mut self.cdb, &mut self.state, ci);
    }
}
