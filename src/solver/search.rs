/// Conflict-Driven Clause Learning search engine
use {
    super::{
        conflict::handle_conflict,
        restart::{RestartIF, Restarter},
        Certificate, Solver, SolverResult,
    },
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarSelectIF},
        cdb::{ClauseDB, ClauseDBIF, ClauseIF},
        processor::EliminateIF,
        state::{State, StateIF},
        types::*,
    },
};

/// API for the search driver.
pub trait SatSolverSearchIF {
    /// search an assignment; never fails on a well-formed problem.
    fn solve(&mut self) -> SolverResult;
}

impl SatSolverSearchIF for Solver {
    fn solve(&mut self) -> SolverResult {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut elim,
            ref mut rst,
            ref mut state,
        } = self;
        if !state.ok {
            return Ok(Certificate::UNSAT);
        }
        state.progress_header();
        // propagate the units gathered during loading
        if asg.propagate(cdb).is_some() {
            state.ok = false;
            return Ok(Certificate::UNSAT);
        }
        // one-shot root-level simplification, then subsumption
        cdb.simplify_database(asg);
        if elim.enable {
            elim.prepare(cdb, &cdb.originals);
            let n = elim.eliminate_subsumed(cdb);
            elim.stop();
            state.log(2, format!("eliminated {n} subsumed clauses"));
        }
        asg.rebuild_order();
        state.next_reduction = cdb.originals.len() as f64 * state.config.lrn_mult;
        state.progress(asg, cdb, rst);
        let sat = search(asg, cdb, rst, state);
        state.progress(asg, cdb, rst);
        if sat {
            let model = asg.extract_model();
            debug_assert!(
                cdb.originals.iter().all(|cid| cdb[*cid].is_satisfied_under(asg)),
                "the produced assignment falsifies a clause"
            );
            state.model = model.clone();
            Ok(Certificate::SAT(model))
        } else {
            state.ok = false;
            Ok(Certificate::UNSAT)
        }
    }
}

/// main loop: propagate, and either resolve the conflict or make room for
/// the next decision; returns `true` for SAT, `false` for UNSAT.
fn search(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    rst: &mut Restarter,
    state: &mut State,
) -> bool {
    loop {
        match asg.propagate(cdb) {
            Some(ci) => {
                // a conflict with nothing to undo refutes the formula
                if asg.decision_level() == 0 {
                    return false;
                }
                handle_conflict(asg, cdb, state, ci);
            }
            None => {
                if asg.stack_len() == asg.num_vars {
                    return true;
                }
                if state.config.use_reduce()
                    && state.next_reduction as usize <= cdb.learnts.len()
                {
                    let n = cdb.reduce(asg);
                    state.next_reduction *= 1.0 + state.config.lrn_inc / 100.0;
                    state.log(2, format!("dropped {n} learnt clauses"));
                    state.progress(asg, cdb, rst);
                }
                if rst.restart(asg.num_conflict) {
                    asg.cancel_until(0);
                    state.log(2, format!("restart {}", rst.num_restart));
                }
                let l = asg.select_decision_literal();
                asg.assign_by_decision(l);
            }
        }
    }
}
