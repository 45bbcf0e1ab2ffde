//! Module `assign` implements the assignment machinery: the trail, the
//! three-valued variable store, Boolean constraint propagation, and the
//! VSIDS decision heuristic.

/// literal activity: bump, decay, renormalization
mod activity;
/// decision-literal heap
mod heap;
/// boolean constraint propagation and backjumping
mod propagate;
/// decision literal selection
mod select;

pub use self::{
    propagate::PropagateIF,
    select::{Kiss, VarSelectIF},
};

use {
    self::heap::LitIdHeap,
    crate::types::*,
    std::{fmt, ops::Range, slice::Iter},
};

/// Reason of an assignment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AssignReason {
    /// not assigned, or asserted with no antecedent.
    #[default]
    None,
    /// assigned by decision.
    Decision,
    /// assigned by the unit clause behind the id.
    Implication(ClauseId),
}

/// A record of assignments, called 'trail' in the MiniSat lineage, with the
/// per-variable value, level and reason tables, and the decision heuristic.
#[derive(Clone, Debug)]
pub struct AssignStack {
    /// assigned values, indexed by var
    values: Vec<Value>,
    /// decision levels, indexed by var
    level: Vec<DecisionLevel>,
    /// assignment reasons, indexed by var
    reason: Vec<AssignReason>,
    /// record of assignment
    trail: Vec<Lit>,
    trail_lim: Vec<usize>,
    /// the first unpropagated position in `trail`
    q_head: usize,

    //
    //## VSIDS
    //
    /// literal activities, indexed by lit
    activity: Vec<f64>,
    /// the current activity increment
    activity_bump: f64,
    /// reciprocal of the literal decay factor
    activity_inv_decay: f64,
    /// decision order over literals
    var_order: LitIdHeap,
    /// deterministic generator for the random-decision path
    rng: Kiss,
    use_random_choice: bool,

    //
    //## Statistics
    //
    /// the number of vars.
    pub num_vars: usize,
    pub num_decision: usize,
    pub num_propagation: usize,
    pub num_conflict: usize,
}

/// API for assignment-state inspection shared across modules.
pub trait AssignIF {
    /// return the value of a literal under the current assignment.
    fn assigned(&self, l: Lit) -> Value;
    /// return the value of a var.
    fn var_value(&self, vi: VarId) -> Value;
    /// return the current decision level.
    fn decision_level(&self) -> DecisionLevel;
    /// return the decision level of an assigned var.
    fn level(&self, vi: VarId) -> DecisionLevel;
    /// return the reason of a var's assignment.
    fn reason(&self, vi: VarId) -> AssignReason;
    /// return the number of assigned vars.
    fn stack_len(&self) -> usize;
    /// return the `i`-th trail entry.
    fn stack(&self, i: usize) -> Lit;
    /// return an iterator over a trail range.
    fn stack_range(&self, r: Range<usize>) -> Iter<'_, Lit>;
    /// return the model as DIMACS signed ints; callable once every var is
    /// assigned.
    fn extract_model(&self) -> Vec<i32>;
}

impl Default for AssignStack {
    fn default() -> AssignStack {
        AssignStack {
            values: Vec::new(),
            level: Vec::new(),
            reason: Vec::new(),
            trail: Vec::new(),
            trail_lim: Vec::new(),
            q_head: 0,
            activity: Vec::new(),
            activity_bump: 1.0,
            activity_inv_decay: 1.0 / 0.95,
            var_order: LitIdHeap::default(),
            rng: Kiss::default(),
            use_random_choice: true,
            num_vars: 0,
            num_decision: 0,
            num_propagation: 0,
            num_conflict: 0,
        }
    }
}

impl Instantiate for AssignStack {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> AssignStack {
        let nv = cnf.num_of_variables;
        AssignStack {
            values: vec![Value::Unassigned; nv],
            level: vec![0; nv],
            reason: vec![AssignReason::None; nv],
            trail: Vec::with_capacity(nv),
            activity: vec![0.0; 2 * nv],
            activity_inv_decay: 1.0 / config.lit_decay,
            var_order: LitIdHeap::new(2 * nv),
            use_random_choice: config.use_random_choice(),
            num_vars: nv,
            ..AssignStack::default()
        }
    }
}

impl AssignIF for AssignStack {
    #[inline]
    fn assigned(&self, l: Lit) -> Value {
        // the encoding makes the negated view the three-valued complement
        let v = self.values[l.vi()];
        if l.is_negated() {
            !v
        } else {
            v
        }
    }
    #[inline]
    fn var_value(&self, vi: VarId) -> Value {
        self.values[vi]
    }
    #[inline]
    fn decision_level(&self) -> DecisionLevel {
        self.trail_lim.len() as DecisionLevel
    }
    #[inline]
    fn level(&self, vi: VarId) -> DecisionLevel {
        self.level[vi]
    }
    #[inline]
    fn reason(&self, vi: VarId) -> AssignReason {
        self.reason[vi]
    }
    #[inline]
    fn stack_len(&self) -> usize {
        self.trail.len()
    }
    #[inline]
    fn stack(&self, i: usize) -> Lit {
        self.trail[i]
    }
    fn stack_range(&self, r: Range<usize>) -> Iter<'_, Lit> {
        self.trail[r].iter()
    }
    fn extract_model(&self) -> Vec<i32> {
        debug_assert_eq!(self.trail.len(), self.num_vars);
        self.values
            .iter()
            .enumerate()
            .map(|(vi, v)| match v {
                Value::True => vi as i32 + 1,
                _ => -(vi as i32 + 1),
            })
            .collect::<Vec<i32>>()
    }
}

impl fmt::Display for AssignStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ASG:: level({}), trail({:?})",
            self.decision_level(),
            i32s(&self.trail),
        )
    }
}

impl AssignStack {
    /// return the last trail entry without removing it.
    pub(crate) fn stack_last(&self) -> Lit {
        *self.trail.last().expect("empty trail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asg(nv: usize) -> AssignStack {
        AssignStack::instantiate(
            &Config::default(),
            &CNFDescription {
                num_of_variables: nv,
                ..CNFDescription::default()
            },
        )
    }

    #[test]
    fn test_assigned_mirrors_var_value() {
        let mut a = asg(2);
        a.assign_by_decision(Lit::from(1i32));
        assert_eq!(a.var_value(0), Value::True);
        assert_eq!(a.assigned(Lit::from(1i32)), Value::True);
        assert_eq!(a.assigned(Lit::from(-1i32)), Value::False);
        assert_eq!(a.assigned(Lit::from(2i32)), Value::Unassigned);
        assert_eq!(a.assigned(Lit::from(-2i32)), Value::Unassigned);
    }

    #[test]
    fn test_decision_levels() {
        let mut a = asg(3);
        assert_eq!(a.decision_level(), 0);
        a.assign_by_decision(Lit::from(1i32));
        a.assign_by_decision(Lit::from(-2i32));
        assert_eq!(a.decision_level(), 2);
        assert_eq!(a.level(0), 1);
        assert_eq!(a.level(1), 2);
        a.cancel_until(1);
        assert_eq!(a.decision_level(), 1);
        assert_eq!(a.var_value(1), Value::Unassigned);
        assert_eq!(a.var_value(0), Value::True);
    }
}
