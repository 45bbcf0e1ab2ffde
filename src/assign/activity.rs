/// Literal activity management for the VSIDS heuristic
use {
    super::{heap::LitHeapIF, AssignStack},
    crate::types::*,
};

/// Ceiling of the bump value; beyond it everything is renormalized.
const ACTIVITY_MAX: f64 = 1e100;

impl ActivityIF<Lit> for AssignStack {
    #[inline]
    fn activity(&self, l: Lit) -> f64 {
        self.activity[usize::from(l)]
    }
    fn bump_activity(&mut self, l: Lit) {
        self.activity[usize::from(l)] += self.activity_bump;
        self.update_heap(l);
    }
    /// Decay is lazy: instead of scaling every activity down, the shared
    /// bump value is scaled up. The ratios, hence the decision order, are
    /// identical; only renormalization pays the full sweep.
    fn decay_activity(&mut self) {
        if ACTIVITY_MAX < self.activity_bump {
            let scale = self.activity_bump;
            for a in self.activity.iter_mut() {
                *a /= scale;
            }
            self.activity_bump = 1.0;
            self.rebuild_heap();
        }
        self.activity_bump *= self.activity_inv_decay;
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::assign::VarSelectIF};

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
    fn test_bump_raises_activity() {
        let mut a = asg(2);
        let l = Lit::from(-2i32);
        a.bump_activity(l);
        assert_eq!(a.activity(l), 1.0);
        a.decay_activity();
        a.bump_activity(l);
        assert!(1.0 / 0.95 < a.activity(l));
    }

    #[test]
    fn test_renormalization_preserves_order() {
        let mut a = asg(2);
        a.activity_bump = 2e100;
        a.activity[usize::from(Lit::from(1i32))] = 4e100;
        a.activity[usize::from(Lit::from(2i32))] = 1e100;
        a.rebuild_order();
        a.decay_activity();
        assert!(a.activity_bump < 1e100);
        assert!(a.activity(Lit::from(1i32)) > a.activity(Lit::from(2i32)));
        assert_eq!(a.activity(Lit::from(1i32)), 2.0);
    }
}
