/// Clause activity management
use {super::ClauseDB, crate::types::*};

/// Ceiling of the bump value; beyond it every learnt activity is rescaled.
const ACTIVITY_MAX: f64 = 1e100;

impl ActivityIF<ClauseId> for ClauseDB {
    #[inline]
    fn activity(&self, cid: ClauseId) -> f64 {
        self.clause[cid].activity()
    }
    fn bump_activity(&mut self, cid: ClauseId) {
        let bump = self.activity_bump;
        self.clause[cid].add_activity(bump);
    }
    fn decay_activity(&mut self) {
        if ACTIVITY_MAX < self.activity_bump {
            let scale = self.activity_bump;
            for i in 0..self.learnts.len() {
                let cid = self.learnts[i];
                self.clause[cid].rescale_activity(scale);
            }
            self.activity_bump = 1.0;
        }
        self.activity_bump *= self.activity_inv_decay;
    }
}
