/// Decision literal selection
use {
    super::{heap::LitHeapIF, AssignIF, AssignStack},
    crate::types::*,
};

/// API for decision-literal selection, depending on the internal heap.
pub trait VarSelectIF {
    /// select a new decision literal.
    fn select_decision_literal(&mut self) -> Lit;
    /// rebuild the decision order from scratch.
    fn rebuild_order(&mut self);
}

/// KISS combined congruential/xorshift/multiply-with-carry generator with
/// fixed seeds, so runs are reproducible.
#[derive(Clone, Debug)]
pub struct Kiss {
    seed_1: u32,
    seed_2: u32,
    seed_3: u32,
    seed_4: u32,
}

impl Default for Kiss {
    fn default() -> Kiss {
        Kiss {
            seed_1: 123_456_789,
            seed_2: 362_436_000,
            seed_3: 521_288_629,
            seed_4: 7_654_321,
        }
    }
}

impl Kiss {
    pub fn next(&mut self) -> u32 {
        self.seed_1 = 69_069u32
            .wrapping_mul(self.seed_1)
            .wrapping_add(12_345);
        self.seed_2 ^= self.seed_2 << 13;
        self.seed_2 ^= self.seed_2 >> 17;
        self.seed_2 ^= self.seed_2 << 5;
        let t = 698_769_069u64
            .wrapping_mul(u64::from(self.seed_3))
            .wrapping_add(u64::from(self.seed_4));
        self.seed_4 = (t >> 32) as u32;
        self.seed_3 = self.seed_4;
        self.seed_1.wrapping_add(self.seed_2).wrapping_add(self.seed_3)
    }
}

impl VarSelectIF for AssignStack {
    fn select_decision_literal(&mut self) -> Lit {
        debug_assert!(self.stack_len() < self.num_vars);
        // a uniformly random var and polarity, once in a hundred decisions
        if self.use_random_choice && self.rng.next() % 100 == 0 {
            let vi = loop {
                let vi = self.rng.next() as usize % self.num_vars;
                if self.values[vi] == Value::Unassigned {
                    break vi;
                }
            };
            return Lit::from((vi, self.rng.next() % 2 == 1));
        }
        loop {
            let l = self.get_heap_root();
            if self.values[l.vi()] == Value::Unassigned {
                return l;
            }
        }
    }
    fn rebuild_order(&mut self) {
        self.rebuild_heap();
    }
}
