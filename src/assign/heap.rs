/// Heap struct for selecting decision literals
use {
    super::AssignStack,
    crate::types::*,
    std::fmt,
};

/// Max-heap over literal indices keyed by activity, with a position map so
/// that a bumped literal can be sifted up in O(log n).
#[derive(Clone, Debug, Default)]
pub(super) struct LitIdHeap {
    /// heap slots holding literals
    pub(super) heap: Vec<Lit>,
    /// slot of a literal in `heap`, or -1 when absent
    pub(super) pos: Vec<i32>,
}

impl LitIdHeap {
    pub fn new(n_lits: usize) -> LitIdHeap {
        LitIdHeap {
            heap: Vec::with_capacity(n_lits),
            pos: vec![-1; n_lits],
        }
    }
    #[inline]
    pub fn contains(&self, l: Lit) -> bool {
        self.pos[usize::from(l)] != -1
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl fmt::Display for LitIdHeap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " - nth -> lit: {:?}\n - lit -> nth: {:?}", self.heap, self.pos)
    }
}

/// Internal heap manipulation API
pub(super) trait LitHeapIF {
    fn insert_heap(&mut self, l: Lit);
    fn update_heap(&mut self, l: Lit);
    fn get_heap_root(&mut self) -> Lit;
    fn rebuild_heap(&mut self);
    fn percolate_up(&mut self, start: usize);
    fn percolate_down(&mut self, start: usize);
}

impl LitHeapIF for AssignStack {
    fn insert_heap(&mut self, l: Lit) {
        if self.var_order.contains(l) {
            return;
        }
        let i = self.var_order.heap.len();
        self.var_order.heap.push(l);
        self.var_order.pos[usize::from(l)] = i as i32;
        self.percolate_up(i);
    }
    fn update_heap(&mut self, l: Lit) {
        if self.var_order.contains(l) {
            let start = self.var_order.pos[usize::from(l)] as usize;
            self.percolate_up(start);
        }
    }
    fn get_heap_root(&mut self) -> Lit {
        debug_assert!(!self.var_order.is_empty(), "pop from an empty heap");
        let top = self.var_order.heap[0];
        self.var_order.pos[usize::from(top)] = -1;
        let last = self.var_order.heap.pop().expect("empty heap");
        if !self.var_order.is_empty() {
            self.var_order.heap[0] = last;
            self.var_order.pos[usize::from(last)] = 0;
            self.percolate_down(0);
        }
        top
    }
    /// fill the heap with every literal and restore the heap property
    /// bottom-up.
    fn rebuild_heap(&mut self) {
        self.var_order.heap.clear();
        for ix in 0..2 * self.num_vars {
            self.var_order.heap.push(Lit::from_index(ix));
            self.var_order.pos[ix] = ix as i32;
        }
        for i in (0..self.var_order.len() / 2).rev() {
            self.percolate_down(i);
        }
    }
    fn percolate_up(&mut self, start: usize) {
        let mut q = start;
        let vq = self.var_order.heap[q];
        let aq = self.activity(vq);
        while 0 < q {
            let p = (q - 1) >> 1;
            let vp = self.var_order.heap[p];
            if aq <= self.activity(vp) {
                break;
            }
            // move down the current parent, and continue from its slot
            self.var_order.heap[q] = vp;
            self.var_order.pos[usize::from(vp)] = q as i32;
            q = p;
        }
        self.var_order.heap[q] = vq;
        self.var_order.pos[usize::from(vq)] = q as i32;
    }
    fn percolate_down(&mut self, start: usize) {
        let n = self.var_order.len();
        let mut i = start;
        let vi = self.var_order.heap[i];
        let ai = self.activity(vi);
        loop {
            let l = 2 * i + 1; // left
            if n <= l {
                break;
            }
            let r = l + 1; // right
            let mut target = l;
            let mut vc = self.var_order.heap[l];
            let mut ac = self.activity(vc);
            if r < n {
                let vr = self.var_order.heap[r];
                let ar = self.activity(vr);
                if ac < ar {
                    target = r;
                    vc = vr;
                    ac = ar;
                }
            }
            if ai < ac {
                self.var_order.heap[i] = vc;
                self.var_order.pos[usize::from(vc)] = i as i32;
                i = target;
            } else {
                break;
            }
        }
        self.var_order.heap[i] = vi;
        self.var_order.pos[usize::from(vi)] = i as i32;
    }
}
