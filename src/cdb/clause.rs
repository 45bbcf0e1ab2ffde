use {
    crate::{assign::AssignIF, types::*},
    std::{
        fmt,
        ops::{Index, IndexMut, Range, RangeFrom},
        slice::Iter,
    },
};

/// The extra word of a clause: original clauses carry a 64-bit subsumption
/// signature, learned clauses an activity score.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum ClauseExtra {
    Signature(u64),
    Activity(f64),
}

/// A representation of 'clause'. Stored clauses always hold at least two
/// literals; the literals at positions 0 and 1 are the watched ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    /// The literals in a clause.
    pub(super) lits: Vec<Lit>,
    /// Flags
    flags: FlagClause,
    /// signature or activity, depending on `FlagClause::LEARNT`
    extra: ClauseExtra,
}

/// API for Clause, providing literal accessors.
pub trait ClauseIF {
    /// return true if it is a freed arena slot.
    fn is_dead(&self) -> bool;
    /// return the 1st watch.
    fn lit0(&self) -> Lit;
    /// return the 2nd watch.
    fn lit1(&self) -> Lit;
    /// return `true` if the clause contains the literal.
    fn contains(&self, lit: Lit) -> bool;
    /// check clause satisfiability under the given assignment.
    fn is_satisfied_under(&self, asg: &impl AssignIF) -> bool;
    /// return an iterator over its literals.
    fn iter(&self) -> Iter<'_, Lit>;
    /// return the number of literals.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// map a literal to its bit in the clause signature.
fn lit_hash(l: Lit) -> u32 {
    (l.vi() % 32) as u32 + if l.is_negated() { 32 } else { 0 }
}

/// `true` if A's literal set is a subset of B's. The signature comparison
/// rejects the non-subsumed majority without touching the literals.
pub fn subset(a: &Clause, b: &Clause) -> bool {
    if a.signature() & !b.signature() != 0 {
        return false;
    }
    a.iter().all(|l| b.contains(*l))
}

impl Clause {
    pub(super) fn new(lits: Vec<Lit>, learnt: bool, bump: f64) -> Clause {
        debug_assert!(1 < lits.len());
        let (flags, extra) = if learnt {
            (FlagClause::LEARNT, ClauseExtra::Activity(bump))
        } else {
            let mut sig = 0u64;
            for l in &lits {
                sig |= 1u64 << lit_hash(*l);
            }
            (FlagClause::empty(), ClauseExtra::Signature(sig))
        };
        Clause { lits, flags, extra }
    }
    /// the subsumption signature of an original clause.
    pub fn signature(&self) -> u64 {
        match self.extra {
            ClauseExtra::Signature(sig) => sig,
            ClauseExtra::Activity(_) => unreachable!("learnt clauses have no signature"),
        }
    }
    /// the activity of a learnt clause.
    pub fn activity(&self) -> f64 {
        match self.extra {
            ClauseExtra::Activity(val) => val,
            ClauseExtra::Signature(_) => unreachable!("original clauses have no activity"),
        }
    }
    pub(super) fn add_activity(&mut self, inc: f64) {
        if let ClauseExtra::Activity(ref mut val) = self.extra {
            *val += inc;
        }
    }
    pub(super) fn rescale_activity(&mut self, scale: f64) {
        if let ClauseExtra::Activity(ref mut val) = self.extra {
            *val /= scale;
        }
    }
    /// drop the literals after the first `new_len` ones.
    pub fn shrink(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.lits.len(), "cannot grow a clause");
        self.lits.truncate(new_len);
    }
    /// exchange the two watched literals.
    pub(crate) fn swap_watch_lits(&mut self) {
        self.lits.swap(0, 1);
    }
    pub(crate) fn swap_lits(&mut self, i: usize, j: usize) {
        self.lits.swap(i, j);
    }
    /// turn into a freed arena slot.
    pub(super) fn kill(&mut self) {
        self.turn_on(FlagClause::DEAD);
        self.lits.clear();
    }
}

impl Default for Clause {
    fn default() -> Clause {
        Clause {
            lits: vec![],
            flags: FlagClause::empty(),
            extra: ClauseExtra::Signature(0),
        }
    }
}

impl ClauseIF for Clause {
    fn is_dead(&self) -> bool {
        self.is(FlagClause::DEAD)
    }
    #[inline]
    fn lit0(&self) -> Lit {
        self.lits[0]
    }
    #[inline]
    fn lit1(&self) -> Lit {
        self.lits[1]
    }
    fn contains(&self, lit: Lit) -> bool {
        self.lits.contains(&lit)
    }
    fn is_satisfied_under(&self, asg: &impl AssignIF) -> bool {
        self.lits.iter().any(|l| asg.assigned(*l) == Value::True)
    }
    fn iter(&self) -> Iter<'_, Lit> {
        self.lits.iter()
    }
    #[inline]
    fn len(&self) -> usize {
        self.lits.len()
    }
    fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }
}

impl FlagIF for Clause {
    type FlagType = FlagClause;
    #[inline]
    fn is(&self, flag: Self::FlagType) -> bool {
        self.flags.contains(flag)
    }
    #[inline]
    fn set(&mut self, f: Self::FlagType, b: bool) {
        self.flags.set(f, b);
    }
    #[inline]
    fn turn_off(&mut self, flag: Self::FlagType) {
        self.flags.remove(flag);
    }
    #[inline]
    fn turn_on(&mut self, flag: Self::FlagType) {
        self.flags.insert(flag);
    }
}

impl Index<usize> for Clause {
    type Output = Lit;
    #[inline]
    fn index(&self, i: usize) -> &Lit {
        &self.lits[i]
    }
}

impl IndexMut<usize> for Clause {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Lit {
        &mut self.lits[i]
    }
}

impl Index<Range<usize>> for Clause {
    type Output = [Lit];
    #[inline]
    fn index(&self, r: Range<usize>) -> &[Lit] {
        &self.lits[r]
    }
}

impl Index<RangeFrom<usize>> for Clause {
    type Output = [Lit];
    #[inline]
    fn index(&self, r: RangeFrom<usize>) -> &[Lit] {
        &self.lits[r]
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = Iter<'a, Lit>;
    fn into_iter(self) -> Self::IntoIter {
        self.lits.iter()
    }
}

impl From<&Clause> for Vec<i32> {
    fn from(c: &Clause) -> Vec<i32> {
        c.lits.iter().map(|l| i32::from(*l)).collect::<Vec<i32>>()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let st = |flag, mes| if self.is(flag) { mes } else { "" };
        write!(
            f,
            "{{{:?}{}{}}}",
            i32s(&self.lits),
            st(FlagClause::LEARNT, ", learnt"),
            st(FlagClause::DEAD, ", dead"),
        )
    }
}
