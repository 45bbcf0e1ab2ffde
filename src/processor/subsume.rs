/// One-pass clause subsumption over the original clause set.
use {
    super::Eliminator,
    crate::{
        cdb::{subset, ClauseDBIF, ClauseIF},
        types::*,
    },
};

/// For every clause C, scan the occurrence list of its rarest literal and
/// mark every longer-or-equal clause whose literal set contains C. Marked
/// clauses are removed in one sweep at the end; a marked clause subsumes
/// nothing itself, which keeps one member of a duplicate pair alive.
pub(super) fn eliminate_subsumed<C>(elim: &mut Eliminator, cdb: &mut C) -> usize
where
    C: ClauseDBIF,
{
    let mut marked = vec![false; elim.targets().iter().max().map_or(0, |m| m + 1)];
    for &cid in elim.targets() {
        if marked[cid] {
            continue;
        }
        let c = &cdb[cid];
        let best = c
            .iter()
            .min_by_key(|l| elim.occurrences(**l).len())
            .copied()
            .expect("empty clause in subsumption index");
        for &other in elim.occurrences(best) {
            if other == cid || marked[other] {
                continue;
            }
            let o = &cdb[other];
            if c.len() <= o.len() && subset(c, o) {
                marked[other] = true;
            }
        }
    }
    let removed = sweep(cdb, &marked);
    elim.num_subsumed += removed;
    removed
}

/// remove the marked clauses and compact the original pool.
fn sweep<C>(cdb: &mut C, marked: &[bool]) -> usize
where
    C: ClauseDBIF,
{
    let mut removed = 0;
    let mut originals = cdb.take_originals();
    let mut j = 0;
    for i in 0..originals.len() {
        let cid = originals[i];
        if marked[cid] {
            cdb.remove_clause(cid);
            removed += 1;
        } else {
            originals[j] = cid;
            j += 1;
        }
    }
    originals.truncate(j);
    cdb.restore_originals(originals);
    removed
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            assign::AssignStack,
            cdb::ClauseDB,
            processor::EliminateIF,
        },
    };

    fn setup(nv: usize) -> (AssignStack, ClauseDB, Eliminator) {
        let cnf = CNFDescription {
            num_of_variables: nv,
            ..CNFDescription::default()
        };
        let config = Config::default();
        (
            AssignStack::instantiate(&config, &cnf),
            ClauseDB::instantiate(&config, &cnf),
            Eliminator::instantiate(&config, &cnf),
        )
    }

    fn lits(v: &[i32]) -> Vec<Lit> {
        v.iter().map(|i| Lit::from(*i)).collect()
    }

    #[test]
    fn test_subsumed_clause_is_removed() {
        let (asg, mut cdb, mut elim) = setup(3);
        let c1 = cdb.new_clause(&asg, &lits(&[1, 2]), false);
        let c2 = cdb.new_clause(&asg, &lits(&[1, 2, 3]), false);
        elim.prepare(&cdb, &cdb.originals);
        assert_eq!(elim.eliminate_subsumed(&mut cdb), 1);
        assert_eq!(cdb.originals, vec![c1]);
        assert!(cdb[c2].is_dead());
        assert_eq!(elim.num_subsumed, 1);
    }

    #[test]
    fn test_different_polarity_does_not_subsume() {
        let (asg, mut cdb, mut elim) = setup(3);
        cdb.new_clause(&asg, &lits(&[1, 2]), false);
        cdb.new_clause(&asg, &lits(&[1, -2, 3]), false);
        elim.prepare(&cdb, &cdb.originals);
        assert_eq!(elim.eliminate_subsumed(&mut cdb), 0);
        assert_eq!(cdb.originals.len(), 2);
    }

    #[test]
    fn test_duplicate_pair_keeps_one() {
        let (asg, mut cdb, mut elim) = setup(2);
        let c1 = cdb.new_clause(&asg, &lits(&[1, 2]), false);
        cdb.new_clause(&asg, &lits(&[1, 2]), false);
        elim.prepare(&cdb, &cdb.originals);
        assert_eq!(elim.eliminate_subsumed(&mut cdb), 1);
        assert_eq!(cdb.originals, vec![c1]);
    }
}
