//! End-to-end scenarios and properties of the whole solver.
use cadre::{
    types::{CNFDescription, Instantiate},
    Certificate, Config, SatSolverIF, Solver, ValidateIF,
};

fn build(nv: usize, clauses: &[Vec<i32>], config: &Config) -> Solver {
    let cnf = CNFDescription {
        num_of_variables: nv,
        num_of_clauses: clauses.len(),
        pathname: "--".to_string(),
    };
    let mut s = Solver::instantiate(config, &cnf);
    for c in clauses {
        s.add_clause(c);
    }
    s
}

fn solve(nv: usize, clauses: &[Vec<i32>], config: &Config) -> (bool, Solver) {
    let mut s = build(nv, clauses, config);
    let sat = matches!(s.solve(), Ok(Certificate::SAT(_)));
    (sat, s)
}

/// the pigeon-hole formula for `holes` holes and `holes + 1` pigeons.
fn pigeon_hole(holes: usize) -> (usize, Vec<Vec<i32>>) {
    let pigeons = holes + 1;
    let var = |p: usize, h: usize| ((p - 1) * holes + h) as i32;
    let mut clauses = Vec::new();
    for p in 1..=pigeons {
        clauses.push((1..=holes).map(|h| var(p, h)).collect());
    }
    for h in 1..=holes {
        for i in 1..pigeons {
            for j in i + 1..=pigeons {
                clauses.push(vec![-var(i, h), -var(j, h)]);
            }
        }
    }
    (holes * pigeons, clauses)
}

#[test]
fn test_unit_chain() {
    let clauses = vec![vec![1], vec![-1, 2], vec![-2, 3]];
    let mut s = build(3, &clauses, &Config::default());
    assert_eq!(s.solve(), Ok(Certificate::SAT(vec![1, 2, 3])));
}

#[test]
fn test_pure_conflict() {
    let mut s = build(1, &[vec![1], vec![-1]], &Config::default());
    assert_eq!(s.solve(), Ok(Certificate::UNSAT));
}

#[test]
fn test_pigeon_hole_2_is_unsat() {
    let (nv, clauses) = pigeon_hole(2);
    assert_eq!(nv, 6);
    assert_eq!(clauses.len(), 9);
    let (sat, _) = solve(nv, &clauses, &Config::default());
    assert!(!sat);
}

#[test]
fn test_pigeon_hole_4_is_unsat() {
    let (nv, clauses) = pigeon_hole(4);
    let (sat, _) = solve(nv, &clauses, &Config::default());
    assert!(!sat);
}

#[test]
fn test_trivial_sat() {
    let (sat, s) = solve(2, &[vec![1, 2]], &Config::default());
    assert!(sat);
    assert!(s.model().contains(&1) || s.model().contains(&2));
    assert_eq!(s.validate(), None);
}

#[test]
fn test_tautology_leaves_no_clause() {
    let mut s = build(1, &[vec![1, -1]], &Config::default());
    assert!(s.cdb.originals.is_empty());
    assert!(matches!(s.solve(), Ok(Certificate::SAT(_))));
}

#[test]
fn test_subsumption_keeps_the_general_clause() {
    let clauses = vec![vec![1, 2], vec![1, 2, 3]];
    let (sat, s) = solve(3, &clauses, &Config::default());
    assert!(sat);
    assert_eq!(s.elim.num_subsumed, 1);
    assert_eq!(s.cdb.originals.len(), 1);
}

#[test]
fn test_determinism_under_fixed_seed() {
    let (nv, clauses) = pigeon_hole(3);
    let (sat1, s1) = solve(nv, &clauses, &Config::default());
    let (sat2, s2) = solve(nv, &clauses, &Config::default());
    assert_eq!(sat1, sat2);
    assert_eq!(s1.asg.num_conflict, s2.asg.num_conflict);
    assert_eq!(s1.asg.num_decision, s2.asg.num_decision);
    assert_eq!(s1.asg.num_propagation, s2.asg.num_propagation);
}

#[test]
fn test_verdict_is_stable_across_features() {
    let (nv, clauses) = pigeon_hole(3);
    let mut plain = Config::default();
    plain.log_level(0).unwrap();
    for switch in 0..4 {
        let mut config = plain.clone();
        match switch {
            0 => config.restart(false),
            1 => config.deletion(false),
            2 => config.conflict_reduction(false),
            _ => config.random_choice(false),
        }
        let (sat, _) = solve(nv, &clauses, &config);
        assert!(!sat, "verdict changed under feature switch {switch}");
    }
    // and a satisfiable instance stays satisfiable
    let sat_clauses = vec![vec![1, 2], vec![-1, 3], vec![-3, -2, 1]];
    for no_restart in [false, true] {
        let mut config = plain.clone();
        config.restart(!no_restart);
        let (sat, s) = solve(3, &sat_clauses, &config);
        assert!(sat);
        assert_eq!(s.validate(), None);
    }
}

//
// a small independent reference: DPLL with unit propagation
//

fn dpll(clauses: &[Vec<i32>], nv: usize, assign: &mut Vec<Option<bool>>) -> bool {
    loop {
        let mut unit = None;
        for c in clauses {
            let mut satisfied = false;
            let mut unassigned = None;
            let mut open = 0;
            for &l in c {
                match assign[l.unsigned_abs() as usize] {
                    Some(v) if v == (0 < l) => {
                        satisfied = true;
                        break;
                    }
                    Some(_) => (),
                    None => {
                        open += 1;
                        unassigned = Some(l);
                    }
                }
            }
            if satisfied {
                continue;
            }
            match open {
                0 => return false,
                1 if unit.is_none() => unit = unassigned,
                _ => (),
            }
        }
        match unit {
            Some(l) => assign[l.unsigned_abs() as usize] = Some(0 < l),
            None => break,
        }
    }
    match (1..=nv).find(|v| assign[*v].is_none()) {
        None => true,
        Some(v) => {
            let saved = assign.clone();
            assign[v] = Some(true);
            if dpll(clauses, nv, assign) {
                return true;
            }
            *assign = saved;
            assign[v] = Some(false);
            if dpll(clauses, nv, assign) {
                return true;
            }
            assign[v] = None;
            false
        }
    }
}

/// a tiny deterministic generator for the 3-CNF sweep
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

fn random_3cnf(seed: u64, nv: usize, nc: usize) -> Vec<Vec<i32>> {
    let mut rng = Lcg(seed);
    let mut clauses = Vec::with_capacity(nc);
    for _ in 0..nc {
        let mut vars = Vec::with_capacity(3);
        while vars.len() < 3 {
            let v = (rng.next() as usize % nv) as i32 + 1;
            if !vars.contains(&v) {
                vars.push(v);
            }
        }
        clauses.push(
            vars.iter()
                .map(|v| if rng.next() % 2 == 0 { *v } else { -*v })
                .collect::<Vec<i32>>(),
        );
    }
    clauses
}

/// near the phase transition the verdict must match the DPLL reference,
/// and every satisfiable answer must pass model validation.
#[test]
fn test_random_3cnf_agrees_with_reference() {
    let nv = 8;
    let nc = 34;
    let mut config = Config::default();
    config.log_level(0).unwrap();
    for seed in 0..30u64 {
        let clauses = random_3cnf(seed.wrapping_mul(0x9e37_79b9) + 1, nv, nc);
        let mut assign = vec![None; nv + 1];
        let expected = dpll(&clauses, nv, &mut assign);
        let (sat, s) = solve(nv, &clauses, &config);
        assert_eq!(sat, expected, "wrong verdict on seed {seed}");
        if sat {
            assert_eq!(s.validate(), None);
            // round trip against the original formula, not the stored one
            let model = s.model();
            for c in &clauses {
                assert!(
                    c.iter().any(|l| model.contains(l)),
                    "model misses clause {c:?} on seed {seed}"
                );
            }
        }
    }
}
