//! Module `state` is a collection of internal data that is not behavior:
//! run statistics, working buffers shared across conflicts, and progress
//! reporting.

use {
    crate::{
        assign::AssignStack,
        cdb::ClauseDB,
        solver::Restarter,
        types::*,
    },
    std::time::Instant,
};

/// Miscellaneous data on the search shared by the driver's submodules.
#[derive(Clone, Debug)]
pub struct State {
    /// cleared by an unsatisfiable clause set; checked before searching
    pub ok: bool,
    pub config: Config,
    /// learn limit for the reduction scheduler
    pub next_reduction: f64,
    /// buffer for the clause being learnt
    pub new_learnt: Vec<Lit>,
    /// per-var seen marks for conflict analysis
    pub an_seen: Vec<bool>,
    /// the model produced by the last satisfiable answer
    pub model: Vec<i32>,
    pub start: Instant,
    pub progress_cnt: usize,
    pub target: CNFDescription,
}

impl Default for State {
    fn default() -> State {
        State {
            ok: true,
            config: Config::default(),
            next_reduction: 0.0,
            new_learnt: Vec::new(),
            an_seen: Vec::new(),
            model: Vec::new(),
            start: Instant::now(),
            progress_cnt: 0,
            target: CNFDescription::default(),
        }
    }
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> State {
        State {
            config: config.clone(),
            an_seen: vec![false; cnf.num_of_variables],
            target: cnf.clone(),
            ..State::default()
        }
    }
}

/// API for progress reporting.
pub trait StateIF {
    /// print the search parameters once, at the beginning.
    fn progress_header(&mut self);
    /// print one progress line.
    fn progress(&mut self, asg: &AssignStack, cdb: &ClauseDB, rst: &Restarter);
}

impl StateIF for State {
    fn progress_header(&mut self) {
        if self.config.log_level < 1 {
            return;
        }
        println!("{}", self.target);
    }
    fn progress(&mut self, asg: &AssignStack, cdb: &ClauseDB, rst: &Restarter) {
        if self.config.log_level < 1 {
            return;
        }
        self.progress_cnt += 1;
        let mut line = format!("conflict:{:>9}", asg.num_conflict);
        if rst.enable {
            line.push_str(&format!(", restart:{:>6}", rst.num_restart));
        }
        if self.config.use_reduce() {
            line.push_str(&format!(", learn limit:{:>8}", self.next_reduction as usize));
        }
        line.push_str(&format!(", learnt:{:>8}", cdb.learnts.len()));
        println!("{line}");
    }
}

impl State {
    /// print `mes` when the report level reaches `lv`.
    pub fn log<S: AsRef<str>>(&self, lv: u8, mes: S) {
        if lv <= self.config.log_level {
            println!("{}", mes.as_ref());
        }
    }
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
