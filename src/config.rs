/// Crate `config` provides the solver's configuration and CLI.
use {
    crate::types::{MaybeInconsistent, SolverError},
    std::path::PathBuf,
    structopt::StructOpt,
};

/// Configuration built from command line options
#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "cadre", about = "A CDCL SAT solver for propositional formulas in DIMACS CNF")]
pub struct Config {
    //
    //## I/O configuration
    //
    /// CNF file in DIMACS format; read from standard input if omitted
    #[structopt(parse(from_os_str))]
    pub cnf_file: Option<PathBuf>,

    /// Report the resolution process step by step
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,

    /// Print the model after a satisfiable verdict
    #[structopt(long = "proof", short = "p")]
    pub proof: bool,

    /// Progress report level (0 = quiet, 1 = normal, 2 = verbose)
    #[structopt(skip = 1u8)]
    pub log_level: u8,

    //
    //## feature switches
    //
    /// Disable the subsumption preprocessor
    #[structopt(long = "no-preprocessing")]
    no_elim: bool,

    /// Disable search restarts
    #[structopt(long = "no-restart")]
    no_restart: bool,

    /// Disable deletion of learnt clauses
    #[structopt(long = "no-deletion")]
    no_reduce: bool,

    /// Disable the random decision taken in 1% of the cases
    #[structopt(long = "no-random")]
    no_random: bool,

    /// Disable conflict-clause minimization
    #[structopt(long = "no-cc-reduction")]
    no_minimize: bool,

    //
    //## activity decay
    //
    /// Decay factor for clause activity; 0 < c-decay <= 1
    #[structopt(long = "c-decay", default_value = "0.999")]
    pub cla_decay: f64,

    /// Decay factor for literal activity; 0 < l-decay <= 1
    #[structopt(long = "l-decay", default_value = "0.95")]
    pub lit_decay: f64,

    //
    //## restart policy
    //
    /// Multiplier of the Luby restart intervals
    #[structopt(long = "restart-mult", short = "b", default_value = "100")]
    pub rst_mult: usize,

    //
    //## clause deletion policy
    //
    /// Initial learn limit, as a multiple of the original clause count
    #[structopt(long = "learn-mult", short = "l", default_value = "0.5")]
    pub lrn_mult: f64,

    /// Growth of the learn limit in percent, applied after every reduction
    #[structopt(long = "learn-increase", short = "i", default_value = "10.0")]
    pub lrn_inc: f64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cnf_file: None,
            verbose: false,
            proof: false,
            log_level: 1,
            no_elim: false,
            no_restart: false,
            no_reduce: false,
            no_random: false,
            no_minimize: false,
            cla_decay: 0.999,
            lit_decay: 0.95,
            rst_mult: 100,
            lrn_mult: 0.5,
            lrn_inc: 10.0,
        }
    }
}

impl<T> From<T> for Config
where
    PathBuf: From<T>,
{
    fn from(path: T) -> Config {
        Config {
            cnf_file: Some(PathBuf::from(path)),
            ..Config::default()
        }
    }
}

impl Config {
    /// fold CLI shorthands into the base fields and check every range.
    pub fn override_args(mut self) -> Result<Config, SolverError> {
        if self.verbose {
            self.log_level = 2;
        }
        self.validate()?;
        Ok(self)
    }
    pub fn validate(&self) -> MaybeInconsistent {
        if !(0.0 < self.cla_decay && self.cla_decay <= 1.0) {
            return Err(SolverError::InvalidConfig("should be 0 < c-decay <= 1.0"));
        }
        if !(0.0 < self.lit_decay && self.lit_decay <= 1.0) {
            return Err(SolverError::InvalidConfig("should be 0 < l-decay <= 1.0"));
        }
        if self.rst_mult < 1 {
            return Err(SolverError::InvalidConfig("should be restart-mult >= 1"));
        }
        if self.lrn_mult <= 0.0 {
            return Err(SolverError::InvalidConfig("should be learn-mult > 0"));
        }
        if self.lrn_inc < 0.0 {
            return Err(SolverError::InvalidConfig("should be learn-increase >= 0"));
        }
        if 2 < self.log_level {
            return Err(SolverError::InvalidConfig("log level is 0, 1 or 2"));
        }
        Ok(())
    }
    pub fn use_elim(&self) -> bool {
        !self.no_elim
    }
    pub fn use_restart(&self) -> bool {
        !self.no_restart
    }
    pub fn use_reduce(&self) -> bool {
        !self.no_reduce
    }
    pub fn use_random_choice(&self) -> bool {
        !self.no_random
    }
    pub fn use_minimize(&self) -> bool {
        !self.no_minimize
    }

    //
    //## programmatic setters
    //
    pub fn preprocessing(&mut self, enable: bool) {
        self.no_elim = !enable;
    }
    pub fn restart(&mut self, enable: bool) {
        self.no_restart = !enable;
    }
    pub fn deletion(&mut self, enable: bool) {
        self.no_reduce = !enable;
    }
    pub fn random_choice(&mut self, enable: bool) {
        self.no_random = !enable;
    }
    pub fn conflict_reduction(&mut self, enable: bool) {
        self.no_minimize = !enable;
    }
    pub fn clause_decay(&mut self, decay: f64) -> MaybeInconsistent {
        if !(0.0 < decay && decay <= 1.0) {
            return Err(SolverError::InvalidConfig("should be 0 < c-decay <= 1.0"));
        }
        self.cla_decay = decay;
        Ok(())
    }
    pub fn literal_decay(&mut self, decay: f64) -> MaybeInconsistent {
        if !(0.0 < decay && decay <= 1.0) {
            return Err(SolverError::InvalidConfig("should be 0 < l-decay <= 1.0"));
        }
        self.lit_decay = decay;
        Ok(())
    }
    pub fn restart_multiplier(&mut self, mult: usize) -> MaybeInconsistent {
        if mult < 1 {
            return Err(SolverError::InvalidConfig("should be restart-mult >= 1"));
        }
        self.rst_mult = mult;
        Ok(())
    }
    pub fn learning_multiplier(&mut self, mult: f64) -> MaybeInconsistent {
        if mult <= 0.0 {
            return Err(SolverError::InvalidConfig("should be learn-mult > 0"));
        }
        self.lrn_mult = mult;
        Ok(())
    }
    pub fn learning_increase(&mut self, percent: f64) -> MaybeInconsistent {
        if percent < 0.0 {
            return Err(SolverError::InvalidConfig("should be learn-increase >= 0"));
        }
        self.lrn_inc = percent;
        Ok(())
    }
    pub fn log_level(&mut self, level: u8) -> MaybeInconsistent {
        if 2 < level {
            return Err(SolverError::InvalidConfig("log level is 0, 1 or 2"));
        }
        self.log_level = level;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_decay_ranges() {
        let mut c = Config::default();
        assert!(c.clause_decay(0.0).is_err());
        assert!(c.clause_decay(1.5).is_err());
        assert!(c.clause_decay(1.0).is_ok());
        assert!(c.literal_decay(-0.1).is_err());
        assert!(c.literal_decay(0.95).is_ok());
    }

    #[test]
    fn test_switches() {
        let mut c = Config::default();
        assert!(c.use_elim());
        c.preprocessing(false);
        assert!(!c.use_elim());
        assert!(c.use_random_choice());
        c.random_choice(false);
        assert!(!c.use_random_choice());
    }

    #[test]
    fn test_multiplier_ranges() {
        let mut c = Config::default();
        assert!(c.restart_multiplier(0).is_err());
        assert!(c.restart_multiplier(1).is_ok());
        assert!(c.learning_multiplier(0.0).is_err());
        assert!(c.learning_multiplier(0.5).is_ok());
        assert!(c.learning_increase(-1.0).is_err());
        assert!(c.learning_increase(0.0).is_ok());
        assert!(c.log_level(3).is_err());
        assert!(c.log_level(0).is_ok());
    }
}
