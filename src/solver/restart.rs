/// Luby-driven restart scheduling
use crate::types::*;

/// API for restart control.
pub trait RestartIF {
    /// check the budget against the cumulative conflict count; on a hit,
    /// advance it by the next Luby interval and return `true`.
    fn restart(&mut self, num_conflict: usize) -> bool;
}

/// `Restarter` provides a conflict budget per run from the Luby sequence
/// scaled by a configurable multiplier.
#[derive(Clone, Debug)]
pub struct Restarter {
    pub enable: bool,
    luby: LubySeries,
    interval_mult: usize,
    /// cumulative conflict budget before the next restart
    threshold: usize,
    pub num_restart: usize,
}

impl Instantiate for Restarter {
    fn instantiate(config: &Config, _cnf: &CNFDescription) -> Restarter {
        let mut luby = LubySeries::default();
        let interval_mult = config.rst_mult;
        Restarter {
            enable: config.use_restart(),
            threshold: luby.next_term() * interval_mult,
            luby,
            interval_mult,
            num_restart: 0,
        }
    }
}

impl RestartIF for Restarter {
    fn restart(&mut self, num_conflict: usize) -> bool {
        if !self.enable || num_conflict < self.threshold {
            return false;
        }
        self.num_restart += 1;
        self.threshold += self.luby.next_term() * self.interval_mult;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_follow_the_luby_sequence() {
        let mut config = Config::default();
        config.restart_multiplier(10).unwrap();
        let mut rst = Restarter::instantiate(&config, &CNFDescription::default());
        // budgets: 10, then +10, +20, +10, ...
        assert!(!rst.restart(9));
        assert!(rst.restart(10));
        assert!(!rst.restart(19));
        assert!(rst.restart(20));
        assert!(!rst.restart(39));
        assert!(rst.restart(40));
        assert_eq!(rst.num_restart, 3);
    }

    #[test]
    fn test_disabled_restarter_never_fires() {
        let mut config = Config::default();
        config.restart(false);
        let mut rst = Restarter::instantiate(&config, &CNFDescription::default());
        assert!(!rst.restart(usize::MAX));
    }
}
