use bitflags::bitflags;

/// API for flag-carrying objects.
pub trait FlagIF {
    type FlagType;
    /// return true if the flag is on.
    fn is(&self, flag: Self::FlagType) -> bool;
    /// set the flag.
    fn set(&mut self, f: Self::FlagType, b: bool);
    /// toggle the flag off.
    fn turn_off(&mut self, flag: Self::FlagType);
    /// toggle the flag on.
    fn turn_on(&mut self, flag: Self::FlagType);
}

bitflags! {
    /// Misc flags used by [`Clause`](`crate::cdb::Clause`).
    #[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
    pub struct FlagClause: u8 {
        /// a clause generated by conflict analysis, hence removable.
        const LEARNT = 0b0000_0001;
        /// a freed arena slot awaiting recycling.
        const DEAD   = 0b0000_0010;
    }
}
