/// Answer checking against the original clause set
use {
    super::Solver,
    crate::{
        cdb::ClauseIF,
        types::*,
    },
};

/// API for checking an assignment.
pub trait ValidateIF {
    /// return the id of an original clause the current assignment
    /// falsifies, or `None` if every one is satisfied.
    fn validate(&self) -> Option<ClauseId>;
}

impl ValidateIF for Solver {
    fn validate(&self) -> Option<ClauseId> {
        self.cdb
            .originals
            .iter()
            .find(|cid| !self.cdb[**cid].is_satisfied_under(&self.asg))
            .copied()
    }
}
