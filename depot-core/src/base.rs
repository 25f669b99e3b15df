//! Core functionalities.
mod env;
mod policy;
mod spaces;
mod step;
pub use env::Env;
pub use policy::Policy;
pub use spaces::{ActSpec, ObsSpec};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
pub trait Obs: Clone + Debug {
    /// Returns the number of elements in the observation vector.
    fn len(&self) -> usize;

    /// Returns `true` if the observation is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An action on an environment.
pub trait Act: Clone + Debug {
    /// Returns the raw integer encoding of the action.
    fn raw(&self) -> u8;
}
