/// Control actions supported by the root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the latest estimate.
    StopEarly,
}
