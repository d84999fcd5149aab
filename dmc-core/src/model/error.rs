#[derive(thiserror::Error, Debug)]
pub enum ModeChoiceError {
    #[error("encountered mode for which no scoring parameters are defined: {0}")]
    MissingScoringParameters(String),
    #[error("no feasible choice for person '{person_id}' in tour {tour_index}: all {n_alternatives} mode chains were rejected")]
    NoFeasibleChoice {
        person_id: String,
        tour_index: usize,
        n_alternatives: usize,
    },
    #[error("cannot enumerate mode chains of {n_modes} modes over {n_trips} trips: too many alternatives")]
    TooManyAlternatives { n_modes: usize, n_trips: usize },
    #[error("invalid plan for person '{person_id}': {message}")]
    InvalidPlan { person_id: String, message: String },
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    #[error("failure routing trip: {0}")]
    RoutingError(String),
    #[error("failure building mode choice component: {0}")]
    BuildError(String),
    #[error("{0}")]
    InternalError(String),
}

impl ModeChoiceError {
    /// true for the "every alternative was rejected" outcome, which callers
    /// usually treat differently from misconfiguration.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, ModeChoiceError::NoFeasibleChoice { .. })
    }
}
