use crate::selector::Strategy;

// Defaults for parameters
const STRATEGY_DEFAULT: Strategy = Strategy::Exact;

/// A wrapper around the configuration used when solving a dispersion
/// selection. Only use if you want to tune the configuration. Otherwise use
/// `Dispersion::default_params()` to instantiate the solver with defaults.
pub struct DispersionParams {
    pub(crate) strategy: Strategy,
    pub(crate) candidates: Option<Vec<usize>>,
}

/// Builder object to set custom solve parameters.
pub struct ParamsBuilder {
    strategy: Option<Strategy>,
    candidates: Option<Vec<usize>>,
}

impl DispersionParams {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder {
            strategy: None,
            candidates: None,
        }
    }
}

impl ParamsBuilder {
    /// Sets the per-tree selection strategy. `Strategy::Exact` maximizes the
    /// pairwise distance sum provably in O(size·K²); `Strategy::Greedy` is an
    /// O(size·K) heuristic that trades optimality for speed on large
    /// components. Defaults to `Strategy::Exact`.
    ///
    /// # Parameters
    /// * strategy - the selection strategy
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn strategy(mut self, strategy: Strategy) -> ParamsBuilder {
        self.strategy = Some(strategy);
        self
    }

    /// Restricts the selection to a candidate subset of the nodes. Both
    /// strategies then only choose among these nodes; other nodes still
    /// contribute to path distances. A component keeping fewer than two of
    /// its quota after the restriction is skipped.
    /// By default every node is a candidate.
    ///
    /// # Parameters
    /// * candidates - the node ids the selection may choose from
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn candidates(mut self, candidates: Vec<usize>) -> ParamsBuilder {
        if candidates.is_empty() {
            println!(
                "DISPERSION_WARNING: empty candidate list ignored; \
                every node remains a candidate."
            );
            return self;
        }
        self.candidates = Some(candidates);
        self
    }

    /// Finishes the building of the parameter configuration. A call to this
    /// method is required to exit the builder pattern and complete the
    /// construction of the parameters.
    ///
    /// # Returns
    /// * The completed configuration.
    pub fn build(self) -> DispersionParams {
        DispersionParams {
            strategy: self.strategy.unwrap_or(STRATEGY_DEFAULT),
            candidates: self.candidates,
        }
    }
}
