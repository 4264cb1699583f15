//! Host-supplied identifiers for a step invocation.

/// The identifiers a host passes to a step.
///
/// All of them are optional. Without an activity the step falls back to the
/// first `prov:Activity` in the input graph; agent and plan are only linked
/// when given. Relative references are resolved against the configured base
/// IRI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepContext {
    /// The activity being executed.
    pub activity: Option<String>,
    /// The agent running the activity.
    pub agent: Option<String>,
    /// The plan the activity follows.
    pub plan: Option<String>,
}

impl StepContext {
    /// An empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the activity IRI.
    #[must_use]
    pub fn with_activity(mut self, iri: impl Into<String>) -> Self {
        self.activity = Some(iri.into());
        self
    }

    /// Sets the agent IRI.
    #[must_use]
    pub fn with_agent(mut self, iri: impl Into<String>) -> Self {
        self.agent = Some(iri.into());
        self
    }

    /// Sets the plan IRI.
    #[must_use]
    pub fn with_plan(mut self, iri: impl Into<String>) -> Self {
        self.plan = Some(iri.into());
        self
    }
}
