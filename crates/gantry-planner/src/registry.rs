//! Explicit planner registry.
//!
//! Constructed once at process startup by whatever composes the control
//! plane, then passed by reference — there is no global singleton. Each
//! planner registers under exactly one application kind; a duplicate
//! registration is a composition bug and fails loudly.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use gantry_core::ApplicationKind;

use crate::error::{PlanError, PlanResult};
use crate::plan::Planner;

/// Maps application kinds to their planners.
#[derive(Default)]
pub struct PlannerRegistry {
    planners: HashMap<ApplicationKind, Arc<dyn Planner>>,
}

impl PlannerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a planner for `kind`.
    pub fn register(&mut self, kind: ApplicationKind, planner: Arc<dyn Planner>) -> PlanResult<()> {
        match self.planners.entry(kind) {
            Entry::Occupied(_) => Err(PlanError::AlreadyRegistered(kind)),
            Entry::Vacant(slot) => {
                slot.insert(planner);
                Ok(())
            }
        }
    }

    /// Look up the planner for `kind`.
    pub fn get(&self, kind: ApplicationKind) -> Option<Arc<dyn Planner>> {
        self.planners.get(&kind).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{PlanFuture, PlanInput, PlanOutput};
    use gantry_core::{PipelineStage, StageKind};

    struct FixedPlanner;

    impl Planner for FixedPlanner {
        fn plan<'a>(&'a self, _input: &'a PlanInput) -> PlanFuture<'a> {
            Box::pin(async {
                Ok(PlanOutput {
                    version: "v1".to_string(),
                    stages: vec![PipelineStage {
                        kind: StageKind::Sync,
                        index: 0,
                        created_at: 0,
                    }],
                    summary: "fixed".to_string(),
                })
            })
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = PlannerRegistry::new();
        registry
            .register(ApplicationKind::ContainerService, Arc::new(FixedPlanner))
            .unwrap();
        assert!(registry.get(ApplicationKind::ContainerService).is_some());
        assert!(registry.get(ApplicationKind::Function).is_none());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = PlannerRegistry::new();
        registry
            .register(ApplicationKind::ContainerService, Arc::new(FixedPlanner))
            .unwrap();
        let err = registry
            .register(ApplicationKind::ContainerService, Arc::new(FixedPlanner))
            .unwrap_err();
        assert!(matches!(err, PlanError::AlreadyRegistered(_)));
    }
}
