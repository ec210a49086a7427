use crate::modules::activities::adapters::in_memory::in_memory_activity_registry::InMemoryActivityRegistry;
use crate::modules::activities::core::ports::ActivityRegistry;
use crate::modules::activities::use_cases::signup_for_activity::handler::SignupForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ActivityRegistry>,
    pub signup_handler: Arc<SignupForActivityHandler<InMemoryActivityRegistry>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryActivityRegistry>>,
}

impl AppState {
    pub fn new(registry: Arc<InMemoryActivityRegistry>) -> Self {
        Self {
            signup_handler: Arc::new(SignupForActivityHandler::new(registry.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(registry.clone())),
            registry,
        }
    }

    /// State backed by a fresh registry holding the nine seed activities.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryActivityRegistry::seeded()))
    }
}
