use std::sync::Arc;

use teralink_core::Resolver;

#[derive(Clone)]
pub struct AppState {
    resolver: Arc<dyn Resolver>,
}

impl AppState {
    pub fn new(resolver: impl Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }
}
