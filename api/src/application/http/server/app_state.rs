use std::sync::Arc;

use smart_grocery_core::application::SmartGroceryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SmartGroceryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SmartGroceryService) -> Self {
        Self { args, service }
    }
}
