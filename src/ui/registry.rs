//! UI registry implementation

use crate::plugin::types::ViewEntry;

/// Route-backed and builder-style UI entries that won integration.
///
/// `external_views` and `react_apps` contain exactly the entries whose URL
/// routes won the first-claim conflict policy; `appbuilder_views` and
/// `appbuilder_menu_items` are the framework-native entries collected in
/// registry order.
#[derive(Debug, Clone, Default)]
pub struct UiRegistry {
    pub external_views: Vec<ViewEntry>,
    pub react_apps: Vec<ViewEntry>,
    pub appbuilder_views: Vec<ViewEntry>,
    pub appbuilder_menu_items: Vec<ViewEntry>,
}

impl UiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.external_views.is_empty()
            && self.react_apps.is_empty()
            && self.appbuilder_views.is_empty()
            && self.appbuilder_menu_items.is_empty()
    }

    /// Clear the route-backed lists (re-run hook for route integration).
    pub fn clear_routes(&mut self) {
        self.external_views.clear();
        self.react_apps.clear();
    }

    /// Clear the builder-style lists (re-run hook for admin integration).
    pub fn clear_builder_entries(&mut self) {
        self.appbuilder_views.clear();
        self.appbuilder_menu_items.clear();
    }
}
