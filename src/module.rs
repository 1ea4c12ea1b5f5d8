//! Feature modules: the bundles produced by deferred loaders.
//!
//! A [`FeatureModule`] is a small named registry of renderable units. Each
//! unit is registered under an *export* name; a deferred route picks one of
//! them after the module has been loaded.

use crate::route::ComponentFactory;
use gpui::Render;

/// A loaded bundle of renderable units.
#[derive(Clone, Debug)]
pub struct FeatureModule {
    name: String,
    units: Vec<(String, ComponentFactory)>,
}

impl FeatureModule {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Register a unit under `export`. A later registration with the same
    /// name replaces the earlier one.
    pub fn export<T, F>(self, export: impl Into<String>, ctor: F) -> Self
    where
        T: Render,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.export_factory(export, ComponentFactory::new(ctor))
    }

    /// Register an already wrapped factory under `export`.
    pub fn export_factory(mut self, export: impl Into<String>, factory: ComponentFactory) -> Self {
        let export = export.into();
        if let Some(slot) = self.units.iter_mut().find(|(name, _)| *name == export) {
            slot.1 = factory;
        } else {
            self.units.push((export, factory));
        }
        self
    }

    /// Module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a unit by export name.
    pub fn unit(&self, export: &str) -> Option<&ComponentFactory> {
        self.units
            .iter()
            .find(|(name, _)| name == export)
            .map(|(_, factory)| factory)
    }

    /// Export names in registration order.
    pub fn exports(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{div, Context, IntoElement, Window};

    struct First;
    struct Second;

    impl Render for First {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
            div()
        }
    }

    impl Render for Second {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
            div()
        }
    }

    #[test]
    fn test_exports_in_order() {
        let module = FeatureModule::new("shop")
            .export("First", || First)
            .export("Second", || Second);
        assert_eq!(module.name(), "shop");
        assert_eq!(module.len(), 2);
        assert_eq!(module.exports().collect::<Vec<_>>(), vec!["First", "Second"]);
        assert!(module.unit("Third").is_none());
    }

    #[test]
    fn test_export_replaces_same_name() {
        let module = FeatureModule::new("shop")
            .export("Page", || First)
            .export("Page", || Second);
        assert_eq!(module.len(), 1);
        let unit = module.unit("Page").unwrap();
        assert!(unit.type_name().ends_with("Second"));
    }

    #[test]
    fn test_empty_module() {
        let module = FeatureModule::new("empty");
        assert!(module.is_empty());
        assert!(module.unit("Anything").is_none());
    }
}
