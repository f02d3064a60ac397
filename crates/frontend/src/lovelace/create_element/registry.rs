//! Lookup of badge element classes by type.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use contracts::lovelace::{ConfigFormSchema, LovelaceBadgeConfig};
use leptos::prelude::*;
use thiserror::Error;

use super::badge_element::BadgeElementClass;
use super::builtin::builtin_badges;
use crate::lovelace::editor::element_editor::{ConfigEditorFactory, ConfigResolver};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("custom badge type must start with \"custom:\": {0}")]
    NotCustom(String),
}

/// Resolves a badge type to its element class
#[async_trait(?Send)]
pub trait BadgeElementResolver {
    async fn get_badge_element_class(&self, badge_type: &str) -> Option<BadgeElementClass>;
}

pub type SharedBadgeResolver = Arc<dyn BadgeElementResolver + Send + Sync>;

/// Built-in badge types plus custom ones registered at runtime
#[derive(Clone, Default)]
pub struct BadgeRegistry {
    classes: Arc<RwLock<ClassMap>>,
}

type ClassMap = HashMap<String, BadgeElementClass>;

impl BadgeRegistry {
    pub fn with_builtins() -> Self {
        let registry = Self::default();
        {
            let mut classes = registry.write();
            for class in builtin_badges() {
                classes.insert(class.badge_type.clone(), class);
            }
        }
        registry
    }

    // Every write is a single insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, ClassMap> {
        self.classes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClassMap> {
        self.classes.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a `custom:` badge type, replacing an earlier registration
    pub fn register_custom(&self, class: BadgeElementClass) -> Result<(), RegistryError> {
        if !class.is_custom() {
            return Err(RegistryError::NotCustom(class.badge_type));
        }
        log::debug!("registering custom badge {}", class.badge_type);
        self.write().insert(class.badge_type.clone(), class);
        Ok(())
    }

    pub fn badge_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.read().keys().cloned().collect();
        types.sort();
        types
    }

    pub fn get(&self, badge_type: &str) -> Option<BadgeElementClass> {
        self.read().get(badge_type).cloned()
    }
}

#[async_trait(?Send)]
impl BadgeElementResolver for BadgeRegistry {
    async fn get_badge_element_class(&self, badge_type: &str) -> Option<BadgeElementClass> {
        let class = self.get(badge_type);
        if class.is_none() {
            log::warn!("unknown badge type: {}", badge_type);
        }
        class
    }
}

/// Badge resolver from context, built-ins only when none was provided
pub fn use_badge_resolver() -> SharedBadgeResolver {
    use_context::<SharedBadgeResolver>()
        .unwrap_or_else(|| Arc::new(BadgeRegistry::with_builtins()))
}

/// Adapts a badge resolver to the element editor's capability lookup
pub struct BadgeConfigResolver {
    badges: SharedBadgeResolver,
}

impl BadgeConfigResolver {
    pub fn new(badges: SharedBadgeResolver) -> Self {
        Self { badges }
    }
}

#[async_trait(?Send)]
impl ConfigResolver<LovelaceBadgeConfig> for BadgeConfigResolver {
    async fn get_config_element(
        &self,
        element_type: &str,
    ) -> Option<ConfigEditorFactory<LovelaceBadgeConfig>> {
        let class = self.badges.get_badge_element_class(element_type).await?;
        class.get_config_element()
    }

    async fn get_config_form(&self, element_type: &str) -> Option<ConfigFormSchema> {
        let class = self.badges.get_badge_element_class(element_type).await?;
        class.get_config_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lovelace::editor::element_editor::ConfigEditorProps;
    use futures::executor::block_on;

    fn sample_editor() -> ConfigEditorFactory<LovelaceBadgeConfig> {
        Arc::new(|_props: ConfigEditorProps<LovelaceBadgeConfig>| ().into_any())
    }

    #[test]
    fn test_builtins() {
        let registry = BadgeRegistry::with_builtins();
        assert_eq!(registry.badge_types(), vec!["entity", "error"]);
    }

    #[test]
    fn test_register_requires_custom_prefix() {
        let registry = BadgeRegistry::with_builtins();
        assert_eq!(
            registry.register_custom(BadgeElementClass::new("clock")),
            Err(RegistryError::NotCustom("clock".into()))
        );
        assert!(registry
            .register_custom(BadgeElementClass::new("custom:clock"))
            .is_ok());
        assert!(registry.get("custom:clock").is_some());
    }

    #[test]
    fn test_registration_survives_poisoned_lock() {
        let registry = BadgeRegistry::with_builtins();
        let holder = registry.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.classes.write().unwrap();
            panic!("writer panicked");
        })
        .join();
        assert!(registry.classes.is_poisoned());

        assert!(registry
            .register_custom(BadgeElementClass::new("custom:clock"))
            .is_ok());
        assert!(registry.get("custom:clock").is_some());
        assert_eq!(registry.badge_types(), vec!["custom:clock", "entity", "error"]);
    }

    #[test]
    fn test_unknown_type_resolves_to_none() {
        let resolver = BadgeConfigResolver::new(Arc::new(BadgeRegistry::with_builtins()));
        assert!(block_on(resolver.get_config_element("custom:missing")).is_none());
        assert!(block_on(resolver.get_config_form("custom:missing")).is_none());
    }

    #[test]
    fn test_form_schema_is_resolved() {
        let resolver = BadgeConfigResolver::new(Arc::new(BadgeRegistry::with_builtins()));
        let schema = block_on(resolver.get_config_form("entity")).unwrap();
        assert!(schema.field("entity").unwrap().required);
        assert!(block_on(resolver.get_config_element("entity")).is_none());
    }

    #[test]
    fn test_type_without_capabilities() {
        let resolver = BadgeConfigResolver::new(Arc::new(BadgeRegistry::with_builtins()));
        assert!(block_on(resolver.get_config_element("error")).is_none());
        assert!(block_on(resolver.get_config_form("error")).is_none());
    }

    #[test]
    fn test_custom_editor_is_resolved() {
        let registry = BadgeRegistry::with_builtins();
        registry
            .register_custom(BadgeElementClass::new("custom:clock").with_config_element(sample_editor()))
            .unwrap();
        let resolver = BadgeConfigResolver::new(Arc::new(registry));

        assert!(block_on(resolver.get_config_element("custom:clock")).is_some());
        assert!(block_on(resolver.get_config_form("custom:clock")).is_none());
    }
}
