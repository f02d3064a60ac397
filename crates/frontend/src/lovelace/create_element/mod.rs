//! Badge element classes and their resolution by type.

pub mod badge_element;
pub mod builtin;
pub mod registry;

pub use badge_element::{BadgeElementClass, CUSTOM_TYPE_PREFIX};
pub use registry::{
    use_badge_resolver, BadgeConfigResolver, BadgeElementResolver, BadgeRegistry, RegistryError,
    SharedBadgeResolver,
};
