//! Lovelace dashboard configuration contracts shared by the editors.

pub mod badge;
pub mod condition;
pub mod config_form;

pub use badge::LovelaceBadgeConfig;
pub use condition::{Condition, ConditionKind};
pub use config_form::{ConfigFormSchema, FormField, Selector};
