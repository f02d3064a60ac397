//! Text access to the editable fields of a condition.

use contracts::lovelace::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionField {
    Entity,
    State,
    StateNot,
    Above,
    Below,
    Users,
    MediaQuery,
}

impl ConditionField {
    pub fn id(self) -> &'static str {
        match self {
            ConditionField::Entity => "entity",
            ConditionField::State => "state",
            ConditionField::StateNot => "state_not",
            ConditionField::Above => "above",
            ConditionField::Below => "below",
            ConditionField::Users => "users",
            ConditionField::MediaQuery => "media_query",
        }
    }

    pub fn label_key(self) -> String {
        format!("ui.panel.lovelace.editor.condition-editor.{}", self.id())
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Splits a comma separated user id list
pub fn parse_users(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Current text of `field`, empty when the condition has no such field
pub fn field_text(condition: &Condition, field: ConditionField) -> String {
    match (condition, field) {
        (Condition::State { entity, .. }, ConditionField::Entity)
        | (Condition::NumericState { entity, .. }, ConditionField::Entity) => entity.clone(),
        (Condition::State { state, .. }, ConditionField::State) => state.clone().unwrap_or_default(),
        (Condition::State { state_not, .. }, ConditionField::StateNot) => {
            state_not.clone().unwrap_or_default()
        }
        (Condition::NumericState { above, .. }, ConditionField::Above) => format_number(*above),
        (Condition::NumericState { below, .. }, ConditionField::Below) => format_number(*below),
        (Condition::User { users }, ConditionField::Users) => users.join(", "),
        (Condition::Screen { media_query }, ConditionField::MediaQuery) => media_query.clone(),
        _ => String::new(),
    }
}

/// Returns `condition` with `field` set from `text`. Fields the condition
/// does not have are ignored.
pub fn with_field(condition: &Condition, field: ConditionField, text: &str) -> Condition {
    let mut next = condition.clone();
    match (&mut next, field) {
        (Condition::State { entity, .. }, ConditionField::Entity)
        | (Condition::NumericState { entity, .. }, ConditionField::Entity) => {
            *entity = text.trim().to_string();
        }
        (Condition::State { state, .. }, ConditionField::State) => *state = non_empty(text),
        (Condition::State { state_not, .. }, ConditionField::StateNot) => {
            *state_not = non_empty(text)
        }
        (Condition::NumericState { above, .. }, ConditionField::Above) => {
            *above = parse_number(text)
        }
        (Condition::NumericState { below, .. }, ConditionField::Below) => {
            *below = parse_number(text)
        }
        (Condition::User { users }, ConditionField::Users) => *users = parse_users(text),
        (Condition::Screen { media_query }, ConditionField::MediaQuery) => {
            *media_query = text.trim().to_string();
        }
        _ => {}
    }
    next
}

/// Fields shown for a leaf condition, in display order
pub fn fields_of(condition: &Condition) -> &'static [ConditionField] {
    match condition {
        Condition::State { .. } => &[
            ConditionField::Entity,
            ConditionField::State,
            ConditionField::StateNot,
        ],
        Condition::NumericState { .. } => &[
            ConditionField::Entity,
            ConditionField::Above,
            ConditionField::Below,
        ],
        Condition::User { .. } => &[ConditionField::Users],
        Condition::Screen { .. } => &[ConditionField::MediaQuery],
        Condition::And { .. } | Condition::Or { .. } => &[],
    }
}
