use serde::{Deserialize, Serialize};

/// Visibility condition attached to a badge
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum Condition {
    State {
        #[serde(default)]
        entity: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state_not: Option<String>,
    },
    NumericState {
        #[serde(default)]
        entity: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        above: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        below: Option<f64>,
    },
    Screen {
        #[serde(default)]
        media_query: String,
    },
    User {
        #[serde(default)]
        users: Vec<String>,
    },
    And {
        #[serde(default)]
        conditions: Vec<Condition>,
    },
    Or {
        #[serde(default)]
        conditions: Vec<Condition>,
    },
}

/// Discriminant of [`Condition`], used by pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    State,
    NumericState,
    Screen,
    User,
    And,
    Or,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 6] = [
        ConditionKind::State,
        ConditionKind::NumericState,
        ConditionKind::Screen,
        ConditionKind::User,
        ConditionKind::And,
        ConditionKind::Or,
    ];

    /// Wire name, identical to the `condition` tag
    pub fn id(self) -> &'static str {
        match self {
            ConditionKind::State => "state",
            ConditionKind::NumericState => "numeric_state",
            ConditionKind::Screen => "screen",
            ConditionKind::User => "user",
            ConditionKind::And => "and",
            ConditionKind::Or => "or",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl Condition {
    /// Empty condition of the given kind, as added from the picker
    pub fn default_for(kind: ConditionKind) -> Self {
        match kind {
            ConditionKind::State => Condition::State {
                entity: String::new(),
                state: Some(String::new()),
                state_not: None,
            },
            ConditionKind::NumericState => Condition::NumericState {
                entity: String::new(),
                above: None,
                below: None,
            },
            ConditionKind::Screen => Condition::Screen {
                media_query: String::new(),
            },
            ConditionKind::User => Condition::User { users: Vec::new() },
            ConditionKind::And => Condition::And {
                conditions: Vec::new(),
            },
            ConditionKind::Or => Condition::Or {
                conditions: Vec::new(),
            },
        }
    }

    pub fn kind(&self) -> ConditionKind {
        match self {
            Condition::State { .. } => ConditionKind::State,
            Condition::NumericState { .. } => ConditionKind::NumericState,
            Condition::Screen { .. } => ConditionKind::Screen,
            Condition::User { .. } => ConditionKind::User,
            Condition::And { .. } => ConditionKind::And,
            Condition::Or { .. } => ConditionKind::Or,
        }
    }

    /// Nested conditions of `and` / `or`
    pub fn children(&self) -> Option<&[Condition]> {
        match self {
            Condition::And { conditions } | Condition::Or { conditions } => Some(conditions.as_slice()),
            _ => None,
        }
    }

    /// Returns a copy with the nested conditions replaced. No-op for leaf conditions.
    pub fn with_children(&self, children: Vec<Condition>) -> Self {
        match self {
            Condition::And { .. } => Condition::And {
                conditions: children,
            },
            Condition::Or { .. } => Condition::Or {
                conditions: children,
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_representation() {
        let cond = Condition::NumericState {
            entity: "sensor.temperature".into(),
            above: Some(20.0),
            below: None,
        };
        assert_eq!(
            serde_json::to_value(&cond).unwrap(),
            json!({"condition": "numeric_state", "entity": "sensor.temperature", "above": 20.0})
        );
    }

    #[test]
    fn test_nested_conditions() {
        let cond: Condition = serde_json::from_value(json!({
            "condition": "or",
            "conditions": [
                {"condition": "user", "users": ["abc"]},
                {"condition": "screen", "media_query": "(min-width: 1280px)"}
            ]
        }))
        .unwrap();

        assert_eq!(cond.kind(), ConditionKind::Or);
        let children = cond.children().unwrap();
        assert_eq!(children[0].kind(), ConditionKind::User);
        assert_eq!(children[1].kind(), ConditionKind::Screen);
    }

    #[test]
    fn test_kind_ids_match_tags() {
        for kind in ConditionKind::ALL {
            let value = serde_json::to_value(Condition::default_for(kind)).unwrap();
            assert_eq!(value["condition"], json!(kind.id()));
            assert_eq!(ConditionKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ConditionKind::from_id("time"), None);
    }

    #[test]
    fn test_with_children_on_leaf() {
        let leaf = Condition::default_for(ConditionKind::User);
        assert_eq!(leaf.with_children(vec![]), leaf);
    }
}
