use serde_json::Value;

/// Tri-state boolean preference.
///
/// `Unset` and `ExplicitlyTrue` behave the same; only an explicit `false`
/// disables the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferenceFlag {
    ExplicitlyFalse,
    ExplicitlyTrue,
    #[default]
    Unset,
}

impl PreferenceFlag {
    /// Interprets a raw stored value. Anything other than a JSON boolean
    /// counts as unset.
    pub fn from_stored(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(false)) => Self::ExplicitlyFalse,
            Some(Value::Bool(true)) => Self::ExplicitlyTrue,
            _ => Self::Unset,
        }
    }

    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::ExplicitlyFalse)
    }
}
