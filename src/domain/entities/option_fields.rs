use serde::{Deserialize, Deserializer, Serialize};

/// Represents optional field semantics in partial update requests.
///
/// - `Unchanged` → field absent from the body
/// - `SetToNull` → explicitly `null`, clears the column
/// - `SetToValue` → set to provided value
///
/// Use together with `#[serde(default)]` so absent fields stay `Unchanged`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => OptionField::SetToValue(v),
            None => OptionField::SetToNull,
        })
    }
}

impl<T: Clone> OptionField<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Writes the patch onto a stored nullable value.
    pub fn apply_to(&self, target: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *target = None,
            Self::SetToValue(v) => *target = Some(v.clone()),
        }
    }
}

impl<T> OptionField<T> {
    /// The new value, if the patch sets one.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::SetToValue(v) => Some(v),
            Self::Unchanged | Self::SetToNull => None,
        }
    }
}

impl OptionField<String> {
    /// A blank string counts as clearing the field.
    pub fn normalize_blank(self) -> Self {
        match self {
            Self::SetToValue(v) if v.trim().is_empty() => Self::SetToNull,
            Self::SetToValue(v) => Self::SetToValue(v.trim().to_string()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Patch {
        link: OptionField<String>,
    }

    #[test]
    fn absent_null_and_value_are_distinguished() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"link": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"link": "https://x.dev"}"#).unwrap();

        assert_eq!(absent.link, OptionField::Unchanged);
        assert_eq!(null.link, OptionField::SetToNull);
        assert_eq!(value.link, OptionField::SetToValue("https://x.dev".to_string()));
    }

    #[test]
    fn blank_strings_clear_the_field() {
        let field = OptionField::SetToValue("   ".to_string()).normalize_blank();
        assert_eq!(field, OptionField::SetToNull);
    }

    #[test]
    fn apply_to_respects_each_state() {
        let mut stored = Some("https://old.dev".to_string());

        OptionField::Unchanged.apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("https://old.dev"));

        OptionField::SetToValue("https://new.dev".to_string()).apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("https://new.dev"));

        OptionField::SetToNull.apply_to(&mut stored);
        assert_eq!(stored, None);
    }
}
