use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    entities::option_fields::OptionField,
    errors::AppError,
    validation::{
        first_field_error, new_validation_error, normalize_optional, not_blank, patch_value, present,
        validate_optional_url_field, validate_required_patch, validate_url,
    },
};

/// Declared field order; the first failing field in this order is reported.
pub const PROJECT_FIELDS: &[&str] = &["titulo", "descricao", "tecnologias", "link_github", "link_deploy"];

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub titulo: String,
    pub descricao: String,
    pub tecnologias: String,
    pub link_github: Option<String>,
    pub link_deploy: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub titulo: String,
    pub descricao: String,
    pub tecnologias: String,
    pub link_github: Option<String>,
    pub link_deploy: Option<String>,
}

/// Validated partial update. `None` leaves a required column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub tecnologias: Option<String>,
    pub link_github: OptionField<String>,
    pub link_deploy: OptionField<String>,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Technologies arrive either as free text ("Rust, Go") or as a list of
/// labels; both are stored as comma separated text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TechnologyList {
    Text(String),
    Labels(Vec<String>),
}

impl TechnologyList {
    pub fn to_text(&self) -> String {
        match self {
            TechnologyList::Text(text) => text.clone(),
            TechnologyList::Labels(labels) => {
                let mut unique: Vec<&str> = Vec::with_capacity(labels.len());
                for label in labels.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
                    if !unique.contains(&label) {
                        unique.push(label);
                    }
                }
                unique.join(", ")
            }
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(required(message = "is required"), custom(function = "not_blank"))]
    pub titulo: Option<String>,

    #[validate(required(message = "is required"), custom(function = "not_blank"))]
    pub descricao: Option<String>,

    #[validate(required(message = "is required"), custom(function = "validate_technologies"))]
    pub tecnologias: Option<TechnologyList>,

    #[validate(custom(function = "validate_url"))]
    pub link_github: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub link_deploy: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "validate_required_patch"))]
    pub titulo: OptionField<String>,

    #[validate(custom(function = "validate_required_patch"))]
    pub descricao: OptionField<String>,

    #[validate(custom(function = "validate_technologies_patch"))]
    pub tecnologias: OptionField<TechnologyList>,

    #[validate(custom(function = "validate_optional_url_field"))]
    pub link_github: OptionField<String>,

    #[validate(custom(function = "validate_optional_url_field"))]
    pub link_deploy: OptionField<String>,
}

pub fn validate_technologies(value: &TechnologyList) -> Result<(), ValidationError> {
    if value.to_text().trim().is_empty() {
        return Err(new_validation_error("blank", "must list at least one technology"));
    }
    Ok(())
}

pub fn validate_technologies_patch(value: &OptionField<TechnologyList>) -> Result<(), ValidationError> {
    patch_value(value, validate_technologies)
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = AppError;

    fn try_from(mut value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.link_github = normalize_optional(value.link_github);
        value.link_deploy = normalize_optional(value.link_deploy);

        value
            .validate()
            .map_err(|errors| first_field_error(&errors, PROJECT_FIELDS))?;

        Ok(ProjectInsert {
            titulo: present(value.titulo, "titulo")?,
            descricao: present(value.descricao, "descricao")?,
            tecnologias: present(value.tecnologias, "tecnologias")?.to_text(),
            link_github: value.link_github,
            link_deploy: value.link_deploy,
        })
    }
}

impl TryFrom<UpdateProjectRequest> for ProjectChanges {
    type Error = AppError;

    fn try_from(mut value: UpdateProjectRequest) -> Result<Self, Self::Error> {
        value.link_github = value.link_github.normalize_blank();
        value.link_deploy = value.link_deploy.normalize_blank();

        value
            .validate()
            .map_err(|errors| first_field_error(&errors, PROJECT_FIELDS))?;

        Ok(ProjectChanges {
            titulo: value.titulo.into_value(),
            descricao: value.descricao.into_value(),
            tecnologias: value.tecnologias.into_value().map(|t| t.to_text()),
            link_github: value.link_github,
            link_deploy: value.link_deploy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_new(json: &str) -> Result<ProjectInsert, AppError> {
        let request: NewProjectRequest = serde_json::from_str(json).unwrap();
        ProjectInsert::try_from(request)
    }

    fn field_of(err: AppError) -> String {
        match err {
            AppError::ValidationError(e) => e.field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_converts() {
        let insert = parse_new(r#"{"titulo":"X","descricao":"Y","tecnologias":"Go"}"#).unwrap();

        assert_eq!(insert.titulo, "X");
        assert_eq!(insert.tecnologias, "Go");
        assert_eq!(insert.link_github, None);
    }

    #[test]
    fn missing_descricao_is_reported() {
        let err = parse_new(r#"{"titulo":"X","tecnologias":"Go"}"#).unwrap_err();
        assert_eq!(field_of(err), "descricao");
    }

    #[test]
    fn first_missing_field_wins() {
        let err = parse_new(r#"{"titulo":"X"}"#).unwrap_err();
        assert_eq!(field_of(err), "descricao");
    }

    #[test]
    fn whitespace_only_titulo_is_rejected() {
        let err = parse_new(r#"{"titulo":"   ","descricao":"Y","tecnologias":"Go"}"#).unwrap_err();
        assert_eq!(field_of(err), "titulo");
    }

    #[test]
    fn technology_labels_are_joined_without_duplicates() {
        let insert = parse_new(
            r#"{"titulo":"X","descricao":"Y","tecnologias":["Rust"," Go ","Rust",""]}"#,
        )
        .unwrap();

        assert_eq!(insert.tecnologias, "Rust, Go");
    }

    #[test]
    fn empty_label_list_is_rejected() {
        let err = parse_new(r#"{"titulo":"X","descricao":"Y","tecnologias":["  "]}"#).unwrap_err();
        assert_eq!(field_of(err), "tecnologias");
    }

    #[test]
    fn blank_links_become_null_and_bad_links_fail() {
        let insert = parse_new(
            r#"{"titulo":"X","descricao":"Y","tecnologias":"Go","link_github":"  "}"#,
        )
        .unwrap();
        assert_eq!(insert.link_github, None);

        let err = parse_new(
            r#"{"titulo":"X","descricao":"Y","tecnologias":"Go","link_deploy":"nope"}"#,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "link_deploy");
    }

    #[test]
    fn update_only_carries_supplied_fields() {
        let request: UpdateProjectRequest =
            serde_json::from_str(r#"{"descricao":"new","link_github":null}"#).unwrap();
        let changes = ProjectChanges::try_from(request).unwrap();

        assert_eq!(changes.titulo, None);
        assert_eq!(changes.descricao.as_deref(), Some("new"));
        assert_eq!(changes.link_github, OptionField::SetToNull);
        assert!(changes.link_deploy.is_unchanged());
    }

    #[test]
    fn update_rejects_blank_required_field() {
        let request: UpdateProjectRequest = serde_json::from_str(r#"{"titulo":""}"#).unwrap();
        let err = ProjectChanges::try_from(request).unwrap_err();
        assert_eq!(field_of(err), "titulo");
    }

    #[test]
    fn update_rejects_null_on_required_field() {
        for field in ["titulo", "descricao", "tecnologias"] {
            let request: UpdateProjectRequest =
                serde_json::from_str(&format!(r#"{{"{field}":null}}"#)).unwrap();
            match ProjectChanges::try_from(request).unwrap_err() {
                AppError::ValidationError(e) => {
                    assert_eq!(e.field, field);
                    assert_eq!(e.message, format!("{field} must not be null"));
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn update_ignores_server_managed_fields() {
        let request: UpdateProjectRequest =
            serde_json::from_str(r#"{"id":99,"created_at":"2020-01-01T00:00:00Z","titulo":"T"}"#).unwrap();
        let changes = ProjectChanges::try_from(request).unwrap();
        assert_eq!(changes.titulo.as_deref(), Some("T"));
    }
}
