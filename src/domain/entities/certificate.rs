use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::option_fields::OptionField,
    errors::AppError,
    validation::{
        first_field_error, normalize_optional, not_blank, parse_calendar_date, present,
        validate_calendar_date, validate_date_patch, validate_optional_url_field, validate_required_patch,
        validate_url,
    },
};

pub const CERTIFICATE_FIELDS: &[&str] = &["nome", "instituicao", "data_conclusao", "origem", "link_certificado"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Certificate {
    pub id: i64,
    pub nome: String,
    pub instituicao: String,
    pub origem: Option<String>,
    pub data_conclusao: NaiveDate,
    pub link_certificado: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateInsert {
    pub nome: String,
    pub instituicao: String,
    pub origem: Option<String>,
    pub data_conclusao: NaiveDate,
    pub link_certificado: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateChanges {
    pub nome: Option<String>,
    pub instituicao: Option<String>,
    pub origem: OptionField<String>,
    pub data_conclusao: Option<NaiveDate>,
    pub link_certificado: OptionField<String>,
}

/// `?origem=` query. An empty value means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct CertificateFilter {
    pub origem: Option<String>,
}

impl CertificateFilter {
    pub fn origem(&self) -> Option<&str> {
        self.origem.as_deref().filter(|o| !o.is_empty())
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct NewCertificateRequest {
    #[validate(required(message = "is required"), custom(function = "not_blank"))]
    pub nome: Option<String>,

    #[validate(required(message = "is required"), custom(function = "not_blank"))]
    pub instituicao: Option<String>,

    #[validate(required(message = "is required"), custom(function = "validate_calendar_date"))]
    pub data_conclusao: Option<String>,

    pub origem: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub link_certificado: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateCertificateRequest {
    #[validate(custom(function = "validate_required_patch"))]
    pub nome: OptionField<String>,

    #[validate(custom(function = "validate_required_patch"))]
    pub instituicao: OptionField<String>,

    #[validate(custom(function = "validate_date_patch"))]
    pub data_conclusao: OptionField<String>,

    pub origem: OptionField<String>,

    #[validate(custom(function = "validate_optional_url_field"))]
    pub link_certificado: OptionField<String>,
}

fn calendar_date(value: &str) -> Result<NaiveDate, AppError> {
    parse_calendar_date(value).ok_or_else(|| {
        AppError::validation("data_conclusao", "data_conclusao must be a calendar date (YYYY-MM-DD)")
    })
}

impl TryFrom<NewCertificateRequest> for CertificateInsert {
    type Error = AppError;

    fn try_from(mut value: NewCertificateRequest) -> Result<Self, Self::Error> {
        value.origem = normalize_optional(value.origem);
        value.link_certificado = normalize_optional(value.link_certificado);

        value
            .validate()
            .map_err(|errors| first_field_error(&errors, CERTIFICATE_FIELDS))?;

        let data_conclusao = present(value.data_conclusao, "data_conclusao")?;

        Ok(CertificateInsert {
            nome: present(value.nome, "nome")?,
            instituicao: present(value.instituicao, "instituicao")?,
            origem: value.origem,
            data_conclusao: calendar_date(&data_conclusao)?,
            link_certificado: value.link_certificado,
        })
    }
}

impl TryFrom<UpdateCertificateRequest> for CertificateChanges {
    type Error = AppError;

    fn try_from(mut value: UpdateCertificateRequest) -> Result<Self, Self::Error> {
        value.origem = value.origem.normalize_blank();
        value.link_certificado = value.link_certificado.normalize_blank();

        value
            .validate()
            .map_err(|errors| first_field_error(&errors, CERTIFICATE_FIELDS))?;

        Ok(CertificateChanges {
            nome: value.nome.into_value(),
            instituicao: value.instituicao.into_value(),
            origem: value.origem,
            data_conclusao: value.data_conclusao.into_value().as_deref().map(calendar_date).transpose()?,
            link_certificado: value.link_certificado,
        })
    }
}
