use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::entities::option_fields::OptionField;

#[derive(Clone)]
pub struct SqlxGateway {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCertificateRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxVisitRepo {
    pub pool: PgPool,
}

/// Appends `, column = value` for a nullable column according to the patch.
pub fn push_nullable(builder: &mut QueryBuilder<'_, Postgres>, column: &str, field: &OptionField<String>) {
    match field {
        OptionField::Unchanged => {}
        OptionField::SetToNull => {
            builder.push(format!(", {column} = NULL"));
        }
        OptionField::SetToValue(value) => {
            builder.push(format!(", {column} = ")).push_bind(value.clone());
        }
    }
}
