//! Query Parameter Module
//!
//! Typed positional parameters for pool queries. Callers build an ordered
//! slice of scalar variants instead of passing untyped values.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::query::{Query, QueryAs};
use sqlx::Postgres;

// == Sql Param ==
/// A single positional query parameter.
///
/// Bound in slice order onto `$1`, `$2`, ... placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// SQL NULL
    Null,
    /// BOOLEAN
    Bool(bool),
    /// BIGINT
    Int(i64),
    /// DOUBLE PRECISION
    Float(f64),
    /// TEXT
    Text(String),
    /// TIMESTAMPTZ
    Timestamp(DateTime<Utc>),
}

impl SqlParam {
    /// Binds this parameter onto a row-mapping query.
    pub(crate) fn bind_to_query_as<'q, T>(
        &'q self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> QueryAs<'q, Postgres, T, PgArguments> {
        match self {
            SqlParam::Null => query.bind(Option::<String>::None),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
            SqlParam::Timestamp(v) => query.bind(*v),
        }
    }

    /// Binds this parameter onto a plain statement.
    pub(crate) fn bind_to_query<'q>(
        &'q self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            SqlParam::Null => query.bind(Option::<String>::None),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
            SqlParam::Timestamp(v) => query.bind(*v),
        }
    }
}

// == From Conversions ==
impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        SqlParam::Bool(v)
    }
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        SqlParam::Int(v as i64)
    }
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        SqlParam::Float(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl From<DateTime<Utc>> for SqlParam {
    fn from(v: DateTime<Utc>) -> Self {
        SqlParam::Timestamp(v)
    }
}

impl<T> From<Option<T>> for SqlParam
where
    T: Into<SqlParam>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => SqlParam::Null,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scalars() {
        assert_eq!(SqlParam::from(true), SqlParam::Bool(true));
        assert_eq!(SqlParam::from(42i64), SqlParam::Int(42));
        assert_eq!(SqlParam::from(7i32), SqlParam::Int(7));
        assert_eq!(SqlParam::from(1.5f64), SqlParam::Float(1.5));
        assert_eq!(SqlParam::from("barley"), SqlParam::Text("barley".to_string()));
        assert_eq!(
            SqlParam::from("plot-7".to_string()),
            SqlParam::Text("plot-7".to_string())
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(SqlParam::from(Option::<i64>::None), SqlParam::Null);
        assert_eq!(SqlParam::from(Some(3i64)), SqlParam::Int(3));
        assert_eq!(SqlParam::from(Some("x")), SqlParam::Text("x".to_string()));
    }

    #[test]
    fn test_from_timestamp() {
        let now = Utc::now();
        assert_eq!(SqlParam::from(now), SqlParam::Timestamp(now));
    }
}
