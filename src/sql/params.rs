//! Bind values for built queries.

use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value bound to a positional parameter. Each variant reports its own
/// Postgres type so mixed parameter lists bind correctly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
}

impl From<i32> for SqlParam {
    fn from(n: i32) -> Self {
        SqlParam::Int(n)
    }
}

impl From<String> for SqlParam {
    fn from(s: String) -> Self {
        SqlParam::Text(s)
    }
}

impl From<&str> for SqlParam {
    fn from(s: &str) -> Self {
        SqlParam::Text(s.to_string())
    }
}

impl<'q> Encode<'q, Postgres> for SqlParam {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            SqlParam::Int(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf),
            SqlParam::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            SqlParam::Int(_) => <i32 as Type<Postgres>>::type_info(),
            SqlParam::Text(_) => <String as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for SqlParam {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i32 as Type<Postgres>>::compatible(ty) || <String as Type<Postgres>>::compatible(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_reports_its_own_type() {
        let int = SqlParam::from(7);
        let text = SqlParam::from("cats");
        assert_eq!(int.produces(), Some(<i32 as Type<Postgres>>::type_info()));
        assert_eq!(text.produces(), Some(<String as Type<Postgres>>::type_info()));
    }
}
