// ============================================================
// STUDENT CSV COLUMNS
// ============================================================
// Fixed header names on both sides of the bridge

use crate::domain::error::{AppError, Result};

/// Required import headers, matched exactly and case-sensitively.
pub const IMPORT_HEADERS: [&str; 4] = ["Name", "Age", "Email", "Password"];

/// Export header. The leading empty name labels the row index column.
pub const EXPORT_HEADERS: [&str; 5] = ["", "name", "age", "email", "pass_word"];

/// Positions of the required columns inside an import file's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentColumns {
    pub name: usize,
    pub age: usize,
    pub email: usize,
    pub password: usize,
}

impl StudentColumns {
    /// Locate every required column. Extra columns are ignored; when a
    /// header repeats, its first occurrence wins.
    pub fn resolve<'a>(headers: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let headers: Vec<&str> = headers.into_iter().collect();
        let position = |wanted: &str| headers.iter().position(|h| *h == wanted);

        let missing: Vec<&str> = IMPORT_HEADERS
            .iter()
            .copied()
            .filter(|wanted| position(*wanted).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::SchemaError(format!(
                "missing required column(s) {} (found: [{}])",
                missing.join(", "),
                headers.join(", ")
            )));
        }

        // All four were found above.
        let at = |wanted: &str| position(wanted).unwrap_or_default();
        Ok(Self {
            name: at("Name"),
            age: at("Age"),
            email: at("Email"),
            password: at("Password"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_order() {
        let columns = StudentColumns::resolve(IMPORT_HEADERS).unwrap();
        assert_eq!(
            columns,
            StudentColumns {
                name: 0,
                age: 1,
                email: 2,
                password: 3
            }
        );
    }

    #[test]
    fn test_resolve_reordered_with_extra_column() {
        let columns =
            StudentColumns::resolve(["Email", "Notes", "Password", "Name", "Age"]).unwrap();
        assert_eq!(columns.email, 0);
        assert_eq!(columns.password, 2);
        assert_eq!(columns.name, 3);
        assert_eq!(columns.age, 4);
    }

    #[test]
    fn test_resolve_missing_password() {
        let err = StudentColumns::resolve(["Name", "Age", "Email"]).unwrap_err();
        match err {
            AppError::SchemaError(msg) => assert!(msg.contains("Password")),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let err = StudentColumns::resolve(["name", "age", "email", "password"]).unwrap_err();
        assert!(matches!(err, AppError::SchemaError(_)));
    }

    #[test]
    fn test_resolve_duplicate_header_takes_first() {
        let columns =
            StudentColumns::resolve(["Name", "Age", "Email", "Password", "Name"]).unwrap();
        assert_eq!(columns.name, 0);
    }
}
