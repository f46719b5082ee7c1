use std::sync::{Arc, Mutex};

use anyhow::Context;
use async_trait::async_trait;
use rusqlite::Connection;

use crate::db::queries;
use crate::models::Contact;

const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Resolves contact names and vets phone numbers for the facade.
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// Exact-match lookup by contact name.
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Contact>>;

    async fn validate_number(&self, number: &str) -> anyhow::Result<bool>;
}

/// Checks that `number` looks like a dialable phone number: only digits and
/// the usual formatting characters, with 7 to 15 digits in total.
pub fn is_valid_number(number: &str) -> bool {
    let allowed = number
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));
    if !allowed {
        return false;
    }

    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
}

pub struct SqliteContactDirectory {
    db: Arc<Mutex<Connection>>,
}

impl SqliteContactDirectory {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactDirectory for SqliteContactDirectory {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Contact>> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("contacts database lock poisoned"))?;
        queries::find_contact_by_name(&db, name)
            .with_context(|| format!("failed to look up contact {name:?}"))
    }

    async fn validate_number(&self, number: &str) -> anyhow::Result<bool> {
        Ok(is_valid_number(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_number("(948)787-6532"));
        assert!(is_valid_number("948562369"));
        assert!(is_valid_number("+1 555.123.4567"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_number("999"));
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("555-CALL-NOW"));
        assert!(!is_valid_number("1234567890123456"));
    }

    #[tokio::test]
    async fn test_sqlite_directory_lookup() {
        let conn = init_db(":memory:").unwrap();
        queries::upsert_contact(&conn, &Contact::new("Jose Bejarano", "948562369")).unwrap();
        let directory = SqliteContactDirectory::new(Arc::new(Mutex::new(conn)));

        let contact = directory.find_by_name("Jose Bejarano").await.unwrap();
        assert_eq!(contact.unwrap().number, "948562369");
        assert!(directory.find_by_name("Nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sqlite_directory_validation() {
        let conn = init_db(":memory:").unwrap();
        let directory = SqliteContactDirectory::new(Arc::new(Mutex::new(conn)));

        assert!(directory.validate_number("(948)787-6532").await.unwrap());
        assert!(!directory.validate_number("999").await.unwrap());
    }
}
