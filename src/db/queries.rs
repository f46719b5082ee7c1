use rusqlite::{params, Connection, OptionalExtension};

use crate::models::Contact;

// ── Contacts ──

pub fn find_contact_by_name(conn: &Connection, name: &str) -> anyhow::Result<Option<Contact>> {
    let contact = conn
        .query_row(
            "SELECT name, number FROM contacts WHERE name = ?1",
            params![name],
            |row| {
                Ok(Contact {
                    name: row.get(0)?,
                    number: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(contact)
}

pub fn upsert_contact(conn: &Connection, contact: &Contact) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO contacts (name, number) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET number = excluded.number",
        params![contact.name, contact.number],
    )?;
    Ok(())
}

pub fn list_contacts(conn: &Connection) -> anyhow::Result<Vec<Contact>> {
    let mut stmt = conn.prepare("SELECT name, number FROM contacts ORDER BY name")?;
    let contacts = stmt
        .query_map([], |row| {
            Ok(Contact {
                name: row.get(0)?,
                number: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(contacts)
}

pub fn delete_contact(conn: &Connection, name: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM contacts WHERE name = ?1", params![name])?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    #[test]
    fn test_find_contact_exact_match() {
        let conn = init_db(":memory:").unwrap();
        upsert_contact(&conn, &Contact::new("Jose Bejarano", "948562369")).unwrap();

        let found = find_contact_by_name(&conn, "Jose Bejarano").unwrap();
        assert_eq!(found, Some(Contact::new("Jose Bejarano", "948562369")));

        assert!(find_contact_by_name(&conn, "jose bejarano").unwrap().is_none());
        assert!(find_contact_by_name(&conn, "Jose").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_number() {
        let conn = init_db(":memory:").unwrap();
        upsert_contact(&conn, &Contact::new("Ana", "5551234567")).unwrap();
        upsert_contact(&conn, &Contact::new("Ana", "5559876543")).unwrap();

        let contacts = list_contacts(&conn).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].number, "5559876543");
    }

    #[test]
    fn test_list_contacts_sorted_by_name() {
        let conn = init_db(":memory:").unwrap();
        upsert_contact(&conn, &Contact::new("Zoe", "5550000001")).unwrap();
        upsert_contact(&conn, &Contact::new("Adam", "5550000002")).unwrap();

        let names: Vec<_> = list_contacts(&conn)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Adam", "Zoe"]);
    }

    #[test]
    fn test_delete_contact() {
        let conn = init_db(":memory:").unwrap();
        upsert_contact(&conn, &Contact::new("Ana", "5551234567")).unwrap();

        assert!(delete_contact(&conn, "Ana").unwrap());
        assert!(!delete_contact(&conn, "Ana").unwrap());
        assert!(find_contact_by_name(&conn, "Ana").unwrap().is_none());
    }
}
