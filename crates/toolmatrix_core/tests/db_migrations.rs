use rusqlite::Connection;
use toolmatrix_core::db::migrations::schema_version;
use toolmatrix_core::db::{open_db, open_db_in_memory, DbError};

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn document_columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('catalog_documents') ORDER BY cid;")
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap();
    names.collect::<Result<Vec<_>, _>>().unwrap()
}

#[test]
fn fresh_database_gets_document_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), schema_version());
    assert_eq!(document_columns(&conn), vec!["key", "body", "updated_at"]);
}

#[test]
fn reopening_keeps_rows_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO catalog_documents (key, body) VALUES ('catalog', '{}');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), schema_version());
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM catalog_documents;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 42;")
        .unwrap();

    match open_db(&path) {
        Err(DbError::SchemaTooNew { found, supported }) => {
            assert_eq!(found, 42);
            assert_eq!(supported, schema_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("newer schema was accepted"),
    }
}
