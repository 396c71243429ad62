use diesel::prelude::*;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let base = "test_in_memory_connection.db";

    {
        let test_db = common::TestDb::new(base);
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
    }

    let db_path = std::path::Path::new(base);
    assert!(!db_path.exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}

#[derive(QueryableByName)]
struct Pragma {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    foreign_keys: i32,
}

#[test]
fn test_pool_enforces_foreign_keys() {
    let test_db = common::TestDb::new("test_pool_enforces_foreign_keys.db");
    let mut conn = test_db.pool().get().expect("connection");

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .expect("read pragma");
    assert_eq!(pragma.foreign_keys, 1);
}
