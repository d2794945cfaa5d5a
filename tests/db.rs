mod common;

#[test]
fn test_migrated_database_hands_out_connections() {
    let test_db = common::TestDb::new("test_migrated_database.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}
