//! On-disk round trip: migrate, write, reopen, read back

use psephos_core::analyze;
use psephos_store::{db, migrations, WordFilter, WordRepo};
use tempfile::TempDir;

#[test]
fn test_on_disk_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("words.db");

    {
        let mut conn = db::open(&db_path).unwrap();
        db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        WordRepo::upsert_word(&conn, "καλη").unwrap();
        WordRepo::upsert_word(&conn, "ΑΒ").unwrap();
    }

    // Reopen: schema application is idempotent, data survives
    let mut conn = db::open(&db_path).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    assert_eq!(WordRepo::count_words(&conn, &WordFilter::new()).unwrap(), 2);

    let record = WordRepo::find_by_text(&conn, "ΚΑΛΗ").unwrap().unwrap();
    assert_eq!(record.analysis(), analyze("ΚΑΛΗ"));
    assert!(record.created_at > 0);
}

#[test]
fn test_export_csv_from_disk_store() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("words.db");

    let mut conn = db::open(&db_path).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    WordRepo::upsert_word(&conn, "ΚΑΛΗ").unwrap();
    WordRepo::upsert_word(&conn, "ΑΒ").unwrap();

    let rows = WordRepo::export_rows(&conn, &WordFilter::new()).unwrap();
    let csv = psephos_store::export::render_csv(&rows);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("word,vowel_sum"));
    assert!(lines[1].starts_with("ΑΒ,"));
    assert!(lines[2].starts_with("ΚΑΛΗ,"));
}
