//! Temporary SQLite databases for integration tests.

use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;
use user_directory::db::{DbPool, establish_connection_pool};
use user_directory::domain::user::NewUser;
use user_directory::repository::{DieselRepository, UserWriter};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated database file living in its own temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let mut conn = SqliteConnection::establish(&url).expect("open test database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        let pool = establish_connection_pool(&url).expect("build pool");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

#[allow(dead_code)]
pub fn seed_users(repo: &DieselRepository) {
    let users = vec![
        NewUser::new("Alice".into(), "New York".into(), 1234567890, 5.5, false),
        NewUser::new("Bob".into(), "Los Angeles".into(), 1234567890, 5.5, true),
        NewUser::new("Alice".into(), "Chicago".into(), 5550001, 6.0, true),
        NewUser::new("Carol".into(), "New York".into(), 5550002, 4.9, false),
    ];
    assert_eq!(repo.create_users(&users).expect("seed users"), 4);
}
