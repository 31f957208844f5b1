/// Isolated test database utility that creates and cleans up temporary databases
/// Each test gets its own database that is automatically dropped when the test completes
///
/// This uses TEST_DATABASE_URL from the environment to connect to the test database server.
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use dsmovie_lib::shared::Database;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Isolated test database that automatically cleans up on drop
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// #[ignore = "requires TEST_DATABASE_URL"]
/// async fn test_something() {
///     let test_db = TestDb::new();
///     let services = AppServices::with_database(test_db.database());
///     // Test...
///     // Database automatically dropped here
/// }
/// ```
pub struct TestDb {
    default_db_url: String,
    name: String,
    database: Arc<Database>,
}

impl TestDb {
    /// Creates a new isolated, fully migrated test database
    ///
    /// Database name format: dsmovie_test_{process_id}_{counter}
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "dsmovie_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let mut conn = PgConnection::establish(&test_db_url)
            .expect("Failed to connect to test database server");

        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Replace the database name in the URL (everything after the last '/')
        let isolated_db_url = match test_db_url.rfind('/') {
            Some(last_slash) => format!("{}/{}", &test_db_url[..last_slash], name),
            None => panic!("Invalid TEST_DATABASE_URL format: {}", test_db_url),
        };

        let manager = ConnectionManager::<PgConnection>::new(isolated_db_url);
        let pool = r2d2::Pool::builder()
            .max_size(8)
            .test_on_check_out(true)
            .build(manager)
            .expect("Failed to build test database connection pool");

        let database = Arc::new(Database::from_pool(pool));
        database
            .run_migrations()
            .expect("Unable to migrate the test database");

        Self {
            default_db_url: test_db_url,
            name,
            database,
        }
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.database)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for TestDb {
    /// Terminates open connections and drops the database.
    /// If the thread is panicking the database is left for debugging.
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic, preserved for debugging",
                self.name
            );
            return;
        }

        let Ok(mut conn) = PgConnection::establish(&self.default_db_url) else {
            eprintln!("Failed to connect for cleanup of '{}'", self.name);
            return;
        };

        let terminate_result = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn);

        if let Err(e) = terminate_result {
            eprintln!("Failed to terminate connections for '{}': {}", self.name, e);
        }

        match sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn) {
            Ok(_) => log::debug!("Cleaned up test database: {}", self.name),
            Err(e) => eprintln!("Failed to drop test database '{}': {}", self.name, e),
        }
    }
}
