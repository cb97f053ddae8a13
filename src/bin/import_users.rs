//! Seeds the user directory from a CSV file.
//!
//! Usage: `import_users <path.csv>` with the header
//! `full_name,city,phone,height,married`.

use std::env;
use std::path::Path;

use config::Config;
use dotenvy::dotenv;
use serde::Deserialize;

use user_directory::db::establish_connection_pool;
use user_directory::domain::user::NewUser;
use user_directory::models::config::ServerConfig;
use user_directory::repository::{DieselRepository, UserWriter};

#[derive(Debug, Deserialize)]
struct UserRecord {
    full_name: String,
    city: String,
    phone: i64,
    height: f64,
    married: bool,
}

impl From<UserRecord> for NewUser {
    fn from(record: UserRecord) -> Self {
        NewUser::new(
            record.full_name,
            record.city,
            record.phone,
            record.height,
            record.married,
        )
    }
}

fn read_users(path: &Path) -> Result<Vec<NewUser>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    reader
        .deserialize::<UserRecord>()
        .map(|record| record.map(NewUser::from))
        .collect()
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(csv_path) = env::args().nth(1) else {
        log::error!("Usage: import_users <path.csv>");
        std::process::exit(1);
    };

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>());

    let server_config = match settings {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let users = match read_users(Path::new(&csv_path)) {
        Ok(users) => users,
        Err(err) => {
            log::error!("Failed to read {csv_path}: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match repo.create_users(&users) {
        Ok(inserted) => log::info!("Imported {inserted} users from {csv_path}"),
        Err(err) => {
            log::error!("Failed to import users: {err}");
            std::process::exit(1);
        }
    }
}
