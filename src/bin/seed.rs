//! Roster seeding tool: inserts the built-in advocate roster into the
//! configured database. The schema must already exist (`diesel migration
//! run`).

use std::env;

use dotenvy::dotenv;

use advocate_directory::db::establish_connection_pool;
use advocate_directory::models::seed::seed_advocates;
use advocate_directory::repository::AdvocateWriter;
use advocate_directory::repository::advocate::DieselAdvocateRepository;

fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "advocates.db".to_string());

    let pool = establish_connection_pool(&database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselAdvocateRepository::new(&pool);
    let advocates = seed_advocates();

    match repo.create_advocates(&advocates) {
        Ok(count) => {
            log::info!("Seeded {count} advocates into {database_url}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to seed advocates: {e}");
            Err(std::io::Error::other(format!(
                "Failed to seed advocates: {e}"
            )))
        }
    }
}
