use config::Config;
use dotenvy::dotenv;

use advocate_directory::models::config::ServerConfig;
use advocate_directory::run;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    Config::builder()
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8080)?
        .set_default("database_url", "advocates.db")?
        .set_default("templates_dir", "templates/**/*.html")?
        .set_default("assets_dir", "./assets")?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()?
        .try_deserialize::<ServerConfig>()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config = load_config()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    run(server_config).await
}
