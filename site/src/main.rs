use actix_web::{App, HttpServer, middleware::Logger};
use env_logger::Env;
use log::info;

mod config;
mod routes;

use config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    info!(
        "serving {} (assets {}) on http://{}:{}",
        config.dist_dir.display(),
        config.assets_dir.display(),
        config.host,
        config.port
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| routes::mount(cfg, &config))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
