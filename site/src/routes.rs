use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, web};
use std::path::PathBuf;

use crate::config::SiteConfig;

/// Mounts the static assets, the Trunk bundle and the SPA fallback.
/// `/assets` goes first so the bundle's catch-all does not shadow it.
pub fn mount(cfg: &mut web::ServiceConfig, config: &SiteConfig) {
    let index = config.index_file();

    cfg.service(Files::new("/assets", &config.assets_dir))
        .service(
            Files::new("/", &config.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    spa(req, index.clone())
                })),
        );
}

/// Any path that is not a file in the bundle gets `index.html`, so the
/// client router can resolve it.
async fn spa(req: ServiceRequest, index: PathBuf) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();

    let res = match NamedFile::open_async(&index).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            log::error!("cannot open {}: {e}", index.display());
            HttpResponse::from_error(e)
        }
    };

    Ok(ServiceResponse::new(req, res))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::fs;
    use tempfile::TempDir;

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><title>Pattaya Digital Advertising Truck</title>";

    fn site() -> (TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let dist_dir = dir.path().join("dist");
        let assets_dir = dir.path().join("assets");
        fs::create_dir_all(&dist_dir).unwrap();
        fs::create_dir_all(&assets_dir).unwrap();
        fs::write(dist_dir.join("index.html"), INDEX).unwrap();
        fs::write(dist_dir.join("ledtruck_ui.js"), "export default 1;").unwrap();
        fs::write(assets_dir.join("truck.svg"), "<svg/>").unwrap();

        let config = SiteConfig {
            host: "127.0.0.1".into(),
            port: 0,
            dist_dir,
            assets_dir,
        };
        (dir, config)
    }

    #[actix_web::test]
    async fn serves_index_at_root() {
        let (_dir, config) = site();
        let app = test::init_service(App::new().configure(|cfg| mount(cfg, &config))).await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(&body[..], INDEX.as_bytes());
    }

    #[actix_web::test]
    async fn serves_bundle_and_assets() {
        let (_dir, config) = site();
        let app = test::init_service(App::new().configure(|cfg| mount(cfg, &config))).await;

        let js = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/ledtruck_ui.js").to_request(),
        )
        .await;
        assert_eq!(&js[..], b"export default 1;");

        let svg = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/assets/truck.svg").to_request(),
        )
        .await;
        assert_eq!(&svg[..], b"<svg/>");
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let (_dir, config) = site();
        let app = test::init_service(App::new().configure(|cfg| mount(cfg, &config))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/campaigns/night-route").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(&test::read_body(res).await[..], INDEX.as_bytes());
    }

    #[actix_web::test]
    async fn missing_index_is_a_404_not_a_panic() {
        let (_dir, config) = site();
        fs::remove_file(config.index_file()).unwrap();
        let app = test::init_service(App::new().configure(|cfg| mount(cfg, &config))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/anything").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
