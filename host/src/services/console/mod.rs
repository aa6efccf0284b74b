use actix_web::{
    web::{self, scope},
    HttpResponse, Responder, Scope,
};
use log::debug;
use outreach_common::config::ConsoleConfig;

pub const CONSOLE_PATH: &str = "/console";

pub fn configure_routes() -> Scope {
    scope(CONSOLE_PATH).route("/config.json", web::get().to(config))
}

/// Runtime settings the console reads before its first backend call.
async fn config(console: web::Data<ConsoleConfig>) -> impl Responder {
    debug!("serving console config, api base {}", console.api_base);
    HttpResponse::Ok().json(console.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn config_is_served_as_json() {
        let console = ConsoleConfig {
            api_base: "https://api.example.com/".into(),
            max_import_bytes: 1024,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(console.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/console/config.json")
            .to_request();
        let served: ConsoleConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(served, console);
    }

    #[actix_web::test]
    async fn other_console_paths_are_not_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ConsoleConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/console/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
