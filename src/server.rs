//! HTTP surface: the design proxy endpoint plus a mockup preview.

use actix_web::{
    http::{Method, StatusCode},
    web, App, HttpResponse, HttpResponseBuilder, HttpServer,
};
use serde::Deserialize;

use crate::{
    config::Config,
    logger,
    mockup,
    proxy::{DesignProxy, ProxyResponse},
};

pub const DESIGN_PATH: &str = "/generate-tshirt-design";
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Headers", ALLOWED_HEADERS))
}

fn into_http(response: ProxyResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    with_cors(&mut HttpResponse::build(status)).json(response.body)
}

async fn preflight() -> HttpResponse {
    with_cors(&mut HttpResponse::NoContent()).finish()
}

async fn generate_design(proxy: web::Data<DesignProxy>, body: web::Bytes) -> HttpResponse {
    let request_id = logger::request_id();
    log::info!("[req:{}] design request ({} bytes)", request_id, body.len());

    let response = proxy.handle_json(&body).await;

    log::info!("[req:{}] answered {}", request_id, response.status);
    into_http(response)
}

#[derive(Debug, Deserialize)]
pub struct MockupQuery {
    pub color: Option<String>,
    pub size: Option<String>,
    pub image: Option<String>,
    pub generating: Option<String>,
}

impl MockupQuery {
    fn is_generating(&self) -> bool {
        matches!(
            self.generating.as_deref().map(str::trim),
            Some("true") | Some("1") | Some("yes")
        )
    }
}

async fn render_mockup(query: web::Query<MockupQuery>) -> HttpResponse {
    let mockup = mockup::render(
        query.color.as_deref().unwrap_or_default(),
        query.size.as_deref().unwrap_or_default(),
        query.image.as_deref(),
        query.is_generating(),
    );
    with_cors(&mut HttpResponse::Ok())
        .content_type("image/svg+xml")
        .body(mockup.to_svg())
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(DESIGN_PATH)
            .route(web::method(Method::OPTIONS).to(preflight))
            .route(web::post().to(generate_design)),
    )
    .route("/mockup", web::get().to(render_mockup))
    .route("/health", web::get().to(health));
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let proxy = web::Data::new(DesignProxy::from_config(&config));

    HttpServer::new(move || App::new().app_data(proxy.clone()).configure(configure))
        .bind(config.bind_address())?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GatewayConfig,
        error::RATE_LIMIT_MESSAGE,
        models::{DesignParameters, DesignRequest},
        proxy::tests::{image_body, MockGateway},
    };
    use actix_web::{body::to_bytes, test};
    use serde_json::json;
    use std::sync::Arc;

    fn app_proxy(gateway: Arc<MockGateway>) -> web::Data<DesignProxy> {
        web::Data::new(DesignProxy::new(
            gateway,
            GatewayConfig::new().with_api_key("k"),
        ))
    }

    fn payload() -> DesignRequest {
        DesignRequest::from(&DesignParameters::default().with_main_idea("Stay Weird"))
    }

    #[actix_web::test]
    async fn test_preflight_is_empty_with_cors() {
        let gateway = MockGateway::replying(200, image_body("u"));
        let app = test::init_service(
            App::new()
                .app_data(app_proxy(gateway.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(DESIGN_PATH)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Headers").unwrap(),
            ALLOWED_HEADERS
        );
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(body.is_empty());
        assert_eq!(gateway.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_post_returns_design() {
        let gateway = MockGateway::replying(200, image_body("https://cdn/x.png"));
        let app = test::init_service(
            App::new()
                .app_data(app_proxy(gateway))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(DESIGN_PATH)
            .set_json(payload())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"image": "https://cdn/x.png", "description": "A bold motivational print"})
        );
    }

    #[actix_web::test]
    async fn test_post_forwards_rate_limit() {
        let gateway = MockGateway::replying(429, json!({}));
        let app = test::init_service(
            App::new()
                .app_data(app_proxy(gateway))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(DESIGN_PATH)
            .set_json(payload())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": RATE_LIMIT_MESSAGE }));
    }

    #[actix_web::test]
    async fn test_mockup_endpoint_falls_back() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/mockup?color=rainbow&size=XS&generating=true")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "image/svg+xml"
        );
        let body = to_bytes(resp.into_body()).await.unwrap();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains(r##"fill="#1a1a1a""##));
        assert!(svg.contains(r#"data-state="generating""#));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"status": "ok"}));
    }
}
