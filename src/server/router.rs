use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        billing::{BillingDto, CreateBillingDto, UpdateBillingDto},
        order::{CreateOrderDto, OrderDto, OrderItemDto, OrderLineDto},
        payment::{CardPaymentDto, FinalizePaymentDto, PaymentDto, PaymentItemDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::{
            billing, crop, forum, land, market, notification, order, payment, post as forum_post,
            product, user,
        },
        error::{config::ConfigError, AppError},
        service::storage::{INVOICES_ROUTE, MAX_UPLOAD_BYTES, REPORTS_ROUTE, UPLOADS_ROUTE},
        state::AppState,
    },
};

/// Room for multipart boundaries and text fields on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "AgroSphere marketplace API"),
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::upload_product_image,
        order::create_order,
        order::get_orders,
        order::get_order,
        order::delete_order,
        billing::create_billing,
        billing::get_billings,
        billing::get_billing,
        billing::update_billing,
        billing::delete_billing,
        payment::pay_by_card,
        payment::pay_by_card_pending,
        payment::pay_by_slip,
        payment::get_payments,
        payment::get_payment,
        payment::verify_payment,
        payment::unverify_payment,
        payment::dispatch_payment,
        payment::finalize_payment,
        payment::get_invoice,
        payment::delete_payment,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        ProductDto,
        CreateProductDto,
        UpdateProductDto,
        OrderDto,
        OrderItemDto,
        OrderLineDto,
        CreateOrderDto,
        BillingDto,
        CreateBillingDto,
        UpdateBillingDto,
        PaymentDto,
        PaymentItemDto,
        CardPaymentDto,
        FinalizePaymentDto,
    )),
    modifiers(&BearerSecurity),
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the API router with static file serving and the documentation UI.
///
/// # Arguments
/// - `state` - Shared application state; its storage directories back the static routes
/// - `cors_origin` - Single allowed origin, or `None` to allow any origin
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(ConfigError::InvalidValue)` - `cors_origin` is not a valid header value
pub fn router(state: AppState, cors_origin: Option<&str>) -> Result<Router, AppError> {
    let cors = match cors_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                name: "CORS_ORIGIN".to_string(),
                reason: e.to_string(),
            })?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    };

    let uploads = ServeDir::new(state.storage.upload_dir());
    let reports = ServeDir::new(state.storage.report_dir());
    let invoices = ServeDir::new(state.storage.invoice_dir());

    let router = Router::new()
        .merge(user_routes())
        .merge(land_routes())
        .merge(marketplace_routes())
        .merge(community_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .nest_service(UPLOADS_ROUTE, uploads)
        .nest_service(REPORTS_ROUTE, reports)
        .nest_service(INVOICES_ROUTE, invoices)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::get_users))
        .route("/users/register", post(user::register))
        .route("/users/login", post(user::login))
        .route("/users/me", get(user::get_me))
        .route("/users/forgot-password", post(user::forgot_password))
        .route("/users/reset-password", post(user::reset_password))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/users/{id}/role", put(user::update_role))
        .route("/users/{id}/image", post(user::upload_profile_image))
        .route("/users/{id}/report", get(user::get_report))
}

fn land_routes() -> Router<AppState> {
    Router::new()
        .route("/lands", get(land::get_lands).post(land::create_land))
        .route(
            "/lands/{id}",
            get(land::get_land)
                .put(land::update_land)
                .delete(land::delete_land),
        )
        .route("/lands/{id}/photo", post(land::upload_land_photo))
}

fn marketplace_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/products",
            get(product::get_products).post(product::create_product),
        )
        .route(
            "/api/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route("/api/products/{id}/image", post(product::upload_product_image))
        .route(
            "/api/orders",
            get(order::get_orders).post(order::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(order::get_order).delete(order::delete_order),
        )
        .route(
            "/api/billing",
            get(billing::get_billings).post(billing::create_billing),
        )
        .route(
            "/api/billing/{id}",
            get(billing::get_billing)
                .put(billing::update_billing)
                .delete(billing::delete_billing),
        )
        .route("/api/payment", get(payment::get_payments))
        .route("/api/payment/card", post(payment::pay_by_card))
        .route("/api/payment/card/pending", post(payment::pay_by_card_pending))
        .route("/api/payment/slip", post(payment::pay_by_slip))
        .route(
            "/api/payment/{id}",
            get(payment::get_payment).delete(payment::delete_payment),
        )
        .route("/api/payment/{id}/verify", put(payment::verify_payment))
        .route("/api/payment/{id}/unverify", put(payment::unverify_payment))
        .route("/api/payment/{id}/dispatch", put(payment::dispatch_payment))
        .route("/api/payment/{id}/finalize", put(payment::finalize_payment))
        .route("/api/payment/{id}/invoice", get(payment::get_invoice))
        .route(
            "/api/notifications",
            post(notification::create_notification),
        )
        .route(
            "/api/notifications/{recipient}",
            get(notification::get_notifications),
        )
}

fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/crops", get(crop::get_crops).post(crop::create_crop))
        .route(
            "/crops/{id}",
            get(crop::get_crop)
                .put(crop::update_crop)
                .delete(crop::delete_crop),
        )
        .route(
            "/QandA",
            get(forum::get_questions).post(forum::create_question),
        )
        .route(
            "/QandA/{id}",
            get(forum::get_question)
                .put(forum::update_question)
                .delete(forum::delete_question),
        )
        .route("/QandA/{id}/answer", post(forum::answer_question))
        .route("/post", get(forum_post::get_posts).post(forum_post::create_post))
        .route(
            "/post/{id}",
            get(forum_post::get_post)
                .put(forum_post::update_post)
                .delete(forum_post::delete_post),
        )
        .route("/post/{id}/replies", post(forum_post::create_reply))
        .route("/market", get(market::get_prices).post(market::create_price))
        .route(
            "/market/{id}",
            get(market::get_price)
                .put(market::update_price)
                .delete(market::delete_price),
        )
}
