use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::AuthGate;
use crate::backend::{Backend, SocketClient};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers::{protected, public};
use crate::middleware::api_key_auth;

/// Shared handler state: the daemon connection and the auth gate
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub gate: Arc<AuthGate>,
}

impl AppState {
    pub fn new(backend: Arc<dyn Backend>, gate: Arc<AuthGate>) -> Self {
        Self { backend, gate }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(SocketClient::from_config(&config.backend)),
            Arc::new(AuthGate::from_config(&config.auth)),
        )
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Protected API
        .merge(protected_routes(state.clone()))
        .fallback(not_found)
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(info_routes())
        .merge(dns_routes())
        .merge(ftp_routes())
        .merge(mail_routes())
        .merge(mysql_routes())
        .merge(pgsql_routes())
        .merge(mongo_routes())
        .merge(port_routes())
        .merge(repo_routes())
        .merge(ssl_routes())
        .merge(vhost_routes())
        .merge(www_routes())
        .route_layer(middleware::from_fn_with_state(state, api_key_auth))
}

fn info_routes() -> Router<AppState> {
    use protected::info;

    Router::new()
        .route("/info/limits", get(info::limits))
        .route("/info/account", get(info::account))
}

fn dns_routes() -> Router<AppState> {
    use protected::dns;

    Router::new()
        .route("/dns/add/zone", post(dns::add_zone))
        .route("/dns/add/record", post(dns::add_record))
        .route("/dns/templates", get(dns::templates))
        .route("/dns/list", get(dns::list))
        .route("/dns/del", delete(dns::del))
}

fn ftp_routes() -> Router<AppState> {
    use protected::ftp;

    Router::new()
        .route("/ftp/add", post(ftp::add))
        .route("/ftp/passwd", put(ftp::passwd))
        .route("/ftp/quota", put(ftp::quota))
        .route("/ftp/list", get(ftp::list))
        .route("/ftp/:username", delete(ftp::del))
}

fn mail_routes() -> Router<AppState> {
    use protected::mail;

    Router::new()
        .route("/mail/account/add", post(mail::account_add))
        .route("/mail/account/:email_mailbox", delete(mail::account_del))
        .route("/mail/alias/add", post(mail::alias_add))
        .route("/mail/alias/:email_from", delete(mail::alias_del))
        .route("/mail/passwd", put(mail::passwd))
        .route("/mail/options", put(mail::options))
        .route("/mail/quota", put(mail::quota))
        .route("/mail/list", get(mail::list))
        .route("/mail/whitelist/add", post(mail::whitelist_add))
        .route("/mail/whitelist/list", get(mail::whitelist_list))
        .route("/mail/whitelist/:domain", delete(mail::whitelist_del))
        .route("/mail/dkim/sign", post(mail::dkim_sign))
        .route("/mail/dkim/dns/:domain", get(mail::dkim_dns))
        .route("/mail/dkim/unsign/:domain", delete(mail::dkim_unsign))
}

fn mysql_routes() -> Router<AppState> {
    use protected::mysql;

    Router::new()
        .route("/mysql/db/add", post(mysql::db_add))
        .route("/mysql/db/:database_name", delete(mysql::db_del))
        .route("/mysql/user/add", post(mysql::user_add))
        .route("/mysql/user/:user_name", delete(mysql::user_del))
        .route("/mysql/access/add", post(mysql::access_add))
        .route("/mysql/access/:account", delete(mysql::access_del))
        .route("/mysql/privileges", put(mysql::privileges))
        .route("/mysql/passwd", put(mysql::passwd))
        .route("/mysql/list", get(mysql::list))
}

fn pgsql_routes() -> Router<AppState> {
    use protected::pgsql;

    Router::new()
        .route("/pgsql/db/add", post(pgsql::db_add))
        .route("/pgsql/db/:database_name", delete(pgsql::db_del))
        .route("/pgsql/passwd", put(pgsql::passwd))
        .route("/pgsql/extensions", put(pgsql::extensions))
        .route("/pgsql/list", get(pgsql::list))
}

fn mongo_routes() -> Router<AppState> {
    use protected::mongo;

    Router::new()
        .route("/mongo/db/add", post(mongo::db_add))
        .route("/mongo/db/:database_name", delete(mongo::db_del))
        .route("/mongo/passwd", put(mongo::passwd))
        .route("/mongo/list", get(mongo::list))
}

fn port_routes() -> Router<AppState> {
    use protected::port;

    Router::new()
        .route("/port/add", post(port::add))
        .route("/port/list", get(port::list))
        .route("/port/:type/:port", delete(port::del))
}

fn repo_routes() -> Router<AppState> {
    use protected::repo;

    Router::new()
        .route("/repo/repository/add", post(repo::repository_add))
        .route("/repo/repository/change", put(repo::repository_change))
        .route(
            "/repo/repository/:repo_type/:repo_name",
            delete(repo::repository_del),
        )
        .route("/repo/account/add", post(repo::account_add))
        .route("/repo/account/passwd", put(repo::account_passwd))
        .route(
            "/repo/account/:repo_type/:repo_name/:repo_username",
            delete(repo::account_del),
        )
        .route("/repo/list", get(repo::list))
}

fn ssl_routes() -> Router<AppState> {
    use protected::ssl;

    Router::new()
        .route("/ssl/www/add", post(ssl::www_add))
        .route("/ssl/www/get", post(ssl::www_get))
        .route("/ssl/www/list", get(ssl::www_list))
        .route("/ssl/www/:ssl_ip", delete(ssl::www_del))
        .route("/ssl/mail/add", post(ssl::mail_add))
        .route("/ssl/mail/get", post(ssl::mail_get))
        .route("/ssl/mail/list", get(ssl::mail_list))
        .route("/ssl/mail/:ssl_ip", delete(ssl::mail_del))
}

fn vhost_routes() -> Router<AppState> {
    use protected::vhost;

    Router::new().route("/vhost/list", get(vhost::list))
}

fn www_routes() -> Router<AppState> {
    use protected::www;

    Router::new()
        .route("/www/add", post(www::add))
        .route("/www/del/:www_domain", delete(www::del))
        .route("/www/options", put(www::options))
        .route("/www/restart/:www_domain", post(www::restart))
        .route("/www/list", get(www::list))
        .route("/www/stats/account/add", post(www::stats_account_add))
        .route("/www/stats/account/passwd", put(www::stats_account_passwd))
        .route("/www/stats/account/:user_name", delete(www::stats_account_del))
        .route("/www/stats/access/add", post(www::stats_access_add))
        .route(
            "/www/stats/access/:www_domain/:user_name",
            delete(www::stats_access_del),
        )
        .route("/www/stats/domain/add", post(www::stats_domain_add))
        .route("/www/stats/domain/:www_domain", delete(www::stats_domain_del))
        .route("/www/stats/list", get(www::stats_list))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
