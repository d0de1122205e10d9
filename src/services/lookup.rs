use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use tracing::{debug, info, trace};

use crate::errors::{IpinfodError, Result};
use crate::services::provider::{IpInfo, IpInfoLookup};
use crate::utils::ip::resolve_client_ip;

pub struct LookupService;

impl LookupService {
    /// GET / - static pointer at the real endpoints.
    pub async fn root() -> impl Responder {
        trace!("Received root request");

        HttpResponse::Ok().json(json!({
            "message": "Welcome! Try GET /ip or GET /ip/{ip_addr}"
        }))
    }

    /// GET /ip - look up the caller's own public IP.
    ///
    /// Honors X-Forwarded-For for callers behind a proxy or load balancer.
    pub async fn own_ip(
        req: HttpRequest,
        provider: web::Data<Arc<dyn IpInfoLookup>>,
    ) -> impl Responder {
        let result = match resolve_client_ip(&req) {
            Some(client_ip) => {
                trace!("Resolved client address: {}", client_ip);
                Self::lookup(provider.get_ref().as_ref(), &client_ip).await
            }
            None => Err(IpinfodError::client_input(
                "unable to determine client address",
            )),
        };

        Self::finish(result)
    }

    /// GET /ip/{ip_addr} - look up an explicit address.
    pub async fn by_ip(
        path: web::Path<String>,
        provider: web::Data<Arc<dyn IpInfoLookup>>,
    ) -> impl Responder {
        let ip_addr = path.into_inner();
        Self::finish(Self::lookup(provider.get_ref().as_ref(), &ip_addr).await)
    }

    /// Guard against non-public targets, then delegate to the provider.
    ///
    /// "localhost" is rejected before any network call; everything else is
    /// passed through unvalidated, the upstream is the arbiter of validity.
    async fn lookup(provider: &dyn IpInfoLookup, ip: &str) -> Result<IpInfo> {
        if ip.eq_ignore_ascii_case("localhost") {
            debug!("Rejected lookup for localhost");
            return Err(IpinfodError::client_input("Localhost is not a public IP"));
        }

        provider.lookup(ip).await
    }

    fn finish(result: Result<IpInfo>) -> HttpResponse {
        match result {
            Ok(info) => {
                info!("IP lookup succeeded for {}", info.query);
                HttpResponse::Ok().json(info)
            }
            Err(e) => {
                debug!("IP lookup failed: {}", e);
                HttpResponse::build(e.http_status()).json(json!({
                    "code": e.code(),
                    "error": e.error_type(),
                    "message": e.message(),
                }))
            }
        }
    }
}
