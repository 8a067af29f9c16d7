//! Open CORS policy: any origin may call the API.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Adds `Access-Control-Allow-Origin: *` to every response, errors included.
pub fn open_cors() -> DefaultHeaders {
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}
