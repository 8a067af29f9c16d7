//! Form extractor that reads a missing body as empty fields.

use std::future::{Future, ready};
use std::pin::Pin;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use serde::de::DeserializeOwned;

const URLENCODED: &str = "application/x-www-form-urlencoded";

/// Urlencoded form fields, or `T::default()` when the request carries no form.
///
/// A request without a urlencoded body still reaches the handler, so the
/// password check answers it instead of the body parser. A urlencoded body
/// that fails to parse is rejected by `web::Form` as usual.
#[derive(Debug)]
pub struct FormFields<T>(pub T);

impl<T> FormFields<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for FormFields<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !req.content_type().eq_ignore_ascii_case(URLENCODED) {
            tracing::debug!(
                content_type = req.content_type(),
                "No form body, using empty fields"
            );
            return Box::pin(ready(Ok(FormFields(T::default()))));
        }

        let form = web::Form::<T>::from_request(req, payload);
        Box::pin(async move { form.await.map(|form| FormFields(form.into_inner())) })
    }
}
