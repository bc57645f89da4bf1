//! actix-web routes over anything that has the right store capabilities.
//!
//! Every route is a `GET` with its arguments in the path, e.g. `/set/name/Alice`.

use std::collections::HashMap;

use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use crate::capabilities::{Deleter, Exister, Getter, Setter, Updater};
use crate::error::KVError;

#[derive(Debug, Serialize)]
struct Msg {
    msg: &'static str,
}

const OK: Msg = Msg { msg: "ok" };

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("the key ({key}) doesn't exist")]
    NotFound { key: String },
}

impl ApiError {
    fn from_store(err: KVError, key: &str) -> Self {
        match err {
            KVError::NotFound => {
                debug!("key not found: {}", key);
                ApiError::NotFound {
                    key: key.to_owned(),
                }
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(HashMap::from([("error", self.to_string())]))
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

async fn set_key<S>(store: web::Data<S>, path: web::Path<(String, String)>) -> impl Responder
where
    S: Setter<String, String> + 'static,
{
    let (key, value) = path.into_inner();
    trace!("set {} = {}", key, value);
    store.set(key, value);
    HttpResponse::Ok().json(OK)
}

async fn get_key<S>(
    store: web::Data<S>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    S: Getter<String, String> + 'static,
{
    let key = path.into_inner();
    let value = store
        .get(&key)
        .map_err(|e| ApiError::from_store(e, &key))?;
    Ok(HttpResponse::Ok().json(HashMap::from([(key, value)])))
}

async fn update_key<S>(
    store: web::Data<S>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError>
where
    S: Updater<String, String> + 'static,
{
    let (key, value) = path.into_inner();
    trace!("update {} = {}", key, value);
    store
        .update(key.clone(), value)
        .map_err(|e| ApiError::from_store(e, &key))?;
    Ok(HttpResponse::Ok().json(OK))
}

async fn delete_key<S>(
    store: web::Data<S>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    S: Deleter<String, String> + 'static,
{
    let key = path.into_inner();
    trace!("delete {}", key);
    let removed = store
        .delete(&key)
        .map_err(|e| ApiError::from_store(e, &key))?;
    Ok(HttpResponse::Ok().json(HashMap::from([(key, removed)])))
}

async fn exists_key<S>(store: web::Data<S>, path: web::Path<String>) -> impl Responder
where
    S: Exister<String> + 'static,
{
    let key = path.into_inner();
    let present = store.exists(&key);
    HttpResponse::Ok().json(HashMap::from([(key, present)]))
}

/// Registers the store routes. The store itself must be added with `app_data(web::Data::new(..))`.
pub fn configure<S>(cfg: &mut web::ServiceConfig)
where
    S: Setter<String, String>
        + Getter<String, String>
        + Updater<String, String>
        + Deleter<String, String>
        + Exister<String>
        + 'static,
{
    cfg.route("/health", web::get().to(health))
        .route("/set/{key}/{value}", web::get().to(set_key::<S>))
        .route("/get/{key}", web::get().to(get_key::<S>))
        .route("/update/{key}/{value}", web::get().to(update_key::<S>))
        .route("/delete/{key}", web::get().to(delete_key::<S>))
        .route("/exists/{key}", web::get().to(exists_key::<S>));
}
