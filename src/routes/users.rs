use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::user::{GetUserRequest, GetUsersRequest, SearchUsersRequest};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::users as users_service;

#[post("/RetrieveUserById")]
pub async fn retrieve_user_by_id(
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<GetUserRequest>,
) -> impl Responder {
    match users_service::retrieve_user_by_id(repo.get_ref(), &request) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_response(&err),
    }
}

#[post("/RetrieveUsersByIds")]
pub async fn retrieve_users_by_ids(
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<GetUsersRequest>,
) -> impl Responder {
    match users_service::retrieve_users_by_ids(repo.get_ref(), request) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}

#[post("/SearchUsers")]
pub async fn search_users(
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<SearchUsersRequest>,
) -> impl Responder {
    match users_service::search_users(repo.get_ref(), request) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}
