use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query};

use crate::core::error::AppError;

pub fn from_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::invalid_parameter(rejection.body_text()))
}

pub fn from_form<T>(form: Result<Form<T>, FormRejection>) -> Result<T, AppError> {
    form.map(|Form(params)| params)
        .map_err(|rejection| AppError::invalid_parameter(rejection.body_text()))
}
