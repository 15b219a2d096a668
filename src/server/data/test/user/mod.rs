use crate::{
    model::user::UserRole,
    server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParams},
};
use test_utils::{builder::TestBuilder, factory};

mod get_all_paginated;
mod set_role;
mod upsert;
