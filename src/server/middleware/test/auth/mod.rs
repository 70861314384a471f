use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, SESSION_TTL},
    },
};
use test_utils::builder::TestBuilder;

mod require;
