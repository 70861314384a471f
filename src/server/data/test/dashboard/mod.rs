use crate::server::data::dashboard::{DashboardRepository, MemberCategory};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod age_distribution;
mod by_area;
mod count_by;
mod recent_families;
mod totals;
