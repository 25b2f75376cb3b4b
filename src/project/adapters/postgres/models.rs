//! Diesel row models for project persistence.

use super::schema::{project_teams, projects};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Status label.
    pub status: String,
    /// Completion percentage.
    pub progress: i16,
    /// Start date.
    pub start_date: DateTime<Utc>,
    /// Optional end date.
    pub end_date: Option<DateTime<Utc>>,
}

/// Insert and update model for project records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectFieldsRow {
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Status label.
    pub status: String,
    /// Completion percentage.
    pub progress: i16,
    /// Start date.
    pub start_date: DateTime<Utc>,
    /// Optional end date.
    pub end_date: Option<DateTime<Utc>>,
}

/// Insert model for team membership rows.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = project_teams)]
pub struct ProjectTeamRow {
    /// Project identifier.
    pub project_id: i64,
    /// User identifier.
    pub user_id: i64,
}
