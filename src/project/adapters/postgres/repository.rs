//! `PostgreSQL` repository implementation for projects and their teams.

use super::{
    models::{ProjectFieldsRow, ProjectRow, ProjectTeamRow},
    schema::{project_teams, projects},
};
use crate::persistence::{PgPool, run_blocking_with};
use crate::project::{
    domain::{
        NewProject, PersistedProjectData, Project, ProjectDescription, ProjectId, ProjectName,
        ProjectProgress, ProjectSchedule, ProjectStatus,
    },
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, ProjectTeamRepository,
    },
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking_with(
            &self.pool,
            f,
            ProjectRepositoryError::persistence,
            ProjectRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn store(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let row = to_fields_row(project);
        self.run_blocking(move |connection| {
            let stored = diesel::insert_into(projects::table)
                .values(&row)
                .returning(ProjectRow::as_returning())
                .get_result(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            row_to_project(stored)
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let changeset = to_fields_row(&NewProject {
            name: project.name().clone(),
            description: project.description().clone(),
            status: project.status().clone(),
            progress: project.progress(),
            schedule: project.schedule(),
        });

        self.run_blocking(move |connection| {
            let updated = diesel::update(projects::table.find(project_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProjectRepositoryError::NotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(projects::table.find(id.value()))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(ProjectRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn find_by_ids(&self, ids: &[ProjectId]) -> ProjectRepositoryResult<Vec<Project>> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        self.run_blocking(move |connection| {
            let rows = projects::table
                .filter(projects::id.eq_any(raw_ids))
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }
}

#[async_trait]
impl ProjectTeamRepository for PostgresProjectRepository {
    async fn add_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> ProjectRepositoryResult<bool> {
        let row = ProjectTeamRow {
            project_id: project_id.value(),
            user_id: user_id.value(),
        };
        self.run_blocking(move |connection| {
            let inserted = diesel::insert_into(project_teams::table)
                .values(&row)
                .on_conflict_do_nothing()
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            Ok(inserted == 1)
        })
        .await
    }

    async fn members_of(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<UserId>> {
        self.run_blocking(move |connection| {
            let ids = project_teams::table
                .filter(project_teams::project_id.eq(project_id.value()))
                .order(project_teams::user_id.asc())
                .select(project_teams::user_id)
                .load::<i64>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            ids.into_iter()
                .map(|id| UserId::new(id).map_err(ProjectRepositoryError::persistence))
                .collect()
        })
        .await
    }

    async fn projects_of(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<ProjectId>> {
        self.run_blocking(move |connection| {
            let ids = project_teams::table
                .filter(project_teams::user_id.eq(user_id.value()))
                .order(project_teams::project_id.asc())
                .select(project_teams::project_id)
                .load::<i64>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            ids.into_iter()
                .map(|id| ProjectId::new(id).map_err(ProjectRepositoryError::persistence))
                .collect()
        })
        .await
    }
}

fn to_fields_row(project: &NewProject) -> ProjectFieldsRow {
    ProjectFieldsRow {
        name: project.name.as_str().to_owned(),
        description: project.description.as_str().to_owned(),
        status: project.status.as_str().to_owned(),
        progress: i16::from(project.progress.value()),
        start_date: project.schedule.start(),
        end_date: project.schedule.end(),
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        name,
        description,
        status,
        progress,
        start_date,
        end_date,
    } = row;

    let fields = NewProject {
        name: ProjectName::new(name).map_err(ProjectRepositoryError::persistence)?,
        description: ProjectDescription::new(description)
            .map_err(ProjectRepositoryError::persistence)?,
        status: ProjectStatus::new(status),
        progress: ProjectProgress::new(i64::from(progress))
            .map_err(ProjectRepositoryError::persistence)?,
        schedule: ProjectSchedule::new(start_date, end_date)
            .map_err(ProjectRepositoryError::persistence)?,
    };
    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(id).map_err(ProjectRepositoryError::persistence)?,
        fields,
    }))
}
