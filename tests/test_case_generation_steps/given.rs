//! Given steps for test case generation BDD scenarios.

use chrono::{TimeZone, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use sprinthub::project::services::CreateProjectRequest;
use sprinthub::task::services::CreateTaskRequest;
use sprinthub::test_case::{
    adapters::memory::StaticGherkinGenerator, domain::GherkinScenario, ports::GeneratorError,
};

use super::world::{GenerationWorld, run_async};

#[given(r#"a project task described as "{description}""#)]
fn project_task(world: &mut GenerationWorld, description: String) -> Result<(), eyre::Report> {
    let start = Utc
        .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid project start date"))?;
    let project = run_async(world.projects.create(CreateProjectRequest::new(
        "Account settings",
        "Self-service account management",
        start,
    )))
    .wrap_err("create project for generation scenario")?;
    let task = run_async(world.tasks.create(CreateTaskRequest::new(
        project.id(),
        "Scenario task",
        description,
    )))
    .wrap_err("create task for generation scenario")?;
    world.task = Some(task);
    Ok(())
}

#[given(r#"the generator replies with "{gherkin}""#)]
fn generator_replies(world: &mut GenerationWorld, gherkin: String) -> Result<(), eyre::Report> {
    let scenario = GherkinScenario::new(gherkin).wrap_err("build canned scenario")?;
    world.generator = Some(StaticGherkinGenerator::replying(scenario));
    Ok(())
}

#[given("the generator is unavailable")]
fn generator_unavailable(world: &mut GenerationWorld) {
    world.generator = Some(StaticGherkinGenerator::failing(GeneratorError::Unavailable(
        "connection refused".to_owned(),
    )));
}
