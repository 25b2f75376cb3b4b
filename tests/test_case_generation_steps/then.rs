//! Then steps for test case generation BDD scenarios.

use rstest_bdd_macros::then;
use sprinthub::test_case::{domain::TestCase, services::TestCaseServiceError};

use super::world::{GenerationWorld, run_async};

fn last_result(
    world: &GenerationWorld,
) -> Result<&Result<TestCase, TestCaseServiceError>, eyre::Report> {
    world
        .results
        .last()
        .ok_or_else(|| eyre::eyre!("no generation was attempted"))
}

#[then(r#"the generated scenario is "{gherkin}""#)]
fn generated_scenario_is(world: &GenerationWorld, gherkin: String) -> Result<(), eyre::Report> {
    let test_case = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("expected a stored test case, got {err}"))?;
    if test_case.gherkin().as_str() != gherkin {
        return Err(eyre::eyre!(
            "expected scenario {gherkin:?}, found {:?}",
            test_case.gherkin().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the generator received "{story}""#)]
fn generator_received(world: &GenerationWorld, story: String) -> Result<(), eyre::Report> {
    let received = world.generator()?.received();
    if received != vec![story.clone()] {
        return Err(eyre::eyre!("expected only {story:?}, generator saw {received:?}"));
    }
    Ok(())
}

#[then("the generator received nothing")]
fn generator_received_nothing(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let received = world.generator()?.received();
    if !received.is_empty() {
        return Err(eyre::eyre!("expected no calls, generator saw {received:?}"));
    }
    Ok(())
}

#[then("the stored test case count is {count:usize}")]
fn stored_test_case_count(world: &GenerationWorld, count: usize) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let stored = run_async(world.repositories.test_cases.list_for_task(task_id))
        .map_err(|err| eyre::eyre!("list stored test cases: {err}"))?;
    if stored.len() != count {
        return Err(eyre::eyre!(
            "expected {count} stored test cases, found {}",
            stored.len()
        ));
    }
    Ok(())
}

#[then("generation fails because the task was not found")]
fn fails_with_task_not_found(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TestCaseServiceError::TaskNotFound(_))) {
        return Err(eyre::eyre!("expected TaskNotFound, got {result:?}"));
    }
    Ok(())
}

#[then("generation fails because the request was invalid")]
fn fails_with_invalid_request(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TestCaseServiceError::InvalidRequest(_))) {
        return Err(eyre::eyre!("expected InvalidRequest, got {result:?}"));
    }
    Ok(())
}

#[then("generation fails because the generator was unavailable")]
fn fails_with_unavailable(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TestCaseServiceError::UpstreamUnavailable(_))) {
        return Err(eyre::eyre!("expected UpstreamUnavailable, got {result:?}"));
    }
    Ok(())
}
