//! When steps for test case generation BDD scenarios.

use rstest_bdd_macros::when;

use super::world::{GenerationWorld, run_async};

#[when("a test case is generated for the task")]
fn generate_for_task(world: &mut GenerationWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id().value();
    generate_for(world, task_id)
}

#[when("a test case is generated for task {task_id:i64}")]
fn generate_for_task_id(world: &mut GenerationWorld, task_id: i64) -> Result<(), eyre::Report> {
    generate_for(world, task_id)
}

fn generate_for(world: &mut GenerationWorld, task_id: i64) -> Result<(), eyre::Report> {
    let relay = world.relay()?;
    let result = run_async(relay.generate(task_id));
    world.results.push(result);
    Ok(())
}
