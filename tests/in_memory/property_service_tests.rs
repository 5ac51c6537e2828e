//! End-to-end progress through [`PropertyWorkflowService`] on the in-memory
//! adapter.

use std::sync::Arc;

use crate::in_memory::helpers::{MemoryService, service};
use refit::workflow::{
    domain::{BlockedReason, COMPLETION_BANNER, POWER_HINT, PropertyAttribute, TaskStatus},
    services::{CompleteTaskRequest, RegisterPropertyRequest},
};
use eyre::ensure;
use rstest::rstest;

fn status_of(
    property: &refit::workflow::domain::PropertyWorkflow,
    wanted: &str,
) -> eyre::Result<(TaskStatus, Option<BlockedReason>)> {
    let task = property
        .tasks()
        .iter()
        .find(|task| task.key().as_str() == wanted)
        .ok_or_else(|| eyre::eyre!("task {wanted} missing"))?;
    Ok((task.status(), task.blocked_reason()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_refit_runs_to_completion(service: MemoryService) -> eyre::Result<()> {
    let created = service
        .register_property(
            RegisterPropertyRequest::new()
                .with_attribute(PropertyAttribute::AsbestosSurvey)
                .with_attribute(PropertyAttribute::HeatingReferral)
                .with_attribute(PropertyAttribute::AltroFlooring)
                .with_attribute(PropertyAttribute::Epc)
                .with_power_status("bgas_meter_exchange_appointment"),
        )
        .await?;
    let id = created.id();

    ensure!(status_of(&created, "heating")?.1 == Some(BlockedReason::PowerNotReady));
    ensure!(service.next_actions(id).await?.contains(&POWER_HINT.to_owned()));

    service
        .complete_task(CompleteTaskRequest::new(id, "paperwork_pos"))
        .await?;
    let powered = service.update_power_status(id, "power_ready").await?;
    ensure!(status_of(&powered, "heating")? == (TaskStatus::NotStarted, None));
    ensure!(
        status_of(&powered, "altro")?
            == (TaskStatus::Blocked, Some(BlockedReason::EarlierStageIncomplete))
    );
    ensure!(
        status_of(&powered, "epc_eicr")?
            == (TaskStatus::Blocked, Some(BlockedReason::OtherTasksIncomplete))
    );

    for task_key in ["bgas_check", "asbestos_survey", "heating", "altro"] {
        service
            .complete_task(CompleteTaskRequest::new(id, task_key))
            .await?;
    }
    let before_sign_off = service
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("property missing"))?;
    ensure!(status_of(&before_sign_off, "epc_eicr")? == (TaskStatus::NotStarted, None));

    service
        .complete_task(CompleteTaskRequest::new(id, "epc_eicr"))
        .await?;
    ensure!(service.next_actions(id).await? == vec![COMPLETION_BANNER.to_owned()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn losing_power_blocks_open_power_tasks_again(service: MemoryService) -> eyre::Result<()> {
    let created = service
        .register_property(
            RegisterPropertyRequest::new()
                .with_attribute(PropertyAttribute::BathroomRenewal)
                .with_power_status("power_ready"),
        )
        .await?;
    service
        .complete_task(CompleteTaskRequest::new(created.id(), "paperwork_pos"))
        .await?;

    let lost = service
        .update_power_status(created.id(), "appointment_fault_exchange")
        .await?;

    ensure!(
        status_of(&lost, "bathroom")? == (TaskStatus::Blocked, Some(BlockedReason::PowerNotReady))
    );
    ensure!(status_of(&lost, "paperwork_pos")? == (TaskStatus::Complete, None));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_completions_are_all_kept(service: MemoryService) -> eyre::Result<()> {
    let service = Arc::new(service);
    let created = service
        .register_property(
            RegisterPropertyRequest::new()
                .with_attribute(PropertyAttribute::AsbestosSurvey)
                .with_attribute(PropertyAttribute::RotWorks)
                .with_attribute(PropertyAttribute::IsolatorRequired),
        )
        .await?;
    let id = created.id();

    let handles: Vec<_> = ["paperwork_pos", "bgas_check", "asbestos_survey", "isolator"]
        .into_iter()
        .map(|task_key| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .complete_task(CompleteTaskRequest::new(id, task_key))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let stored = service
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("property missing"))?;
    let complete = stored.tasks().iter().filter(|task| task.is_complete()).count();
    ensure!(complete == 4);
    Ok(())
}
