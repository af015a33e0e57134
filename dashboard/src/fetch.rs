use crate::config::BatchConfig;
use crate::counter;
use crate::metrics_defs::TASK_FETCH_FAILURES;
use asana::types::{Project, Task};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::{Duration, sleep};

/// A task annotated with the release project it belongs to.
#[derive(Clone, Debug, Serialize)]
pub struct ProjectTask {
    #[serde(flatten)]
    pub task: Task,
    pub project_name: String,
    pub project_gid: String,
    pub project_due_on: Option<NaiveDate>,
}

/// Fetches tasks for every project, `batch.size` fetches at a time with a
/// `batch.pause_ms` pause after each window except the last.
///
/// A failed fetch contributes zero tasks for that project and never fails
/// the overall call; the failure is logged and counted. Results concatenate
/// in window order, completion order within a window.
pub async fn release_tasks(
    client: Arc<asana::Client>,
    projects: Vec<Project>,
    batch: &BatchConfig,
) -> Vec<ProjectTask> {
    let window_count = projects.len().div_ceil(batch.size.max(1));
    let mut collected = Vec::new();

    for (index, window) in projects.chunks(batch.size.max(1)).enumerate() {
        let mut join_set = JoinSet::new();

        for project in window {
            let client = client.clone();
            let project = project.clone();

            join_set.spawn(async move {
                match client.project_tasks(&project.gid).await {
                    Ok(tasks) => annotate(tasks, &project),
                    Err(e) => {
                        tracing::error!(
                            project = %project.gid,
                            error = %e,
                            "task fetch failed, skipping project"
                        );
                        counter!(TASK_FETCH_FAILURES).increment(1);
                        Vec::new()
                    }
                }
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(tasks) => collected.extend(tasks),
                Err(e) => tracing::error!("Task panicked: {}", e),
            }
        }

        if index + 1 < window_count {
            sleep(Duration::from_millis(batch.pause_ms)).await;
        }
    }

    collected
}

fn annotate(tasks: Vec<Task>, project: &Project) -> Vec<ProjectTask> {
    tasks
        .into_iter()
        .map(|task| ProjectTask {
            task,
            project_name: project.name.clone(),
            project_gid: project.gid.clone(),
            project_due_on: project.due_on,
        })
        .collect()
}
