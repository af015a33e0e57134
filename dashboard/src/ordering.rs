use crate::fetch::ProjectTask;
use asana::types::Project;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Ascending by due date; undated projects sort after dated ones and keep
/// their incoming order relative to each other (stable sort).
pub fn sort_projects_by_due(projects: &mut [Project]) {
    projects.sort_by(|a, b| compare_due(a.due_on, b.due_on));
}

/// Ascending by due date. The due-soon filter runs first, so every task has
/// a date here; the comparator still totals `None` last rather than assume it.
pub fn sort_tasks_by_due(tasks: &mut [ProjectTask]) {
    tasks.sort_by(|a, b| compare_due(a.task.due_on, b.task.due_on));
}

fn compare_due(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asana::types::Task;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(name: &str, due_on: Option<NaiveDate>) -> Project {
        Project {
            gid: name.to_string(),
            name: name.to_string(),
            due_on,
            archived: false,
            owner: None,
            notes: String::new(),
            created_at: None,
        }
    }

    fn project_task(gid: &str, due_on: Option<NaiveDate>) -> ProjectTask {
        ProjectTask {
            task: Task {
                gid: gid.to_string(),
                name: gid.to_string(),
                due_on,
                completed: false,
                assignee: None,
                created_at: None,
                notes: String::new(),
            },
            project_name: "Midnight Parade EP".to_string(),
            project_gid: "1".to_string(),
            project_due_on: None,
        }
    }

    #[test]
    fn undated_projects_sort_last() {
        let mut projects = vec![
            project("undated", None),
            project("march", Some(date(2024, 3, 1))),
            project("january", Some(date(2024, 1, 1))),
        ];

        sort_projects_by_due(&mut projects);

        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["january", "march", "undated"]);
    }

    #[test]
    fn undated_ties_keep_incoming_order() {
        let mut projects = vec![
            project("first", None),
            project("second", None),
            project("dated", Some(date(2024, 6, 1))),
        ];

        sort_projects_by_due(&mut projects);

        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["dated", "first", "second"]);
    }

    #[test]
    fn tasks_sort_ascending_by_due_date() {
        let mut tasks = vec![
            project_task("later", Some(date(2024, 1, 5))),
            project_task("sooner", Some(date(2024, 1, 2))),
        ];

        sort_tasks_by_due(&mut tasks);

        assert_eq!(tasks[0].task.gid, "sooner");
        assert_eq!(tasks[1].task.gid, "later");
    }
}
