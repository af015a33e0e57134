//! Metrics definitions for the dashboard API.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Gauge,
    Histogram,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub description: &'static str,
}

#[macro_export]
macro_rules! counter {
    ($def:expr) => {
        metrics::counter!($def.name)
    };
}

pub const RELEASES_REQUESTS: MetricDef = MetricDef {
    name: "api.releases.requests",
    metric_type: MetricType::Counter,
    description: "Requests served by the releases endpoint",
};

pub const TASKS_REQUESTS: MetricDef = MetricDef {
    name: "api.tasks.requests",
    metric_type: MetricType::Counter,
    description: "Requests served by the upcoming-tasks endpoint",
};

pub const PROJECT_FETCH_FAILURES: MetricDef = MetricDef {
    name: "upstream.projects.fetch_failures",
    metric_type: MetricType::Counter,
    description: "Workspace project fetches that failed the whole request",
};

pub const TASK_FETCH_FAILURES: MetricDef = MetricDef {
    name: "upstream.tasks.fetch_failures",
    metric_type: MetricType::Counter,
    description: "Per-project task fetches skipped after an upstream error",
};

pub const ALL_METRICS: &[MetricDef] = &[
    RELEASES_REQUESTS,
    TASKS_REQUESTS,
    PROJECT_FETCH_FAILURES,
    TASK_FETCH_FAILURES,
];
