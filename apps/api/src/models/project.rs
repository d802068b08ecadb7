use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(alias = "On Track")]
    OnTrack,
    #[serde(alias = "At Risk")]
    AtRisk,
    #[serde(alias = "Off Track")]
    OffTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(alias = "To Do")]
    ToDo,
    #[serde(alias = "In Progress")]
    InProgress,
    Done,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Requirements,
    Architecture,
    #[serde(alias = "Meeting Notes")]
    MeetingNotes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    #[serde(alias = "Pending Analysis")]
    PendingAnalysis,
    Analyzing,
    Analyzed,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub assignee_id: String,
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub upload_date: NaiveDate,
    pub status: DocumentStatus,
}

/// A project as listed on the dashboard. Members and assignees are person ids
/// resolved against the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// 0 – 100
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub team_ids: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub documents: Vec<ProjectDocument>,
}

impl Project {
    /// Every person id this project refers to, members first, then assignees.
    pub fn referenced_person_ids(&self) -> impl Iterator<Item = &str> {
        self.team_ids
            .iter()
            .map(String::as_str)
            .chain(self.tasks.iter().map(|t| t.assignee_id.as_str()))
    }
}
