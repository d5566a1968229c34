use serde::{Deserialize, Serialize};

/// The four contact form fields, exactly as typed (or as restored).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFormData {
    /// Copy with every field trimmed. Validation, drafting and persistence all
    /// operate on the trimmed form.
    pub fn trimmed(&self) -> Self {
        ContactFormData {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            topic: self.topic.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Project,
    Job,
    Feedback,
    Other,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Project, Topic::Job, Topic::Feedback, Topic::Other];

    pub fn parse(value: &str) -> Option<Topic> {
        match value {
            "project" => Some(Topic::Project),
            "job" => Some(Topic::Job),
            "feedback" => Some(Topic::Feedback),
            "other" => Some(Topic::Other),
            _ => None,
        }
    }

    /// The form value submitted for this topic.
    pub fn value(self) -> &'static str {
        match self {
            Topic::Project => "project",
            Topic::Job => "job",
            Topic::Feedback => "feedback",
            Topic::Other => "other",
        }
    }

    /// Text shown in the topic `<select>`.
    pub fn option_label(self) -> &'static str {
        match self {
            Topic::Project => "Project / Collaboration",
            Topic::Job => "Job / Internship",
            Topic::Feedback => "Portfolio feedback",
            Topic::Other => "Something else",
        }
    }
}

/// Label used in the draft subject. Unrecognized values fall back to "Message".
pub fn topic_label(value: &str) -> &'static str {
    match Topic::parse(value) {
        Some(Topic::Project) => "Project / Collaboration",
        Some(Topic::Job) => "Job / Internship",
        Some(Topic::Feedback) => "Portfolio feedback",
        Some(Topic::Other) | None => "Message",
    }
}

/// Generated email, ready to hand to a mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    pub preview: String,
}
