//! Task types a private step can run.
//!
//! The backend owns the vocabulary, so unknown values are carried through
//! verbatim in `TaskType::Other` instead of being rejected.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskType {
    Summarize,
    ExtractCharacters,
    ExtractEvents,
    ExtractRelationships,
    ExtractConflicts,
    AnalyzeWorldview,
    Translate,
    Rewrite,
    Custom,
    Other(String),
}

impl TaskType {
    /// Every task type the editor offers in its picker.
    pub fn known() -> [TaskType; 9] {
        [
            Self::Summarize,
            Self::ExtractCharacters,
            Self::ExtractEvents,
            Self::ExtractRelationships,
            Self::ExtractConflicts,
            Self::AnalyzeWorldview,
            Self::Translate,
            Self::Rewrite,
            Self::Custom,
        ]
    }

    /// Wire value, e.g. `"extract_characters"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Summarize => "summarize",
            Self::ExtractCharacters => "extract_characters",
            Self::ExtractEvents => "extract_events",
            Self::ExtractRelationships => "extract_relationships",
            Self::ExtractConflicts => "extract_conflicts",
            Self::AnalyzeWorldview => "analyze_worldview",
            Self::Translate => "translate",
            Self::Rewrite => "rewrite",
            Self::Custom => "custom",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label shown in the step list.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Summarize => "Summarize Chapter",
            Self::ExtractCharacters => "Extract Characters",
            Self::ExtractEvents => "Extract Events",
            Self::ExtractRelationships => "Extract Relationships",
            Self::ExtractConflicts => "Extract Conflicts",
            Self::AnalyzeWorldview => "Analyze Worldview",
            Self::Translate => "Translate",
            Self::Rewrite => "Rewrite",
            Self::Custom => "Custom Instruction",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for TaskType {
    fn from(s: &str) -> Self {
        match s {
            "summarize" => Self::Summarize,
            "extract_characters" => Self::ExtractCharacters,
            "extract_events" => Self::ExtractEvents,
            "extract_relationships" => Self::ExtractRelationships,
            "extract_conflicts" => Self::ExtractConflicts,
            "analyze_worldview" => Self::AnalyzeWorldview,
            "translate" => Self::Translate,
            "rewrite" => Self::Rewrite,
            "custom" => Self::Custom,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TaskType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TaskType> for String {
    fn from(task_type: TaskType) -> Self {
        task_type.as_str().to_string()
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_parse_back_to_themselves() {
        for task_type in TaskType::known() {
            assert_eq!(TaskType::from(task_type.as_str()), task_type);
        }
    }

    #[test]
    fn unknown_type_is_preserved() {
        let task_type = TaskType::from("score_prose");
        assert_eq!(task_type, TaskType::Other("score_prose".to_string()));
        assert_eq!(task_type.as_str(), "score_prose");
        assert_eq!(task_type.display_name(), "score_prose");
    }

    #[test]
    fn display_names_are_human_readable() {
        assert_eq!(TaskType::Summarize.display_name(), "Summarize Chapter");
        assert_eq!(
            TaskType::ExtractRelationships.display_name(),
            "Extract Relationships"
        );
    }
}
