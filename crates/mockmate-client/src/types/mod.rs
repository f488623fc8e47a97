//! View-model records exchanged with the backend.
//!
//! These are transient: the backend owns every figure and relation, the
//! client only carries them. Unknown fields are ignored and most fields are
//! optional so that backend additions do not break decoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod behavioral;
mod coding;
mod interview;
mod question;
mod user;

pub use behavioral::{BehavioralResponse, ResponseFilter, SubmitResponseRequest};
pub use coding::{CodingSubmission, SubmissionFilter, SubmitCodeRequest, TestCodeRequest};
pub use interview::{CreateInterviewRequest, Interview};
pub use question::{Question, QuestionFilter, QuestionOption, RandomQuestionFilter, TestCase};
pub use user::{
    AdminUserUpdate, AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest, UserFilter,
    UserProfile,
};

/// Declares a closed wire enum with SCREAMING_SNAKE_CASE names, plus
/// `as_str` and `Display` for use in query strings.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// Case-insensitive; `-` is accepted for `_`.
        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wire = s.trim().to_ascii_uppercase().replace('-', "_");
                match wire.as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($name),
                        s,
                        [$($wire),+].join(", ")
                    )),
                }
            }
        }
    };
}

wire_enum!(
    /// Account role.
    Role {
        Student => "STUDENT",
        Mentor => "MENTOR",
        Admin => "ADMIN",
    }
);

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

wire_enum!(
    InterviewType {
        Technical => "TECHNICAL",
        Behavioral => "BEHAVIORAL",
        Coding => "CODING",
        Mixed => "MIXED",
    }
);

wire_enum!(
    /// Interview session lifecycle state.
    SessionStatus {
        Scheduled => "SCHEDULED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
        Expired => "EXPIRED",
    }
);

wire_enum!(
    QuestionType {
        Mcq => "MCQ",
        Coding => "CODING",
        Behavioral => "BEHAVIORAL",
        Technical => "TECHNICAL",
    }
);

wire_enum!(
    Difficulty {
        Easy => "EASY",
        Medium => "MEDIUM",
        Hard => "HARD",
    }
);

wire_enum!(
    ProgrammingLanguage {
        Java => "JAVA",
        Python => "PYTHON",
        Cpp => "CPP",
        JavaScript => "JAVASCRIPT",
    }
);

wire_enum!(
    /// Evaluation state of a coding submission.
    SubmissionStatus {
        Pending => "PENDING",
        Compiling => "COMPILING",
        Running => "RUNNING",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Timeout => "TIMEOUT",
    }
);

/// Question category.
///
/// Open-ended: the backend may grow categories faster than the client, so
/// unknown names round-trip through [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Java,
    Python,
    Cpp,
    DataStructures,
    Algorithms,
    SystemDesign,
    Database,
    Networking,
    Behavioral,
    Leadership,
    ProblemSolving,
    Other(String),
}

impl Category {
    const KNOWN: [Category; 11] = [
        Category::Java,
        Category::Python,
        Category::Cpp,
        Category::DataStructures,
        Category::Algorithms,
        Category::SystemDesign,
        Category::Database,
        Category::Networking,
        Category::Behavioral,
        Category::Leadership,
        Category::ProblemSolving,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Java => "JAVA",
            Category::Python => "PYTHON",
            Category::Cpp => "CPP",
            Category::DataStructures => "DATA_STRUCTURES",
            Category::Algorithms => "ALGORITHMS",
            Category::SystemDesign => "SYSTEM_DESIGN",
            Category::Database => "DATABASE",
            Category::Networking => "NETWORKING",
            Category::Behavioral => "BEHAVIORAL",
            Category::Leadership => "LEADERSHIP",
            Category::ProblemSolving => "PROBLEM_SOLVING",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::KNOWN
            .into_iter()
            .find(|known| known.as_str() == name)
            .unwrap_or(Category::Other(name))
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
