//! Supported submission languages

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A language the judge service can compile or interpret
///
/// Each language has a lowercase key (as stored with problem templates) and a
/// display name (as expected by the judge service). Both forms parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    /// Preselected when none was chosen
    #[default]
    JavaScript,
    TypeScript,
    Python3,
    Python,
    Cpp,
    C,
    Java,
    CSharp,
    Go,
    Kotlin,
    Swift,
    Rust,
    Ruby,
    Php,
    Dart,
    Scala,
    Elixir,
    Erlang,
    Racket,
}

/// Error returned when a language string matches no supported language
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 19] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python3,
        Language::Python,
        Language::Cpp,
        Language::C,
        Language::Java,
        Language::CSharp,
        Language::Go,
        Language::Kotlin,
        Language::Swift,
        Language::Rust,
        Language::Ruby,
        Language::Php,
        Language::Dart,
        Language::Scala,
        Language::Elixir,
        Language::Erlang,
        Language::Racket,
    ];

    /// Lowercase storage key (e.g. `python3`, `cpp`)
    pub fn key(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python3 => "python3",
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Kotlin => "kotlin",
            Language::Swift => "swift",
            Language::Rust => "rust",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Dart => "dart",
            Language::Scala => "scala",
            Language::Elixir => "elixir",
            Language::Erlang => "erlang",
            Language::Racket => "racket",
        }
    }

    /// Display name sent to the judge service (e.g. `Python3`, `C++`)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python3 => "Python3",
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Kotlin => "Kotlin",
            Language::Swift => "Swift",
            Language::Rust => "Rust",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Dart => "Dart",
            Language::Scala => "Scala",
            Language::Elixir => "Elixir",
            Language::Erlang => "Erlang",
            Language::Racket => "Racket",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.key() == wanted || lang.display_name().to_lowercase() == wanted)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.display_name().to_string()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
