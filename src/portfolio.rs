//! Portfolio content shown on the page
//!
//! Content comes from a JSON file when one is configured or present in the
//! config directory; otherwise the built-in sample is used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// In-page anchor name
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Skills => "#skills",
            Self::Projects => "#projects",
            Self::Contact => "#contact",
        }
    }

    /// Section for a 1-based navbar shortcut digit
    pub fn from_shortcut(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Target fill in percent; values above 100 are clamped
    pub progress: u32,
}

impl Skill {
    pub fn percent(&self) -> u16 {
        self.progress.min(100) as u16
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Everything the page renders apart from the contact form itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Portfolio {
    /// Load content from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read portfolio file {}", path.display()))?;
        let portfolio: Portfolio = serde_json::from_str(&content)
            .with_context(|| format!("invalid portfolio file {}", path.display()))?;
        Ok(portfolio)
    }

    /// Built-in sample content
    pub fn sample() -> Self {
        let skill = |name: &str, progress: u32| Skill {
            name: name.to_string(),
            progress,
        };
        Self {
            name: "Alex Morgan".to_string(),
            title: "Full-Stack Developer".to_string(),
            tagline: "I build fast, reliable software and enjoy making it pleasant to use."
                .to_string(),
            about: vec![
                "I am a developer with a background in systems programming and web \
                 services. I like small tools that do one thing well."
                    .to_string(),
                "When I am not writing code I am usually hiking, reading, or tinkering \
                 with keyboards."
                    .to_string(),
            ],
            skills: vec![
                SkillCategory {
                    name: "Languages".to_string(),
                    skills: vec![
                        skill("Rust", 90),
                        skill("TypeScript", 80),
                        skill("Python", 75),
                    ],
                },
                SkillCategory {
                    name: "Frameworks".to_string(),
                    skills: vec![skill("React", 85), skill("Axum", 70), skill("Django", 60)],
                },
                SkillCategory {
                    name: "Tools".to_string(),
                    skills: vec![skill("Git", 95), skill("Docker", 80), skill("PostgreSQL", 70)],
                },
            ],
            projects: vec![
                Project {
                    name: "Trailhead".to_string(),
                    description: "Offline-first hiking log with GPX import and elevation charts."
                        .to_string(),
                    tech: vec!["Rust".to_string(), "SQLite".to_string()],
                },
                Project {
                    name: "Pantry".to_string(),
                    description: "Recipe planner that builds a shopping list from the week's meals."
                        .to_string(),
                    tech: vec!["TypeScript".to_string(), "React".to_string()],
                },
                Project {
                    name: "Keyforge".to_string(),
                    description: "Firmware configurator for split mechanical keyboards."
                        .to_string(),
                    tech: vec!["Rust".to_string(), "USB HID".to_string()],
                },
            ],
            contact: ContactInfo {
                email: Some("alex@example.com".to_string()),
                location: Some("Lisbon, Portugal".to_string()),
            },
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    mod section {
        use super::*;

        #[test]
        fn test_all_is_in_page_order() {
            let mut sorted = Section::ALL;
            sorted.sort();
            assert_eq!(sorted, Section::ALL);
        }

        #[test]
        fn test_shortcuts_are_one_based() {
            assert_eq!(Section::from_shortcut('1'), Some(Section::Home));
            assert_eq!(Section::from_shortcut('5'), Some(Section::Contact));
            assert_eq!(Section::from_shortcut('0'), None);
            assert_eq!(Section::from_shortcut('6'), None);
            assert_eq!(Section::from_shortcut('x'), None);
        }

        #[test]
        fn test_anchors_start_with_hash() {
            for section in Section::ALL {
                assert!(section.anchor().starts_with('#'));
            }
        }
    }

    mod content {
        use super::*;

        #[test]
        fn test_sample_has_every_section_populated() {
            let portfolio = Portfolio::sample();
            assert!(!portfolio.about.is_empty());
            assert!(!portfolio.skills.is_empty());
            assert!(!portfolio.projects.is_empty());
            assert!(portfolio.contact.email.is_some());
        }

        #[test]
        fn test_percent_is_clamped() {
            let skill = Skill {
                name: "Overconfidence".to_string(),
                progress: 250,
            };
            assert_eq!(skill.percent(), 100);
        }

        #[test]
        fn test_large_progress_parses_and_clamps() {
            let json = r#"{"name": "Rust", "progress": 1000}"#;
            let skill: Skill = serde_json::from_str(json).unwrap();
            assert_eq!(skill.progress, 1000);
            assert_eq!(skill.percent(), 100);
        }

        #[test]
        fn test_minimal_json_uses_defaults() {
            let json = r#"{"name": "Sam", "title": "Designer"}"#;
            let parsed: Portfolio = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.name, "Sam");
            assert!(parsed.skills.is_empty());
            assert_eq!(parsed.contact, ContactInfo::default());
        }

        #[test]
        fn test_load_from_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            let json = serde_json::to_string(&Portfolio::sample()).unwrap();
            file.write_all(json.as_bytes()).unwrap();

            let loaded = Portfolio::load_from(file.path()).unwrap();
            assert_eq!(loaded, Portfolio::sample());
        }

        #[test]
        fn test_load_from_invalid_file_reports_path() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(b"{ not json").unwrap();

            let err = Portfolio::load_from(file.path()).unwrap_err();
            assert!(err.to_string().contains("invalid portfolio file"));
        }

        #[test]
        fn test_load_from_missing_file_fails() {
            let dir = tempfile::tempdir().unwrap();
            assert!(Portfolio::load_from(&dir.path().join("missing.json")).is_err());
        }
    }
}
