use serde::{Deserialize, Serialize};

/// One work experience entry as captured by the experience step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

/// The in-progress portfolio record, mirrored wholesale into the
/// `portfolioData` slot on every save.
///
/// Missing fields deserialize to their type's empty value (an absent list is
/// an empty list, not the fresh-draft shape), so under-filled records written
/// by older flows still parse. `socialMedia` is accepted for `social`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, alias = "socialMedia")]
    pub social: Social,
}

impl Default for PortfolioDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioDraft {
    /// A fresh draft: empty scalars and exactly one blank element per list.
    pub fn new() -> Self {
        PortfolioDraft {
            name: String::new(),
            image_url: String::new(),
            bio: String::new(),
            skills: vec![String::new()],
            experiences: vec![Experience::default()],
            projects: vec![Project::default()],
            social: Social::default(),
        }
    }

    /// Pads any empty list with one blank element so every list has an input
    /// row when the draft is mounted into a form.
    pub fn into_editable(mut self) -> Self {
        if self.skills.is_empty() {
            self.skills.push(String::new());
        }
        if self.experiences.is_empty() {
            self.experiences.push(Experience::default());
        }
        if self.projects.is_empty() {
            self.projects.push(Project::default());
        }
        self
    }

    /// The record shown when nothing usable has been saved yet.
    pub fn sample() -> Self {
        PortfolioDraft {
            name: "John Doe".to_string(),
            image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSIEd2zxEc_4IQ1jHyniHLECu15zRjkHTBJzA&s".to_string(),
            bio: "A passionate software developer with experience in full-stack development."
                .to_string(),
            skills: ["JavaScript", "React", "Node.js", "TypeScript"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            experiences: vec![
                Experience {
                    company: "Tech Corp".to_string(),
                    position: "Senior Developer".to_string(),
                    description: "Worked on developing and maintaining web applications."
                        .to_string(),
                },
                Experience {
                    company: "Web Solutions".to_string(),
                    position: "Frontend Developer".to_string(),
                    description:
                        "Focused on building responsive and interactive user interfaces."
                            .to_string(),
                },
            ],
            projects: vec![
                Project {
                    name: "Project Alpha".to_string(),
                    link: "https://github.com/johndoe/project-alpha".to_string(),
                    description: "A web application for managing tasks and projects."
                        .to_string(),
                },
                Project {
                    name: "Project Beta".to_string(),
                    link: "https://github.com/johndoe/project-beta".to_string(),
                    description: "A mobile app for tracking fitness activities.".to_string(),
                },
            ],
            social: Social {
                github: "https://github.com/johndoe".to_string(),
                linkedin: "https://linkedin.com/in/johndoe".to_string(),
                twitter: "https://twitter.com/johndoe".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_draft_has_one_blank_item_per_list() {
        let d = PortfolioDraft::new();
        assert_eq!(d.skills, vec![String::new()]);
        assert_eq!(d.experiences, vec![Experience::default()]);
        assert_eq!(d.projects, vec![Project::default()]);
        assert!(d.name.is_empty() && d.image_url.is_empty() && d.bio.is_empty());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(PortfolioDraft::new()).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
        assert!(json["social"].get("github").is_some());
    }

    #[test]
    fn test_underfilled_shape_parses_with_defaults() {
        let d: PortfolioDraft = serde_json::from_str(
            r#"{"name":"Ada","skills":["Go"],"experiences":[],"projects":[]}"#,
        )
        .unwrap();
        assert_eq!(d.name, "Ada");
        assert_eq!(d.skills, vec!["Go".to_string()]);
        assert!(d.experiences.is_empty());
        assert!(d.projects.is_empty());
        assert_eq!(d.social, Social::default());
        assert!(d.bio.is_empty());
    }

    #[test]
    fn test_missing_lists_default_to_empty_not_fresh() {
        let d: PortfolioDraft = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert!(d.skills.is_empty());
    }

    #[test]
    fn test_social_media_alias_is_accepted() {
        let d: PortfolioDraft = serde_json::from_str(
            r#"{"name":"Ada","socialMedia":{"github":"gh","linkedin":"li","twitter":"tw"}}"#,
        )
        .unwrap();
        assert_eq!(d.social.github, "gh");
        assert_eq!(d.social.twitter, "tw");
    }

    #[test]
    fn test_into_editable_pads_only_empty_lists() {
        let mut d = PortfolioDraft::new();
        d.skills = vec!["Rust".into(), "Go".into()];
        d.experiences.clear();
        d.projects.clear();
        let e = d.into_editable();
        assert_eq!(e.skills.len(), 2);
        assert_eq!(e.experiences, vec![Experience::default()]);
        assert_eq!(e.projects, vec![Project::default()]);
    }

    #[test]
    fn test_sample_shape() {
        let s = PortfolioDraft::sample();
        assert_eq!(s.name, "John Doe");
        assert_eq!(s.skills.len(), 4);
        assert_eq!(s.experiences.len(), 2);
        assert_eq!(s.projects.len(), 2);
    }
}
