//! Addresses of individual draft fields, as carried by HTML form input names.
//!
//! `name`, `imageUrl`, `bio`, `social.github`, `skills.0`,
//! `experiences.1.company`, `projects.0.link`, ...

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::draft::model::{Experience, Project};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("unknown field path '{0}'")]
    Unknown(String),

    #[error("invalid list index in '{0}'")]
    BadIndex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Name,
    ImageUrl,
    Bio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialField {
    Github,
    Linkedin,
    Twitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListName {
    Skills,
    Experiences,
    Projects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Link,
    Description,
}

/// A field inside one list element. Skills are plain strings, so the element
/// itself is the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Skill,
    Experience(ExperienceField),
    Project(ProjectField),
}

impl ItemField {
    pub fn list(self) -> ListName {
        match self {
            ItemField::Skill => ListName::Skills,
            ItemField::Experience(_) => ListName::Experiences,
            ItemField::Project(_) => ListName::Projects,
        }
    }
}

/// An element to append to one of the draft's lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Skill(String),
    Experience(Experience),
    Project(Project),
}

impl ListItem {
    /// The blank element the form's "add" buttons append.
    pub fn empty(list: ListName) -> Self {
        match list {
            ListName::Skills => ListItem::Skill(String::new()),
            ListName::Experiences => ListItem::Experience(Experience::default()),
            ListName::Projects => ListItem::Project(Project::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Scalar(ScalarField),
    Social(SocialField),
    Item { index: usize, field: ItemField },
}

impl FieldPath {
    pub fn parse(raw: &str) -> Result<Self, FieldPathError> {
        let unknown = || FieldPathError::Unknown(raw.to_string());
        let parts: Vec<&str> = raw.split('.').collect();

        match parts.as_slice() {
            ["name"] => Ok(FieldPath::Scalar(ScalarField::Name)),
            ["imageUrl"] => Ok(FieldPath::Scalar(ScalarField::ImageUrl)),
            ["bio"] => Ok(FieldPath::Scalar(ScalarField::Bio)),
            ["social", sub] | ["socialMedia", sub] => {
                let field = match *sub {
                    "github" => SocialField::Github,
                    "linkedin" => SocialField::Linkedin,
                    "twitter" => SocialField::Twitter,
                    _ => return Err(unknown()),
                };
                Ok(FieldPath::Social(field))
            }
            ["skills", idx] => Ok(FieldPath::Item {
                index: parse_index(raw, idx)?,
                field: ItemField::Skill,
            }),
            ["experiences", idx, sub] => {
                let field = match *sub {
                    "company" => ExperienceField::Company,
                    "position" => ExperienceField::Position,
                    "description" => ExperienceField::Description,
                    _ => return Err(unknown()),
                };
                Ok(FieldPath::Item {
                    index: parse_index(raw, idx)?,
                    field: ItemField::Experience(field),
                })
            }
            ["projects", idx, sub] => {
                let field = match *sub {
                    "name" => ProjectField::Name,
                    "link" => ProjectField::Link,
                    "description" => ProjectField::Description,
                    _ => return Err(unknown()),
                };
                Ok(FieldPath::Item {
                    index: parse_index(raw, idx)?,
                    field: ItemField::Project(field),
                })
            }
            _ => Err(unknown()),
        }
    }
}

fn parse_index(raw: &str, idx: &str) -> Result<usize, FieldPathError> {
    idx.parse::<usize>()
        .map_err(|_| FieldPathError::BadIndex(raw.to_string()))
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Scalar(ScalarField::Name) => write!(f, "name"),
            FieldPath::Scalar(ScalarField::ImageUrl) => write!(f, "imageUrl"),
            FieldPath::Scalar(ScalarField::Bio) => write!(f, "bio"),
            FieldPath::Social(SocialField::Github) => write!(f, "social.github"),
            FieldPath::Social(SocialField::Linkedin) => write!(f, "social.linkedin"),
            FieldPath::Social(SocialField::Twitter) => write!(f, "social.twitter"),
            FieldPath::Item { index, field } => match field {
                ItemField::Skill => write!(f, "skills.{index}"),
                ItemField::Experience(e) => {
                    let sub = match e {
                        ExperienceField::Company => "company",
                        ExperienceField::Position => "position",
                        ExperienceField::Description => "description",
                    };
                    write!(f, "experiences.{index}.{sub}")
                }
                ItemField::Project(p) => {
                    let sub = match p {
                        ProjectField::Name => "name",
                        ProjectField::Link => "link",
                        ProjectField::Description => "description",
                    };
                    write!(f, "projects.{index}.{sub}")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars_and_social() {
        assert_eq!(
            FieldPath::parse("imageUrl").unwrap(),
            FieldPath::Scalar(ScalarField::ImageUrl)
        );
        assert_eq!(
            FieldPath::parse("social.linkedin").unwrap(),
            FieldPath::Social(SocialField::Linkedin)
        );
        assert_eq!(
            FieldPath::parse("socialMedia.twitter").unwrap(),
            FieldPath::Social(SocialField::Twitter)
        );
    }

    #[test]
    fn test_parse_list_items() {
        assert_eq!(
            FieldPath::parse("skills.3").unwrap(),
            FieldPath::Item {
                index: 3,
                field: ItemField::Skill
            }
        );
        assert_eq!(
            FieldPath::parse("experiences.1.position").unwrap(),
            FieldPath::Item {
                index: 1,
                field: ItemField::Experience(ExperienceField::Position)
            }
        );
        assert_eq!(
            FieldPath::parse("projects.0.link").unwrap(),
            FieldPath::Item {
                index: 0,
                field: ItemField::Project(ProjectField::Link)
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_bad_index() {
        assert_eq!(
            FieldPath::parse("action"),
            Err(FieldPathError::Unknown("action".to_string()))
        );
        assert_eq!(
            FieldPath::parse("experiences.0.salary"),
            Err(FieldPathError::Unknown("experiences.0.salary".to_string()))
        );
        assert_eq!(
            FieldPath::parse("skills.-1"),
            Err(FieldPathError::BadIndex("skills.-1".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse_input() {
        for raw in [
            "name",
            "bio",
            "social.github",
            "skills.0",
            "experiences.2.description",
            "projects.4.name",
        ] {
            assert_eq!(FieldPath::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_item_field_names_its_list() {
        assert_eq!(ItemField::Skill.list(), ListName::Skills);
        assert_eq!(
            ListItem::empty(ListName::Projects),
            ListItem::Project(Project::default())
        );
    }
}
