use crate::draft::ListName;

/// One page of the flow. `View` is the read-only portfolio, not a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BasicInfo,
    Experience,
    Projects,
    View,
}

/// A group of inputs a form step renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basics,
    Social,
    Skills,
    Experiences,
    Projects,
}

/// Routes that only forward elsewhere, `(from, to)`.
pub const ROUTE_ALIASES: &[(&str, &str)] =
    &[("/", "/portfolio"), ("/form", "/form/experience")];

pub const FORM_STEPS: [Step; 3] = [Step::BasicInfo, Step::Experience, Step::Projects];

impl Step {
    /// Looks up a form step by the last segment of its route.
    pub fn from_slug(slug: &str) -> Option<Step> {
        FORM_STEPS.into_iter().find(|s| s.slug() == Some(slug))
    }

    pub fn slug(self) -> Option<&'static str> {
        match self {
            Step::BasicInfo => Some("basic-info"),
            Step::Experience => Some("experience"),
            Step::Projects => Some("projects"),
            Step::View => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Step::BasicInfo => "/form/basic-info",
            Step::Experience => "/form/experience",
            Step::Projects => "/form/projects",
            Step::View => "/portfolio",
        }
    }

    pub fn next(self) -> Step {
        match self {
            Step::BasicInfo => Step::Experience,
            Step::Experience => Step::Projects,
            Step::Projects | Step::View => Step::View,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::BasicInfo => None,
            Step::Experience => Some(Step::BasicInfo),
            Step::Projects => Some(Step::Experience),
            Step::View => Some(Step::Projects),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Information",
            Step::Experience => "Experience",
            Step::Projects => "Projects",
            Step::View => "Portfolio",
        }
    }

    /// Label of the submit button that saves and moves on.
    pub fn submit_label(self) -> &'static str {
        match self.next() {
            Step::Experience => "Save and Continue to Experience",
            Step::Projects => "Save and Continue to Projects",
            _ => "Save and View Portfolio",
        }
    }

    /// The projects step is the combined form: it carries every section.
    pub fn sections(self) -> &'static [Section] {
        match self {
            Step::BasicInfo => &[Section::Basics, Section::Social, Section::Skills],
            Step::Experience => &[Section::Experiences],
            Step::Projects => &[
                Section::Basics,
                Section::Social,
                Section::Skills,
                Section::Experiences,
                Section::Projects,
            ],
            Step::View => &[],
        }
    }
}

impl Step {
    pub fn has_list(self, list: ListName) -> bool {
        self.sections().iter().any(|s| s.list() == Some(list))
    }
}

impl Section {
    /// The list this section's "add" button grows, if any.
    pub fn list(self) -> Option<ListName> {
        match self {
            Section::Skills => Some(ListName::Skills),
            Section::Experiences => Some(ListName::Experiences),
            Section::Projects => Some(ListName::Projects),
            Section::Basics | Section::Social => None,
        }
    }
}

/// Target of an alias route, if `path` is one.
pub fn resolve_alias(path: &str) -> Option<&'static str> {
    ROUTE_ALIASES
        .iter()
        .find(|(from, _)| *from == path)
        .map(|(_, to)| *to)
}
