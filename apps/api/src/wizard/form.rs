//! Decoding a posted step form into draft updates.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::draft::aggregator::{append_list_item, grow_list_to, list_len, set_nested_field};
use crate::draft::path::{FieldPath, ListItem, ListName};
use crate::draft::PortfolioDraft;
use crate::errors::AppError;

/// Name of the submit button field that selects what a POST does.
pub const ACTION_FIELD: &str = "action";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Persist and move to the next step.
    Save,
    /// Append a blank element and show the same step again; nothing is saved.
    Add(ListName),
}

impl FormAction {
    pub fn parse(value: &str) -> Option<FormAction> {
        match value {
            "save" => Some(FormAction::Save),
            "add-skill" => Some(FormAction::Add(ListName::Skills)),
            "add-experience" => Some(FormAction::Add(ListName::Experiences)),
            "add-project" => Some(FormAction::Add(ListName::Projects)),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            FormAction::Save => "save",
            FormAction::Add(ListName::Skills) => "add-skill",
            FormAction::Add(ListName::Experiences) => "add-experience",
            FormAction::Add(ListName::Projects) => "add-project",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub action: FormAction,
    pub fields: Vec<(FieldPath, String)>,
}

impl Submission {
    /// Decodes urlencoded pairs. Names that are not draft fields are skipped;
    /// an unrecognised `action` is rejected.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut action = FormAction::Save;
        let mut fields = Vec::with_capacity(pairs.len());

        for (name, value) in pairs {
            if name == ACTION_FIELD {
                action = FormAction::parse(&value)
                    .ok_or_else(|| AppError::BadRequest(format!("unknown form action '{value}'")))?;
                continue;
            }
            match name.parse::<FieldPath>() {
                Ok(path) => fields.push((path, value)),
                Err(e) => debug!("Skipping form field: {e}"),
            }
        }

        Ok(Submission { action, fields })
    }

    /// Applies every posted value to `draft`, then the action's list append.
    ///
    /// Lists are first grown to cover the highest posted index, so rows added
    /// by an earlier unsaved "add" round-trip are kept. A list only grows by
    /// as many rows as the form posted distinct indices for; item paths past
    /// that bound are dropped.
    pub fn apply(&self, mut draft: PortfolioDraft) -> PortfolioDraft {
        let mut posted: HashMap<ListName, HashSet<usize>> = HashMap::new();
        for (path, _) in &self.fields {
            if let FieldPath::Item { index, field } = path {
                posted.entry(field.list()).or_default().insert(*index);
            }
        }

        let mut needed: HashMap<ListName, usize> = HashMap::new();
        for (path, _) in &self.fields {
            let FieldPath::Item { index, field } = path else {
                continue;
            };
            let list = field.list();
            let bound = list_len(&draft, list)
                .saturating_add(posted.get(&list).map_or(0, HashSet::len));
            match index.checked_add(1) {
                Some(end) if *index < bound => {
                    let len = needed.entry(list).or_default();
                    *len = (*len).max(end);
                }
                _ => debug!("Skipping form field {path}: index past {bound} row(s)"),
            }
        }
        for (list, len) in needed {
            draft = grow_list_to(draft, list, len);
        }

        for (path, value) in &self.fields {
            draft = set_nested_field(draft, path, value.clone());
        }

        if let FormAction::Add(list) = self.action {
            draft = append_list_item(draft, ListItem::empty(list));
        }
        draft
    }
}
