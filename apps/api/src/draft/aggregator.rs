//! Pure draft updates. Each function consumes a draft and returns the updated
//! one; nothing here touches storage.

use tracing::debug;

use crate::draft::model::PortfolioDraft;
use crate::draft::path::{
    ExperienceField, FieldPath, ItemField, ListItem, ListName, ProjectField, ScalarField,
    SocialField,
};

pub fn set_field(mut draft: PortfolioDraft, field: ScalarField, value: String) -> PortfolioDraft {
    match field {
        ScalarField::Name => draft.name = value,
        ScalarField::ImageUrl => draft.image_url = value,
        ScalarField::Bio => draft.bio = value,
    }
    draft
}

/// Updates any addressable field: scalars, `social.*`, or one list element.
pub fn set_nested_field(draft: PortfolioDraft, path: &FieldPath, value: String) -> PortfolioDraft {
    match *path {
        FieldPath::Scalar(field) => set_field(draft, field, value),
        FieldPath::Social(field) => set_social_field(draft, field, value),
        FieldPath::Item { index, field } => set_list_item_field(draft, index, field, value),
    }
}

fn set_social_field(mut draft: PortfolioDraft, field: SocialField, value: String) -> PortfolioDraft {
    match field {
        SocialField::Github => draft.social.github = value,
        SocialField::Linkedin => draft.social.linkedin = value,
        SocialField::Twitter => draft.social.twitter = value,
    }
    draft
}

/// Replaces one field of the element at `index` in the list `field` belongs
/// to. Other elements are left as they were. An index past the end leaves
/// the draft unchanged.
pub fn set_list_item_field(
    mut draft: PortfolioDraft,
    index: usize,
    field: ItemField,
    value: String,
) -> PortfolioDraft {
    let len = list_len(&draft, field.list());
    if index >= len {
        debug!(
            "Ignoring update to {:?}[{index}]: list has {len} element(s)",
            field.list()
        );
        return draft;
    }

    match field {
        ItemField::Skill => draft.skills[index] = value,
        ItemField::Experience(f) => {
            let item = &mut draft.experiences[index];
            match f {
                ExperienceField::Company => item.company = value,
                ExperienceField::Position => item.position = value,
                ExperienceField::Description => item.description = value,
            }
        }
        ItemField::Project(f) => {
            let item = &mut draft.projects[index];
            match f {
                ProjectField::Name => item.name = value,
                ProjectField::Link => item.link = value,
                ProjectField::Description => item.description = value,
            }
        }
    }
    draft
}

/// Appends `item` to the end of the list it belongs to. There is no remove.
pub fn append_list_item(mut draft: PortfolioDraft, item: ListItem) -> PortfolioDraft {
    match item {
        ListItem::Skill(s) => draft.skills.push(s),
        ListItem::Experience(e) => draft.experiences.push(e),
        ListItem::Project(p) => draft.projects.push(p),
    }
    draft
}

pub fn list_len(draft: &PortfolioDraft, list: ListName) -> usize {
    match list {
        ListName::Skills => draft.skills.len(),
        ListName::Experiences => draft.experiences.len(),
        ListName::Projects => draft.projects.len(),
    }
}

/// Appends blank elements until `list` has at least `len` elements.
pub fn grow_list_to(mut draft: PortfolioDraft, list: ListName, len: usize) -> PortfolioDraft {
    while list_len(&draft, list) < len {
        draft = append_list_item(draft, ListItem::empty(list));
    }
    draft
}
