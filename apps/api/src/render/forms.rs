//! Step form pages. Input names are `FieldPath` strings so a POST decodes
//! straight back into draft updates.

use std::fmt::Write;

use crate::draft::path::{
    ExperienceField, FieldPath, ItemField, ProjectField, ScalarField, SocialField,
};
use crate::draft::{ListName, PortfolioDraft};
use crate::render::html::{escape, page, NavLink};
use crate::wizard::form::{FormAction, ACTION_FIELD};
use crate::wizard::{Section, Step};

const BRAND: &str = "Portfolio Builder";

pub fn render_step_form(step: Step, draft: &PortfolioDraft) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(step.title()));
    let _ = writeln!(
        body,
        r#"<form method="post" action="{}">"#,
        escape(step.path())
    );

    for section in step.sections() {
        match section {
            Section::Basics => basics(&mut body, draft),
            Section::Social => social(&mut body, draft),
            Section::Skills => skills(&mut body, draft),
            Section::Experiences => experiences(&mut body, draft),
            Section::Projects => projects(&mut body, draft),
        }
    }

    let _ = writeln!(body, "<div class=\"nav\">");
    if let Some(prev) = step.previous() {
        let _ = writeln!(
            body,
            r#"<a href="{}">Back to {}</a>"#,
            escape(prev.path()),
            escape(prev.title())
        );
    }
    let _ = writeln!(
        body,
        r#"<button type="submit" name="{ACTION_FIELD}" value="{}">{}</button>"#,
        FormAction::Save.value(),
        escape(step.submit_label())
    );
    let _ = writeln!(body, "</div>\n</form>");

    page(
        step.title(),
        BRAND,
        &NavLink {
            href: Step::View.path(),
            label: "View Portfolio",
        },
        &body,
    )
}

fn input(body: &mut String, path: FieldPath, label: &str, value: &str, required: bool) {
    let name = path.to_string();
    let _ = writeln!(
        body,
        r#"<label for="{name}">{}</label><input id="{name}" name="{name}" value="{}"{}>"#,
        escape(label),
        escape(value),
        if required { " required" } else { "" }
    );
}

fn textarea(body: &mut String, path: FieldPath, label: &str, value: &str, required: bool) {
    let name = path.to_string();
    let _ = writeln!(
        body,
        r#"<label for="{name}">{}</label><textarea id="{name}" name="{name}"{}>{}</textarea>"#,
        escape(label),
        if required { " required" } else { "" },
        escape(value)
    );
}

fn add_button(body: &mut String, action: FormAction, label: &str) {
    let _ = writeln!(
        body,
        r#"<button type="submit" name="{ACTION_FIELD}" value="{}" formnovalidate>{}</button>"#,
        action.value(),
        escape(label)
    );
}

fn basics(body: &mut String, d: &PortfolioDraft) {
    body.push_str("<fieldset><legend>About</legend>\n");
    input(body, FieldPath::Scalar(ScalarField::Name), "Name", &d.name, true);
    input(
        body,
        FieldPath::Scalar(ScalarField::ImageUrl),
        "Image URL",
        &d.image_url,
        true,
    );
    textarea(body, FieldPath::Scalar(ScalarField::Bio), "Bio", &d.bio, true);
    body.push_str("</fieldset>\n");
}

fn social(body: &mut String, d: &PortfolioDraft) {
    body.push_str("<fieldset><legend>Social Media</legend>\n");
    for (field, label, value) in [
        (SocialField::Github, "GitHub URL", &d.social.github),
        (SocialField::Linkedin, "LinkedIn URL", &d.social.linkedin),
        (SocialField::Twitter, "Twitter URL", &d.social.twitter),
    ] {
        input(body, FieldPath::Social(field), label, value, false);
    }
    body.push_str("</fieldset>\n");
}

fn skills(body: &mut String, d: &PortfolioDraft) {
    body.push_str("<fieldset><legend>Skills</legend>\n");
    for (index, skill) in d.skills.iter().enumerate() {
        let path = FieldPath::Item {
            index,
            field: ItemField::Skill,
        };
        input(body, path, &format!("Skill {}", index + 1), skill, false);
    }
    add_button(
        body,
        FormAction::Add(ListName::Skills),
        "Add Skill",
    );
    body.push_str("</fieldset>\n");
}

fn experiences(body: &mut String, d: &PortfolioDraft) {
    body.push_str("<fieldset><legend>Experience</legend>\n");
    for (index, exp) in d.experiences.iter().enumerate() {
        let at = |f| FieldPath::Item {
            index,
            field: ItemField::Experience(f),
        };
        body.push_str("<div class=\"entry\">\n");
        input(body, at(ExperienceField::Company), "Company", &exp.company, false);
        input(body, at(ExperienceField::Position), "Position", &exp.position, false);
        textarea(
            body,
            at(ExperienceField::Description),
            "Description",
            &exp.description,
            false,
        );
        body.push_str("</div>\n");
    }
    add_button(
        body,
        FormAction::Add(ListName::Experiences),
        "Add Experience",
    );
    body.push_str("</fieldset>\n");
}

fn projects(body: &mut String, d: &PortfolioDraft) {
    body.push_str("<fieldset><legend>Projects</legend>\n");
    for (index, project) in d.projects.iter().enumerate() {
        let at = |f| FieldPath::Item {
            index,
            field: ItemField::Project(f),
        };
        body.push_str("<div class=\"entry\">\n");
        input(body, at(ProjectField::Name), "Project Name", &project.name, false);
        input(body, at(ProjectField::Link), "Project Link", &project.link, false);
        textarea(
            body,
            at(ProjectField::Description),
            "Description",
            &project.description,
            false,
        );
        body.push_str("</div>\n");
    }
    add_button(
        body,
        FormAction::Add(ListName::Projects),
        "Add Project",
    );
    body.push_str("</fieldset>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_info_step_has_required_inputs_and_no_back_link() {
        let html = render_step_form(Step::BasicInfo, &PortfolioDraft::new());
        assert!(html.contains(r#"name="name" value="" required"#));
        assert!(html.contains(r#"name="imageUrl" value="" required"#));
        assert!(html.contains(r#"<textarea id="bio" name="bio" required>"#));
        assert!(html.contains(r#"name="skills.0""#));
        assert!(html.contains(r#"value="add-skill""#));
        assert!(!html.contains("Back to"));
        assert!(!html.contains("experiences.0.company"));
    }

    #[test]
    fn test_experience_step_renders_one_group_per_element() {
        let mut d = PortfolioDraft::new();
        d.experiences.push(Default::default());
        let html = render_step_form(Step::Experience, &d);
        assert!(html.contains(r#"name="experiences.0.company""#));
        assert!(html.contains(r#"name="experiences.1.description""#));
        assert!(!html.contains("experiences.2."));
        assert!(html.contains(r#"<a href="/form/basic-info">Back to Basic Information</a>"#));
        assert!(html.contains("Save and Continue to Projects"));
        assert!(!html.contains(r#"name="name""#));
    }

    #[test]
    fn test_combined_step_carries_all_sections() {
        let html = render_step_form(Step::Projects, &PortfolioDraft::sample());
        for name in [
            "name",
            "social.twitter",
            "skills.3",
            "experiences.1.position",
            "projects.1.link",
        ] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
        assert!(html.contains(r#"value="John Doe""#));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut d = PortfolioDraft::new();
        d.name = r#""><script>"#.to_string();
        let html = render_step_form(Step::BasicInfo, &d);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
