//! The read-only portfolio page.

use std::fmt::Write;

use serde::Serialize;

use crate::draft::PortfolioDraft;
use crate::render::html::{escape, page, NavLink};
use crate::storage::legacy::{load_draft, DraftSource};
use crate::storage::SlotRepository;

/// The draft the portfolio page shows and whether it is the built-in sample.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPortfolio {
    pub draft: PortfolioDraft,
    pub is_sample: bool,
}

/// Stored draft if anything usable is stored, otherwise the sample record.
pub async fn resolve_portfolio(repo: &SlotRepository) -> ResolvedPortfolio {
    let loaded = load_draft(repo).await;
    match loaded.source {
        DraftSource::Empty => ResolvedPortfolio {
            draft: PortfolioDraft::sample(),
            is_sample: true,
        },
        DraftSource::Unified | DraftSource::Legacy => ResolvedPortfolio {
            draft: loaded.draft,
            is_sample: false,
        },
    }
}

pub fn render_portfolio(d: &PortfolioDraft) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"profile\">\n");
    let _ = writeln!(
        body,
        r#"<img class="avatar" src="{}" alt="{}">"#,
        escape(&d.image_url),
        escape(&d.name)
    );
    let _ = writeln!(body, "<h1>{}</h1>", escape(&d.name));
    let _ = writeln!(body, "<p class=\"bio\">{}</p>", escape(&d.bio));

    body.push_str("<nav class=\"social\">\n");
    for (label, url) in [
        ("GitHub", &d.social.github),
        ("LinkedIn", &d.social.linkedin),
        ("Twitter", &d.social.twitter),
    ] {
        if url.is_empty() {
            continue;
        }
        let _ = writeln!(
            body,
            r#"<a href="{}" rel="noopener noreferrer">{label}</a>"#,
            escape(url)
        );
    }
    body.push_str("</nav>\n");

    body.push_str("<div class=\"skills\">\n");
    for skill in &d.skills {
        let _ = writeln!(body, "<span class=\"badge\">{}</span>", escape(skill));
    }
    body.push_str("</div>\n</section>\n");

    body.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
    for exp in &d.experiences {
        let _ = writeln!(
            body,
            "<div class=\"entry\"><h3>{}</h3><p class=\"company\">{}</p><p>{}</p></div>",
            escape(&exp.position),
            escape(&exp.company),
            escape(&exp.description)
        );
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"projects\">\n<h2>Projects</h2>\n");
    for project in &d.projects {
        let _ = writeln!(
            body,
            r#"<div class="entry"><h3>{} <a href="{}" target="_blank" rel="noopener noreferrer">link</a></h3><p>{}</p></div>"#,
            escape(&project.name),
            escape(&project.link),
            escape(&project.description)
        );
    }
    body.push_str("</section>\n");

    page(
        &d.name,
        &d.name,
        &NavLink {
            href: "/form",
            label: "Edit Portfolio",
        },
        &body,
    )
}
