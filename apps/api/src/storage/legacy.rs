//! Reading and writing whole drafts across the canonical slot and the two
//! slots written by the older step-by-step flow.
//!
//! `portfolioData` is the only slot ever treated as authoritative for
//! writes. The step slots are read when the canonical one is missing, and
//! written only when mirroring is enabled.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{SlotKey, SlotRepository, StorageError};
use crate::draft::{Experience, PortfolioDraft, Social};

/// Shape of the `portfolioBasicInfo` slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBasicInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, alias = "socialMedia")]
    pub social: Social,
}

impl From<&PortfolioDraft> for LegacyBasicInfo {
    fn from(d: &PortfolioDraft) -> Self {
        LegacyBasicInfo {
            name: d.name.clone(),
            image_url: d.image_url.clone(),
            bio: d.bio.clone(),
            skills: d.skills.clone(),
            social: d.social.clone(),
        }
    }
}

/// Where a loaded draft came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftSource {
    Unified,
    Legacy,
    Empty,
}

#[derive(Debug, Clone)]
pub struct LoadedDraft {
    pub draft: PortfolioDraft,
    pub source: DraftSource,
}

/// Loads the draft the forms should start from.
///
/// 1. `portfolioData`, if present and parseable.
/// 2. Otherwise whatever of `portfolioBasicInfo` / `portfolioExperiences`
///    parses, laid over a fresh draft.
/// 3. Otherwise a fresh draft.
pub async fn load_draft(repo: &SlotRepository) -> LoadedDraft {
    if let Some(draft) = repo.load::<PortfolioDraft>(SlotKey::PortfolioData).await {
        return LoadedDraft {
            draft,
            source: DraftSource::Unified,
        };
    }

    let basic = repo
        .load::<LegacyBasicInfo>(SlotKey::PortfolioBasicInfo)
        .await;
    let experiences = repo
        .load::<Vec<Experience>>(SlotKey::PortfolioExperiences)
        .await;

    if basic.is_none() && experiences.is_none() {
        debug!("No stored draft found; starting fresh");
        return LoadedDraft {
            draft: PortfolioDraft::new(),
            source: DraftSource::Empty,
        };
    }

    info!(
        "Composing draft from step slots (basic info: {}, experiences: {})",
        basic.is_some(),
        experiences.is_some()
    );
    LoadedDraft {
        draft: compose(basic, experiences),
        source: DraftSource::Legacy,
    }
}

fn compose(basic: Option<LegacyBasicInfo>, experiences: Option<Vec<Experience>>) -> PortfolioDraft {
    let mut draft = PortfolioDraft::new();
    if let Some(b) = basic {
        draft.name = b.name;
        draft.image_url = b.image_url;
        draft.bio = b.bio;
        draft.skills = b.skills;
        draft.social = b.social;
    }
    if let Some(e) = experiences {
        draft.experiences = e;
    }
    draft
}

/// Overwrites `portfolioData` with the whole draft, and the two step slots
/// with their slices when `mirror_legacy` is set.
pub async fn save_draft(
    repo: &SlotRepository,
    draft: &PortfolioDraft,
    mirror_legacy: bool,
) -> Result<(), StorageError> {
    repo.save(SlotKey::PortfolioData, draft).await?;

    if mirror_legacy {
        repo.save(SlotKey::PortfolioBasicInfo, &LegacyBasicInfo::from(draft))
            .await?;
        repo.save(SlotKey::PortfolioExperiences, &draft.experiences)
            .await?;
    }
    Ok(())
}
