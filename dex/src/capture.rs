//! Capture resolution

use journey_team::TeamMember;
use rand::Rng;
use tracing::{debug, info};

use crate::directory::Directory;
use crate::encounter::DEFAULT_REGION;
use crate::error::DexError;
use crate::text::capitalize;
use crate::types::{CaptureOutcome, EntryDetail, EntryUpdate, IndexEntry};

/// Lowest base chance, however hard the species is to catch
pub const MIN_BASE_CHANCE: f64 = 0.05;

/// Highest base chance, however easy the species is to catch
pub const MAX_BASE_CHANCE: f64 = 0.95;

/// Multiplier applied to legendary and mythical species
pub const LEGENDARY_PENALTY: f64 = 0.35;

/// Region label on an outcome when the player hasn't picked one
const ANY_REGION: &str = "Any";

/// Probability in `[0.0175, 0.95]` that a capture succeeds
pub fn capture_chance(capture_rate: u8, rare: bool) -> f64 {
    let base = (capture_rate as f64 / 255.0).clamp(MIN_BASE_CHANCE, MAX_BASE_CHANCE);
    if rare { base * LEGENDARY_PENALTY } else { base }
}

/// Chance rounded to a whole percentage
pub fn chance_percent(chance: f64) -> u8 {
    (chance * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Everything a capture attempt produces
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureResolution {
    pub outcome: CaptureOutcome,

    /// Merge to apply to the registry
    pub update: EntryUpdate,

    /// Joins the captured roster, only on success
    pub recruit: Option<TeamMember>,
}

/// Try to capture `target` while exploring `region`.
///
/// Looks up the species descriptor, then the detail record. Nothing is
/// drawn from `rng` unless both lookups succeed.
pub(crate) async fn attempt_capture<D, R>(
    directory: &D,
    target: &str,
    region: &str,
    rng: &mut R,
) -> Result<CaptureResolution, DexError>
where
    D: Directory + ?Sized,
    R: Rng + ?Sized,
{
    let target = target.trim();
    if target.is_empty() {
        return Err(DexError::missing_target());
    }

    let name = target.to_lowercase();
    let species = directory.species(&name).await?;
    let detail = directory.detail(&name).await?;

    let chance = capture_chance(species.capture_rate, species.is_rare());
    let draw: f64 = rng.r#gen();
    let success = draw <= chance;
    debug!(pokemon = %name, chance, draw, success, "Capture roll");

    let region = region.trim();
    let entry_region = if region.is_empty() {
        capitalize(DEFAULT_REGION)
    } else {
        capitalize(region)
    };
    let outcome_region = if region.is_empty() {
        ANY_REGION.to_string()
    } else {
        capitalize(region)
    };

    let enrichment = EntryDetail::from_response(&detail, species.is_rare());

    let mut enriched_entry = IndexEntry::new(detail.id, enrichment.name.clone(), entry_region.clone());
    enriched_entry.apply_detail(&enrichment);
    enriched_entry.seen = true;
    enriched_entry.captured = true;

    let display_name = enrichment.name.clone();
    let (update, recruit, message) = if success {
        let recruit = TeamMember::recruit(
            display_name.clone(),
            &enrichment.types,
            enrichment.sprite.clone(),
            enrichment.legendary,
        );
        (
            EntryUpdate::captured(detail.id, display_name.clone(), entry_region),
            Some(recruit),
            format!("You captured {}!", display_name),
        )
    } else {
        (
            EntryUpdate::seen(detail.id, display_name.clone(), entry_region),
            None,
            format!("{} escaped...", display_name),
        )
    };

    info!(pokemon = %display_name, success, chance_percent = chance_percent(chance), "Capture resolved");

    Ok(CaptureResolution {
        outcome: CaptureOutcome {
            success,
            message,
            chance_percent: chance_percent(chance),
            region: outcome_region,
            enriched_entry,
        },
        update: update.with_detail(enrichment),
        recruit,
    })
}
