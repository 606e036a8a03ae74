//! Simulator subcommands.

mod battle;
mod squad;
mod stages;

pub use battle::Battle;
pub use squad::Squad;
pub use stages::Stages;

use anyhow::{Context, Result};
use squad_content::GameContent;
use squad_core::{Character, CharacterStats, resolve_stats};

/// The fielded characters with their resolved stat blocks, in squad order.
fn resolved_squad(content: &GameContent) -> Result<Vec<(Character, CharacterStats)>> {
    let inventory = content.roster.inventory();
    content
        .roster
        .squad_members()?
        .into_iter()
        .map(|member| {
            let stats = resolve_stats(&member, &inventory)
                .with_context(|| format!("Failed to resolve stats of '{}'", member.id))?;
            Ok((member, stats))
        })
        .collect()
}
