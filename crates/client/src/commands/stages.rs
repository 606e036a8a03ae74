//! List campaign stages against the current squad.

use anyhow::Result;
use clap::Parser;
use console::style;
use squad_content::GameContent;
use squad_core::{DifficultyHint, squad_power};

use super::resolved_squad;

/// List campaign stages with a difficulty hint for the current squad
#[derive(Parser)]
pub struct Stages {
    /// Include stages the roster has not unlocked yet
    #[arg(short, long)]
    all: bool,
}

impl Stages {
    pub fn execute(self, content: &GameContent) -> Result<()> {
        let squad = resolved_squad(content)?;
        let cp = squad_power(squad.iter().map(|(_, stats)| stats));
        let progress = &content.roster.progress;

        println!("{} {}", style("Squad CP:").bold().cyan(), cp);
        println!();

        for stage in content.stages.iter() {
            let unlocked = progress.is_unlocked(stage.id);
            if !unlocked && !self.all {
                continue;
            }

            let hint = DifficultyHint::assess(cp, stage.recommended_cp);
            let hint = match hint {
                DifficultyHint::Safe => style(hint.to_string()).green(),
                DifficultyHint::Risky => style(hint.to_string()).yellow(),
                DifficultyHint::Danger => style(hint.to_string()).red(),
            };
            let marker = if progress.is_cleared(stage.id) {
                style("✓").green()
            } else if unlocked {
                style("•").cyan()
            } else {
                style("🔒").dim()
            };

            println!(
                "{marker} {:>2}. {:<22} CP {:>6}  {}{}",
                stage.id,
                stage.name,
                stage.recommended_cp,
                hint,
                if stage.boss { "  [BOSS]" } else { "" }
            );
        }
        Ok(())
    }
}
