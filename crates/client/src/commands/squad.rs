//! Show the squad's resolved stats.

use anyhow::Result;
use clap::Parser;
use console::style;
use squad_content::GameContent;
use squad_core::{combat_power, squad_power};

use super::resolved_squad;

/// Show resolved stats and combat power of the squad
#[derive(Parser)]
pub struct Squad {}

impl Squad {
    pub fn execute(self, content: &GameContent) -> Result<()> {
        let squad = resolved_squad(content)?;

        for (member, stats) in &squad {
            println!(
                "{} {} ({} {} {}, Lv.{} R{})",
                style("▸").cyan(),
                style(&member.name).bold(),
                member.rarity,
                member.element,
                member.role,
                member.level,
                member.effective_rank()
            );
            println!(
                "    HP {}/{}  ATK {}  DEF {}  SPD {}",
                stats.hp, stats.max_hp, stats.atk, stats.def, stats.speed
            );
            println!(
                "    CRIT {}% ×{}%  EVA {}  ACC {}  PEN {}  CP {:.0}",
                stats.crit_rate,
                stats.crit_dmg,
                stats.evasion,
                stats.accuracy,
                stats.armor_pen,
                combat_power(stats).floor()
            );
        }

        let cp = squad_power(squad.iter().map(|(_, stats)| stats));
        println!();
        println!("{} {}", style("Squad CP:").bold().cyan(), cp);
        Ok(())
    }
}
