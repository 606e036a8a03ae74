//! Fight one campaign stage.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use squad_content::{GameContent, Progress};
use squad_core::{
    ActionResult, AutoPolicy, BattleEngine, BattleOutcome, BattleUnit, HitFlags, HitOutcome,
    PcgRng, RandomSource, StdRandom, TurnEvent, UnitId,
    env::derive_seed,
};

use crate::config::SimConfig;

/// Seed streams of one simulated battle.
const ENGINE_STREAM: u64 = 0;
const POLICY_STREAM: u64 = 1;

/// Fight one campaign stage with the auto-battle policy
#[derive(Parser)]
pub struct Battle {
    /// Stage id to fight (defaults to the highest unlocked stage)
    #[arg(long, value_name = "ID")]
    stage: Option<u32>,

    /// Fight the stage even if the roster has not unlocked it
    #[arg(short, long)]
    force: bool,

    /// Print the full battle report as JSON
    #[arg(long)]
    json: bool,
}

/// Machine-readable record of a simulated battle.
#[derive(Serialize)]
struct BattleReport<'a> {
    stage: u32,
    seed: u64,
    units: Vec<BattleUnit>,
    actions: &'a [ActionResult],
    outcome: &'a BattleOutcome,
    progress: &'a Progress,
}

impl Battle {
    pub fn execute(self, config: &SimConfig, content: GameContent) -> Result<()> {
        let GameContent {
            config: battle_config,
            archetypes,
            stages,
            roster,
        } = content;
        let mut progress = roster.progress.clone();
        let mut inventory = roster.inventory();

        let stage_id = self.stage.unwrap_or_else(|| {
            stages
                .iter()
                .map(|stage| stage.id)
                .filter(|id| progress.is_unlocked(*id))
                .max()
                .unwrap_or(1)
        });
        let stage = stages
            .get(stage_id)
            .with_context(|| format!("Stage {stage_id} does not exist"))?;
        if !progress.is_unlocked(stage.id) && !self.force {
            anyhow::bail!(
                "Stage {} is locked (highest unlocked: {})\n\nHint: pass --force to fight it anyway",
                stage.id,
                progress.max_stage_unlocked
            );
        }

        let seed = config.seed.unwrap_or_else(random_seed);
        tracing::info!(stage = stage.id, seed, "simulating battle");

        let members = roster.squad_members()?;
        let mut engine = BattleEngine::start(
            &members,
            &inventory,
            stage,
            &archetypes,
            battle_config,
            PcgRng::new(derive_seed(seed, ENGINE_STREAM)),
        )?;
        let policy = AutoPolicy::new(PcgRng::new(derive_seed(seed, POLICY_STREAM)));
        let units = engine.units().to_vec();

        if !self.json {
            print_header(&engine, seed);
        }

        let mut actions = Vec::new();
        let outcome = engine.run_with(policy, config.max_turns, |engine, result| {
            if !self.json {
                print_action(engine, result);
            }
            actions.push(result.clone());
        })?;
        progress.apply_outcome(stage.id, &outcome, &mut inventory);

        if self.json {
            let report = BattleReport {
                stage: stage.id,
                seed,
                units,
                actions: &actions,
                outcome: &outcome,
                progress: &progress,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_outcome(&outcome, &progress, engine.turns_taken());
        }
        Ok(())
    }
}

fn random_seed() -> u64 {
    let mut entropy = StdRandom::from_entropy();
    (u64::from(entropy.next_u32()) << 32) | u64::from(entropy.next_u32())
}

fn name_of<R: RandomSource>(engine: &BattleEngine<R>, id: UnitId) -> String {
    engine
        .unit(id)
        .map(|unit| unit.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn print_header<R: RandomSource>(engine: &BattleEngine<R>, seed: u64) {
    let stage = engine.stage();
    println!(
        "{} {} {} (seed {})",
        style("Stage").bold().cyan(),
        stage.id,
        style(&stage.name).bold(),
        seed
    );
    for unit in engine.units() {
        println!(
            "  {:<6} {:<24} {} HP {:>6} SPD {:>3} STB {}",
            unit.side.to_string(),
            unit.name,
            unit.element,
            unit.max_hp(),
            unit.stats.speed,
            unit.max_stability
        );
    }
    println!();
}

fn print_action<R: RandomSource>(engine: &BattleEngine<R>, result: &ActionResult) {
    println!(
        "{} uses {}",
        style(name_of(engine, result.actor)).bold(),
        style(&result.skill).cyan()
    );

    for hit in &result.hits {
        let target = name_of(engine, hit.target);
        let amount = match hit.outcome {
            HitOutcome::Miss => style("MISS".to_string()).dim(),
            HitOutcome::Heal => style(format!("+{}", hit.amount)).green(),
            HitOutcome::Critical => style(format!("-{} CRIT", hit.amount)).yellow(),
            HitOutcome::Weak => style(format!("-{} WEAK", hit.amount)).yellow(),
            HitOutcome::Resist => style(format!("-{} RESIST", hit.amount)).dim(),
            HitOutcome::Normal => style(format!("-{}", hit.amount)),
        };
        let mut tags = String::new();
        if hit.flags.contains(HitFlags::OVERLOAD) {
            tags.push_str(" OVERLOAD");
        }
        if hit.flags.contains(HitFlags::BREAK) {
            tags.push_str(" BREAK");
        }
        if hit.flags.contains(HitFlags::DEFEATED) {
            tags.push_str(" DEFEATED");
        }
        println!(
            "    → {target}: {amount} (hp {}){}",
            hit.hp_after,
            style(tags).red().bold()
        );
    }

    for event in &result.events {
        match event {
            TurnEvent::StunRecovered { unit, stability } => println!(
                "    {} recovers from stun (stability {})",
                name_of(engine, *unit),
                stability
            ),
            TurnEvent::RoundStarted { round } => {
                println!("{}", style(format!("── Round {round} ──")).dim())
            }
            TurnEvent::BattleEnded { result } => {
                println!("{}", style(format!("Battle ended: {result}")).bold())
            }
        }
    }
}

fn print_outcome(outcome: &BattleOutcome, progress: &Progress, turns: u64) {
    println!();
    match &outcome.rewards {
        Some(rewards) if outcome.is_victory() => {
            println!("{} after {turns} turns", style("VICTORY").green().bold());
            println!(
                "  +{} gold  +{} xp  +{} gems",
                rewards.gold, rewards.xp, rewards.gems
            );
            for item in &rewards.items {
                println!("  drop: {} [{}] ({})", item.name(), item.rarity(), item.id());
            }
        }
        _ => println!("{} after {turns} turns", style("DEFEAT").red().bold()),
    }
    println!(
        "  wallet: {} gold, {} gems; highest unlocked stage {}",
        progress.gold, progress.gems, progress.max_stage_unlocked
    );
}
