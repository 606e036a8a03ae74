//! Loads content from disk and drives a campaign battle end to end.

use std::fs;

use squad_content::{ContentFactory, Progress};
use squad_core::{AutoPolicy, BattleEngine, PcgRng, resolve_stats, squad_power};
use tempfile::TempDir;

/// Copies the bundled data files into a fresh directory.
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let source = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
    for name in ["config.toml", "archetypes.ron", "stages.ron", "roster.ron"] {
        fs::copy(format!("{source}/{name}"), dir.path().join(name)).unwrap();
    }
    dir
}

#[test]
fn directory_content_matches_bundled_content() {
    let dir = data_dir();
    let loaded = ContentFactory::new(dir.path()).load_all().unwrap();
    let bundled = ContentFactory::bundled().unwrap();

    assert_eq!(loaded.config, bundled.config);
    assert_eq!(loaded.archetypes, bundled.archetypes);
    assert_eq!(loaded.stages, bundled.stages);
    assert_eq!(loaded.roster, bundled.roster);
}

#[test]
fn malformed_file_names_the_failing_loader() {
    let dir = data_dir();
    fs::write(dir.path().join("stages.ron"), "(stages: [(id: 1,").unwrap();

    let err = ContentFactory::new(dir.path()).load_all().unwrap_err();
    assert!(err.to_string().contains("stage RON"), "{err}");
}

#[test]
fn missing_roster_fails_to_load() {
    let dir = data_dir();
    fs::remove_file(dir.path().join("roster.ron")).unwrap();
    assert!(ContentFactory::new(dir.path()).load_roster().is_err());
}

#[test]
fn starter_squad_resolves_against_its_inventory() {
    let content = ContentFactory::bundled().unwrap();
    let inventory = content.roster.inventory();
    let members = content.roster.squad_members().unwrap();

    let stats: Vec<_> = members
        .iter()
        .map(|member| resolve_stats(member, &inventory).unwrap())
        .collect();
    assert!(squad_power(stats.iter()) > 0);

    // Legendary operator base 2000 plus the vitality chip; saved health is kept.
    assert_eq!(stats[0].max_hp, 2200);
    assert_eq!(stats[0].hp, 1800);
}

#[test]
fn battle_outcome_folds_into_progress() {
    let content = ContentFactory::bundled().unwrap();
    let stage = content.stages.get(1).unwrap();
    let members = content.roster.squad_members().unwrap();
    let mut inventory = content.roster.inventory();
    let mut progress: Progress = content.roster.progress.clone();

    let mut engine = BattleEngine::start(
        &members,
        &inventory,
        stage,
        &content.archetypes,
        content.config.clone(),
        PcgRng::new(7),
    )
    .unwrap();
    let outcome = engine
        .run_to_end(AutoPolicy::new(PcgRng::new(8)), 500)
        .unwrap();

    let gold_before = progress.gold;
    let applied = progress.apply_outcome(stage.id, &outcome, &mut inventory);
    assert_eq!(applied, outcome.is_victory());
    if applied {
        assert!(progress.gold >= gold_before + 80);
        assert!(progress.is_unlocked(2));
    } else {
        assert_eq!(progress, content.roster.progress);
    }
}
