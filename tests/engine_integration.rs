//! End-to-end tests across the full analysis pipeline

use deckwise::card::{CardMetadata, StaticMetadataSource};
use deckwise::prompt::InMemoryLayerStore;
use deckwise::{
    check_strategic_advice, deck_hash, extract_numeric_recommendations, AnalysisService, Category,
    EngineConfig, Format, ModuleKind, Severity, WarningFlag,
};

fn commander_metadata() -> StaticMetadataSource {
    StaticMetadataSource::new()
        .with_card(
            "sol ring",
            CardMetadata::new()
                .with_type_line("Artifact")
                .with_oracle_text("{T}: Add {C}{C}.")
                .with_mana_value(1.0),
        )
        .with_card(
            "command tower",
            CardMetadata::new()
                .with_type_line("Land")
                .with_oracle_text(
                    "{T}: Add one mana of any color in your commander's color identity.",
                ),
        )
        .with_card(
            "forest",
            CardMetadata::new()
                .with_type_line("Basic Land — Forest")
                .with_color_identity("G"),
        )
        .with_card(
            "craterhoof behemoth",
            CardMetadata::new()
                .with_type_line("Creature — Beast")
                .with_oracle_text(
                    "When this creature enters, creatures you control gain trample.",
                )
                .with_mana_value(8.0)
                .with_color_identity("G"),
        )
}

fn service() -> AnalysisService<StaticMetadataSource, InMemoryLayerStore> {
    AnalysisService::new(
        EngineConfig::default(),
        commander_metadata(),
        InMemoryLayerStore::with_defaults(),
    )
}

const DECK: &str = "1 Sol Ring\n1 Command Tower\n33 Forest\n1 Craterhoof Behemoth";

#[test]
fn summary_counts_match_metadata() {
    let summary = service().summarize(DECK, Format::Commander, None).unwrap();

    // Command Tower plus 33 Forests are lands; Sol Ring is ramp.
    assert_eq!(summary.land_count, 34);
    assert_eq!(summary.ramp, 1);
    assert_eq!(summary.card_count, 36);
    assert_eq!(summary.colors, "G");
    assert_eq!(summary.card_names.len(), 4);

    // Curve: Sol Ring at one, Craterhoof at eight; lands carry no mana value.
    assert_eq!(summary.curve_histogram, [1, 0, 0, 0, 1]);
    let curve_total: u32 = summary.curve_histogram.iter().sum();
    assert!(curve_total <= summary.card_count);
}

#[test]
fn summary_flags_small_underpowered_deck() {
    let summary = service().summarize(DECK, Format::Commander, None).unwrap();
    assert!(summary.warning_flags.contains(&WarningFlag::DeckTooSmall));
    assert!(summary.warning_flags.contains(&WarningFlag::RampLow));
    assert!(summary.warning_flags.contains(&WarningFlag::DrawLow));
    assert!(summary.warning_flags.contains(&WarningFlag::RemovalLow));
    // 34 of 36 cards are lands.
    assert!(summary.warning_flags.contains(&WarningFlag::ManaHigh));
}

#[test]
fn hash_is_stable_under_reordering_and_duplicate_merging() {
    let shuffled = "33 Forest\n1 Craterhoof Behemoth\n1 Command Tower\n1 Sol Ring";
    let split = "1 Sol Ring\n1 Command Tower\n30 Forest\n3 Forest\n1 Craterhoof Behemoth";

    assert_eq!(deck_hash(DECK), deck_hash(shuffled));
    assert_eq!(deck_hash(DECK), deck_hash(split));

    let summary_a = service().summarize(DECK, Format::Commander, None).unwrap();
    let summary_b = service()
        .summarize(shuffled, Format::Commander, None)
        .unwrap();
    assert_eq!(summary_a.deck_hash, summary_b.deck_hash);
}

#[test]
fn repeated_summaries_are_bit_identical() {
    let service = service();
    let first = service.summarize(DECK, Format::Commander, None).unwrap();
    let second = service.summarize(DECK, Format::Commander, None).unwrap();

    let json_a = serde_json::to_string(&first).unwrap();
    let json_b = serde_json::to_string(&second).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn composed_prompt_attaches_detected_modules_in_order() {
    let mut source = commander_metadata();
    for i in 0..6 {
        source = source.with_card(
            format!("reanimate {i}"),
            CardMetadata::new()
                .with_type_line("Sorcery")
                .with_oracle_text(
                    "Return target creature card from your graveyard to the battlefield.",
                ),
        );
    }
    for i in 0..15 {
        source = source.with_card(
            format!("cantrip {i}"),
            CardMetadata::new()
                .with_type_line("Instant")
                .with_oracle_text("Draw a card."),
        );
    }
    let service = AnalysisService::new(
        EngineConfig::default(),
        source,
        InMemoryLayerStore::with_defaults(),
    );

    let mut deck = String::from(DECK);
    for i in 0..6 {
        deck.push_str(&format!("\n1 Reanimate {i}"));
    }
    for i in 0..15 {
        deck.push_str(&format!("\n1 Cantrip {i}"));
    }

    // 6 recursion sorceries + 15 cantrip instants: 21 instants/sorceries
    // trips spellslinger, 6 recursion pieces trip graveyard.
    let prompt = service.compose_system_prompt("commander", Some(&deck), None);
    assert_eq!(
        prompt.modules_attached,
        vec![ModuleKind::Spellslinger, ModuleKind::Graveyard]
    );
    let spellslinger_at = prompt.text.find("instant/sorcery dense").unwrap();
    let graveyard_at = prompt.text.find("graveyard is a resource").unwrap();
    assert!(spellslinger_at < graveyard_at);
}

#[test]
fn command_zone_commander_attaches_cascade_layer() {
    let source = commander_metadata().with_card(
        "averna, the chaos bloom",
        CardMetadata::new()
            .with_type_line("Legendary Creature — Elemental Shaman")
            .with_oracle_text(
                "As you cascade, you may put a land card from among the \
                 exiled cards onto the battlefield tapped. Cascade",
            ),
    );
    let service = AnalysisService::new(
        EngineConfig::default(),
        source,
        InMemoryLayerStore::with_defaults(),
    );

    // No cascade cards among the 99; the commander alone carries the theme.
    let prompt =
        service.compose_system_prompt("commander", Some(DECK), Some("Averna, the Chaos Bloom"));
    assert_eq!(prompt.modules_attached, vec![ModuleKind::Cascade]);
    assert!(prompt.text.contains("cascade"));
}

#[test]
fn unknown_format_composes_like_commander() {
    let service = service();
    let unknown = service.compose_system_prompt("unknown_xyz", None, None);
    let commander = service.compose_system_prompt("commander", None, None);
    assert_eq!(unknown, commander);
    assert!(unknown.modules_attached.is_empty());
}

#[test]
fn advice_extraction_and_validation_round() {
    let advice = "Run 36-38 lands for consistency, plus 10 ramp pieces.";
    assert_eq!(
        extract_numeric_recommendations(advice, Category::Lands),
        vec![37]
    );

    let flagged = check_strategic_advice(advice, Format::Commander, None);
    assert!(flagged.is_empty());

    let bad = "Honestly, 20 lands is plenty in Commander.";
    let flagged = check_strategic_advice(bad, Format::Commander, None);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].severity, Severity::Critical);
    assert!(!flagged[0].passed);
}
