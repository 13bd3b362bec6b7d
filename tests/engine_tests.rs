// Integration tests for ranking and recommendation

use ai_hair_stylist::{
    recommend_from_map, recommend_hairstyles, ClientPreferences, HairstyleCatalog,
    RecommendationEngine, ScoringWeights,
};
use serde_json::json;
use pretty_assertions::assert_eq;

fn bundled() -> HairstyleCatalog {
    HairstyleCatalog::bundled().unwrap()
}

fn full_profile() -> ClientPreferences {
    ClientPreferences::new()
        .with_face_shape("oval")
        .with_hair_length("medium")
        .with_hair_texture("curly")
        .with_gender("female")
        .with_occasion("creative")
        .with_maintenance("low")
        .with_keywords(["curls", "wash-and-go"])
}

// ============ Scenarios ============

#[test]
fn test_engine_ranks_by_preferences() {
    let catalog = bundled();
    let engine = RecommendationEngine::new(&catalog);
    let recommendations = engine.recommend(&full_profile(), 2);

    assert_eq!(recommendations.len(), 2);
    let top = &recommendations[0];
    assert_eq!(top.hairstyle.name(), "Curly Shag");
    assert!(top.score > 0.0);
    assert!(top.reason_texts().iter().any(|r| r.contains("curls")));
}

#[test]
fn test_exact_match_ranks_first() {
    let catalog = bundled();
    let prefs = ClientPreferences::new()
        .with_hair_texture("curly")
        .with_maintenance("low")
        .with_keywords(["curls"]);

    let ranked = RecommendationEngine::new(&catalog).rank(&prefs);
    let top = &ranked[0];

    assert_eq!(top.hairstyle.name(), "Curly Shag");
    assert!((top.score - 5.3).abs() < 1e-9, "score was {}", top.score);
    assert_eq!(
        top.reason_texts(),
        vec![
            "works with curly texture",
            "meets low maintenance goal",
            "matches requested features: curls",
        ]
    );
    assert!(ranked[1].score < top.score);
}

#[test]
fn test_avoid_tags_remove_options() {
    let catalog = bundled();
    let prefs = ClientPreferences::new()
        .with_hair_length("long")
        .with_hair_texture("wavy")
        .with_maintenance("medium")
        .with_keywords(["face-framing"])
        .with_avoid(["heat-styling"]);

    let results = recommend_hairstyles(&catalog, &prefs, 5, None);
    assert!(!results.is_empty());

    let names: Vec<_> = results.iter().map(|r| r.hairstyle.name()).collect();
    assert!(!names.contains(&"Sleek Ponytail"));
    assert!(!names.contains(&"Beach Waves"));
    assert_eq!(names[0], "Long Layers");
}

#[test]
fn test_avoid_veto_beats_highest_score() {
    let catalog = bundled();
    let ponytail = ClientPreferences::new()
        .with_face_shape("diamond")
        .with_hair_length("long")
        .with_hair_texture("straight")
        .with_gender("female")
        .with_occasion("athletic")
        .with_maintenance("medium")
        .with_keywords(["sleek", "polished"]);

    let engine = RecommendationEngine::new(&catalog);
    assert_eq!(engine.rank(&ponytail)[0].hairstyle.name(), "Sleek Ponytail");

    let vetoed = ponytail.clone().with_avoid(["heat-styling"]);
    let scored = engine.score_all(&vetoed);
    let best = scored
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .unwrap();
    assert_eq!(best.hairstyle.name(), "Sleek Ponytail");

    assert!(engine
        .rank(&vetoed)
        .iter()
        .all(|r| r.hairstyle.name() != "Sleek Ponytail"));
}

#[test]
fn test_unknown_maintenance_preference() {
    let catalog = bundled();
    let prefs = ClientPreferences::new().with_maintenance("whenever");

    let ranked = RecommendationEngine::new(&catalog).rank(&prefs);
    assert_eq!(ranked.len(), catalog.len());
    assert!(ranked.iter().all(|r| r.score == 0.0 && r.reasons.is_empty()));
}

// ============ Properties ============

#[test]
fn test_rank_is_deterministic() {
    let catalog = bundled();
    let engine = RecommendationEngine::new(&catalog);
    let prefs = full_profile().with_avoid(["edgy"]);

    let first: Vec<_> = engine.rank(&prefs).iter().map(|r| r.summary()).collect();
    for _ in 0..5 {
        let again: Vec<_> = engine.rank(&prefs).iter().map(|r| r.summary()).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn test_rank_total_ordering() {
    let catalog = bundled();
    let engine = RecommendationEngine::new(&catalog);

    for prefs in [
        ClientPreferences::new(),
        full_profile(),
        ClientPreferences::new().with_gender("male").with_keywords(["polished"]),
        ClientPreferences::new().with_occasion("casual").with_maintenance("high"),
    ] {
        let ranked = engine.rank(&prefs);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.score > b.score
                    || (a.score == b.score
                        && a.hairstyle.name().to_lowercase() <= b.hairstyle.name().to_lowercase()),
                "{} ({}) ranked before {} ({})",
                a.hairstyle.name(),
                a.score,
                b.hairstyle.name(),
                b.score
            );
        }
    }
}

#[test]
fn test_conflicts_never_ranked() {
    let catalog = bundled();
    let engine = RecommendationEngine::new(&catalog).with_weights(
        ScoringWeights::with_overrides([("avoid", -0.1), ("keyword", 5.0)]).unwrap(),
    );

    for avoid in ["volume", "polished", "protective", "heat-styling", "edgy"] {
        let prefs = full_profile().with_avoid([avoid]);
        for rec in engine.rank(&prefs) {
            assert!(
                !rec.hairstyle.tags().contains(avoid),
                "{} carries avoided tag {}",
                rec.hairstyle.name(),
                avoid
            );
        }
    }
}

#[test]
fn test_limit_semantics() {
    let catalog = bundled();
    let engine = RecommendationEngine::new(&catalog);
    let prefs = ClientPreferences::new().with_occasion("casual");
    let ranked: Vec<_> = engine.rank(&prefs).iter().map(|r| r.summary()).collect();

    for limit in 1..=12 {
        let limited: Vec<_> = engine
            .recommend(&prefs, limit)
            .iter()
            .map(|r| r.summary())
            .collect();
        let expected = ranked.len().min(limit as usize);
        assert_eq!(limited.as_slice(), &ranked[..expected]);
    }

    for limit in [0, -1, -100] {
        assert_eq!(engine.recommend(&prefs, limit).len(), ranked.len());
    }
}

#[test]
fn test_recommend_hairstyles_with_weights() {
    let catalog = bundled();
    let prefs = ClientPreferences::new()
        .with_gender("male")
        .with_keywords(["edgy"]);

    let default = recommend_hairstyles(&catalog, &prefs, 1, None);
    assert_eq!(default[0].hairstyle.name(), "Undercut Fade");

    let weights = ScoringWeights::with_overrides([("keyword", 0.0)]).unwrap();
    let reweighted = recommend_hairstyles(&catalog, &prefs, 0, Some(weights));
    let top_score = reweighted[0].score;
    assert!((top_score - 1.0).abs() < 1e-9);
}

#[test]
fn test_recommend_from_map_matches_typed_path() {
    let catalog = bundled();
    let payload = json!({"gender": "Male", "tags": "edgy"});
    let prefs = ClientPreferences::new()
        .with_gender("male")
        .with_keywords(["edgy"]);

    let from_map = recommend_from_map(None, payload.as_object().unwrap(), 3, None).unwrap();
    let typed: Vec<_> = recommend_hairstyles(&catalog, &prefs, 3, None)
        .iter()
        .map(|rec| rec.summary())
        .collect();

    assert_eq!(from_map, typed);
    assert_eq!(from_map[0].name, "Undercut Fade");
}
