//! Integration tests for the Draft bounded context.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use civdraft_catalog::Catalog;
use civdraft_core::rng::StdRandom;
use civdraft_draft::domain::roster::PlayerLimits;

#[tokio::test]
async fn test_draft_ban_then_roll_lifecycle() {
    let state = common::fixture_state();

    // Step 1: ban two civilizations
    let (status, json) = common::post_json(
        common::build_test_app(state.clone()),
        "/api/v1/draft/bans",
        &serde_json::json!({ "civilizations": "A,B" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["banned"], serde_json::json!(["A", "B"]));

    // Step 2: the bans are visible until the next roll
    let (status, json) =
        common::get_json(common::build_test_app(state.clone()), "/api/v1/draft/bans").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["banned"], serde_json::json!(["A", "B"]));

    // Step 3: roll for one player; only C..F are eligible
    let (status, json) = common::post_json(
        common::build_test_app(state.clone()),
        "/api/v1/draft/roll",
        &serde_json::json!({ "players": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["assignments"][0]["civilizations"],
        serde_json::json!(["D", "E", "F"])
    );
    assert_eq!(json["exclusions_applied"], serde_json::json!(["A", "B"]));
    assert_eq!(
        json["reply"],
        "Civilization choices for each player:\nPlayer 1: D, E, F\n\nBanned civilizations: A, B"
    );

    // Step 4: the bans lapsed with that roll
    let (_, json) =
        common::get_json(common::build_test_app(state.clone()), "/api/v1/draft/bans").await;
    assert_eq!(json["banned"], serde_json::json!([]));

    let (status, json) = common::post_json(
        common::build_test_app(state),
        "/api/v1/draft/roll",
        &serde_json::json!({ "players": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["exclusions_applied"], serde_json::json!([]));
    assert_eq!(json["assignments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_draft_rejected_ban_adds_nothing() {
    let state = common::fixture_state();

    let (status, json) = common::post_json(
        common::build_test_app(state.clone()),
        "/api/v1/draft/bans",
        &serde_json::json!({ "civilizations": "A,Nonexistent" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unrecognized_civilization");
    assert_eq!(json["unrecognized"], serde_json::json!(["Nonexistent"]));

    let (_, json) = common::get_json(common::build_test_app(state), "/api/v1/draft/bans").await;
    assert_eq!(json["banned"], serde_json::json!([]));
}

#[tokio::test]
async fn test_draft_ban_with_only_commas_is_rejected() {
    let app = common::build_test_app(common::fixture_state());

    let (status, json) = common::post_json(
        app,
        "/api/v1/draft/bans",
        &serde_json::json!({ "civilizations": " , " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_draft_name_count_mismatch_uses_default_names() {
    let app = common::build_test_app(common::builtin_state());

    let (status, json) = common::post_json(
        app,
        "/api/v1/draft/roll",
        &serde_json::json!({ "players": 3, "names": "X,Y" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let players: Vec<&str> = json["assignments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["player"].as_str().unwrap())
        .collect();
    assert_eq!(players, vec!["Player 1", "Player 2", "Player 3"]);
    assert_eq!(
        json["warning"],
        "You specified 3 players but provided 2 names. Using default player names instead."
    );
    assert!(
        json["reply"]
            .as_str()
            .unwrap()
            .starts_with("You specified 3 players")
    );
}

#[tokio::test]
async fn test_draft_player_count_is_limited_to_two_through_eight() {
    for players in [-1, 0, 1, 9] {
        let app = common::build_test_app(common::builtin_state());
        let (status, json) = common::post_json(
            app,
            "/api/v1/draft/roll",
            &serde_json::json!({ "players": players }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "players = {players}");
        assert_eq!(json["error"], "invalid_player_count");
    }
}

#[tokio::test]
async fn test_draft_insufficient_pool_keeps_bans() {
    let state = common::fixture_state();

    let (status, _) = common::post_json(
        common::build_test_app(state.clone()),
        "/api/v1/draft/bans",
        &serde_json::json!({ "civilizations": "A" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = common::post_json(
        common::build_test_app(state.clone()),
        "/api/v1/draft/roll",
        &serde_json::json!({ "players": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "insufficient_pool");

    let (_, json) = common::get_json(common::build_test_app(state), "/api/v1/draft/bans").await;
    assert_eq!(json["banned"], serde_json::json!(["A"]));
}

#[tokio::test]
async fn test_draft_eight_players_get_disjoint_groups() {
    let state = common::state_with(
        Catalog::builtin().unwrap(),
        PlayerLimits::default(),
        StdRandom::seeded(2026),
    );

    let (status, json) = common::post_json(
        common::build_test_app(state),
        "/api/v1/draft/roll",
        &serde_json::json!({ "players": 8 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let assignments = json["assignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 8);
    let mut seen = HashSet::new();
    for assignment in assignments {
        let civs = assignment["civilizations"].as_array().unwrap();
        assert_eq!(civs.len(), 3);
        for civ in civs {
            assert!(seen.insert(civ.as_str().unwrap().to_owned()));
        }
    }
}
