//! Capability predicate tests: role gates, membership, fail-closed defaults.

use crate::access::capabilities::{
    can_access_dashboard, can_add_player_to_game, can_continue_game, can_delete_active_game,
    can_delete_completed_game, can_delete_entity, can_manage_game, can_start_new_game,
    can_view_game_read_only, Capabilities,
};
use crate::domain::game::{GameRecord, PlayerRef};
use crate::domain::role::Role;
use crate::domain::session::Session;
use crate::domain::status::GameStatus;

fn game_with(status: GameStatus) -> GameRecord {
    GameRecord {
        id: "g1".to_string(),
        status,
        created_by: Some("creator".to_string()),
        players: vec![PlayerRef {
            user_id: Some("alice".to_string()),
            name: "Alice".to_string(),
        }],
    }
}

#[test]
fn admin_can_continue_any_game_in_play() {
    let admin = Session::new("outsider", Role::Admin);
    assert!(can_continue_game(&admin, &game_with(GameStatus::Active)));
    assert!(can_continue_game(&admin, &game_with(GameStatus::Setup)));
}

#[test]
fn nobody_can_continue_a_completed_game() {
    let game = game_with(GameStatus::Completed);
    assert!(!can_continue_game(&Session::new("creator", Role::Admin), &game));
    assert!(!can_continue_game(&Session::new("alice", Role::Super), &game));
}

#[test]
fn nobody_can_continue_an_unknown_status_game() {
    let game = game_with(GameStatus::Unknown);
    assert!(!can_continue_game(&Session::new("creator", Role::Admin), &game));
}

#[test]
fn super_member_can_continue() {
    let game = game_with(GameStatus::Active);
    assert!(can_continue_game(&Session::new("alice", Role::Super), &game));
    assert!(can_continue_game(&Session::new("creator", Role::Super), &game));
}

#[test]
fn super_non_member_cannot_continue() {
    let game = game_with(GameStatus::Active);
    assert!(!can_continue_game(&Session::new("outsider", Role::Super), &game));
}

#[test]
fn regular_member_cannot_continue() {
    let game = game_with(GameStatus::Active);
    assert!(!can_continue_game(&Session::new("alice", Role::Regular), &game));
}

#[test]
fn any_authenticated_user_can_view_read_only() {
    assert!(can_view_game_read_only(&Session::new("u", Role::Regular)));
    assert!(can_view_game_read_only(&Session::new("u", Role::Admin)));
}

#[test]
fn anonymous_session_has_no_capabilities() {
    let anon = Session::anonymous();
    let game = game_with(GameStatus::Active);
    assert!(!can_view_game_read_only(&anon));
    assert!(!can_continue_game(&anon, &game));
    assert!(!can_manage_game(&anon, &game));
    assert!(!can_start_new_game(&anon));
    assert!(!can_access_dashboard(&anon));
}

#[test]
fn manage_requires_admin_or_super_membership() {
    let game = game_with(GameStatus::Active);
    assert!(can_manage_game(&Session::new("outsider", Role::Admin), &game));
    assert!(can_manage_game(&Session::new("alice", Role::Super), &game));
    assert!(!can_manage_game(&Session::new("outsider", Role::Super), &game));
    assert!(!can_manage_game(&Session::new("alice", Role::Regular), &game));
}

#[test]
fn add_player_only_while_game_can_take_one() {
    let admin = Session::new("outsider", Role::Admin);
    assert!(can_add_player_to_game(&admin, &game_with(GameStatus::Setup)));
    assert!(can_add_player_to_game(&admin, &game_with(GameStatus::Active)));
    assert!(!can_add_player_to_game(&admin, &game_with(GameStatus::Completed)));
    assert!(!can_add_player_to_game(&admin, &game_with(GameStatus::Unknown)));
}

#[test]
fn delete_gates_are_admin_only() {
    let admin = Session::new("a", Role::Admin);
    let sup = Session::new("s", Role::Super);
    assert!(can_delete_active_game(&admin));
    assert!(can_delete_completed_game(&admin));
    assert!(can_delete_entity(&admin));
    assert!(!can_delete_active_game(&sup));
    assert!(!can_delete_completed_game(&sup));
    assert!(!can_delete_entity(&sup));
}

#[test]
fn start_new_game_requires_super() {
    assert!(can_start_new_game(&Session::new("s", Role::Super)));
    assert!(can_start_new_game(&Session::new("a", Role::Admin)));
    assert!(!can_start_new_game(&Session::new("r", Role::Regular)));
}

#[test]
fn dashboard_requires_admin() {
    assert!(can_access_dashboard(&Session::new("a", Role::Admin)));
    assert!(!can_access_dashboard(&Session::new("s", Role::Super)));
    assert!(!can_access_dashboard(&Session::new("r", Role::Regular)));
}

#[test]
fn capability_triple_is_derived_per_caller() {
    let game = game_with(GameStatus::Active);

    let caps = Capabilities::for_game(&Session::new("alice", Role::Super), &game);
    assert!(caps.can_continue && caps.can_view_only && caps.can_manage);

    let caps = Capabilities::for_game(&Session::new("outsider", Role::Regular), &game);
    assert!(!caps.can_continue && caps.can_view_only && !caps.can_manage);

    let caps = Capabilities::for_game(&Session::anonymous(), &game);
    assert_eq!(caps, Capabilities::default());
}
