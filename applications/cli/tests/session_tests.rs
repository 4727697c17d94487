//! End-to-end tests for the queue shell session
//!
//! Each test drives a `Session` with parsed commands, the same way the
//! interactive shell does, against a real data directory.

mod common;

use cadenza_cli::command::parse_line;
use cadenza_cli::{Command, Reply, Session};
use cadenza_core::{EnqueueBehaviour, TrackId, TRACK_LIST_KEY};
use cadenza_storage::{settings, KeyValueStore, RedbStore};
use clap::error::ErrorKind;
use common::test_config;
use std::time::Duration;

async fn run(session: &Session, line: &str) -> Reply {
    let command: Command = line.parse().expect("valid command");
    session.execute(command).await.expect("command succeeds")
}

fn current_id(session: &Session) -> Option<i64> {
    session.queue().snapshot().current.map(|t| t.id.get())
}

fn ids(session: &Session) -> Vec<i64> {
    session
        .queue()
        .snapshot()
        .tracks
        .iter()
        .map(|t| t.id.get())
        .collect()
}

#[tokio::test]
async fn test_basic_navigation() {
    let (config, _dir) = test_config();
    let session = Session::open(&config).unwrap();

    run(&session, "add 1 2 3").await;
    run(&session, "next").await;
    run(&session, "next").await;
    assert_eq!(current_id(&session), Some(3));

    run(&session, "next").await;
    assert_eq!(session.queue().snapshot().index, 0);

    session.close().await;
}

#[tokio::test]
async fn test_queue_is_restored_on_next_session() {
    let (config, _dir) = test_config();

    let session = Session::open(&config).unwrap();
    run(&session, "add 1 2 3 4").await;
    run(&session, "jump 2").await;
    run(&session, "move 0 3").await;
    session.close().await;

    let session = Session::open(&config).unwrap();
    assert_eq!(ids(&session), vec![2, 3, 4, 1]);
    assert_eq!(current_id(&session), Some(3));
    session.close().await;
}

#[tokio::test]
async fn test_malformed_track_list_starts_empty() {
    let (config, _dir) = test_config();
    RedbStore::open(&config.storage.data_dir)
        .unwrap()
        .set(TRACK_LIST_KEY, "not json")
        .unwrap();

    let session = Session::open(&config).unwrap();
    assert!(session.queue().snapshot().tracks.is_empty());
    session.close().await;
}

#[tokio::test]
async fn test_set_persists_behaviour() {
    let (config, _dir) = test_config();

    let session = Session::open(&config).unwrap();
    assert_eq!(session.behaviour(), EnqueueBehaviour::default());
    run(&session, "set clear-before true").await;
    run(&session, "add 1").await;
    run(&session, "play 2").await;
    assert_eq!(ids(&session), vec![2]);
    session.close().await;

    {
        let store = RedbStore::open(&config.storage.data_dir).unwrap();
        let stored = settings::stored_enqueue_behaviour(&store).unwrap().unwrap();
        assert!(stored.clear_before);
    }

    // the stored setting beats the configured default
    let session = Session::open(&config).unwrap();
    assert!(session.behaviour().clear_before);
    session.close().await;
}

#[tokio::test]
async fn test_configured_behaviour_applies_without_stored_setting() {
    let (mut config, _dir) = test_config();
    config.queue.enqueue_behaviour.on_click = false;

    let session = Session::open(&config).unwrap();
    assert!(!session.behaviour().on_click);
    session.close().await;
}

#[tokio::test]
async fn test_server_events() {
    let (config, _dir) = test_config();
    let session = Session::open(&config).unwrap();

    run(&session, "add 1 2 1 3").await;
    run(&session, "changed 2 Blue in Green").await;
    run(&session, "removed 1").await;

    let snapshot = session.queue().snapshot();
    assert_eq!(ids(&session), vec![2, 3]);
    assert_eq!(snapshot.tracks[0].display_title(), "Blue in Green");
    session.close().await;
}

#[tokio::test(start_paused = true)]
async fn test_clicks_go_through_router() {
    let (config, _dir) = test_config();
    let session = Session::open(&config).unwrap();
    run(&session, "add 1").await;

    // single click enqueues
    run(&session, "click 2").await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(ids(&session), vec![1, 2]);
    assert_eq!(current_id(&session), Some(1));

    // double click plays
    run(&session, "click 3").await;
    run(&session, "click 3").await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(ids(&session), vec![1, 2, 3]);
    assert_eq!(current_id(&session), Some(3));

    session.close().await;
}

#[tokio::test]
async fn test_show_help_and_quit() {
    let (config, _dir) = test_config();
    let session = Session::open(&config).unwrap();
    run(&session, "add 7").await;

    match run(&session, "show").await {
        Reply::Text(text) => assert!(text.starts_with("1 tracks, index 0, shuffle off")),
        other => panic!("unexpected reply {other:?}"),
    }
    let help = parse_line("help").unwrap_err();
    assert_eq!(help.kind(), ErrorKind::DisplayHelp);
    assert_eq!(run(&session, "exit").await, Reply::Quit);
    assert_eq!(run(&session, "quit").await, Reply::Quit);

    assert_eq!(
        session.queue().snapshot().current.map(|t| t.id),
        Some(TrackId::new(7))
    );
    session.close().await;
}
