//! Integration test: poller + default profiles + file and channel sources
//!
//! Tests the complete flow:
//! 1. Embedded config builds the org-name / org-id / hostname chain
//! 2. Sources are snapshotted on every poll
//! 3. Suppression windows hold the overlay steady across navigation
//! 4. The async loop stops on the shutdown flag

use envbadge_clock::{Clock, ManualClock};
use envbadge_runner::config::{load_config_from_str, load_default_config};
use envbadge_runner::{
    BadgePoller, FileSignalSource, MemoryBadgeSink, StaticSignalSource, WatchSignalSource,
};
use std::fs;
use std::time::Duration;
use tokio::sync::watch;

const DR_TOKEN: &str = r#"{"orgId":"d6154e9b-1f7a-40a4-9f06-e3a4c73fc4ac","token":"abc"}"#;
const PROD_TOKEN: &str = r#"{"orgId":"f6b247d6-10d1-42e6-99bc-be52827a50f0","token":"def"}"#;

/// Storage token drives the badge while the DOM lane has nothing
#[test]
fn test_storage_fallback_with_default_profiles() {
    let _ = env_logger::try_init();

    let dir = tempfile::tempdir().unwrap();
    let org_name_file = dir.path().join("org-name.txt");
    let token_file = dir.path().join("auth-token.json");

    let clock = ManualClock::new(None);
    let config = load_default_config().unwrap();
    let chain = config.build_chain(clock.now()).unwrap();
    let sink = MemoryBadgeSink::new();
    let mut poller = BadgePoller::new(
        chain,
        Box::new(sink.clone()),
        clock.clone(),
        config.poll_interval(),
    );
    poller
        .bind_source("org-name", Box::new(FileSignalSource::new(&org_name_file)))
        .unwrap();
    poller
        .bind_source("org-id", Box::new(FileSignalSource::new(&token_file)))
        .unwrap();

    // login redirect: nothing yet, then the token lands
    poller.poll_once();
    clock.advance_ms(500);
    fs::write(&token_file, DR_TOKEN).unwrap();
    for _ in 0..4 {
        poller.poll_once();
        clock.advance_ms(500);
    }
    assert!(sink.current().is_none(), "badge shown inside initial window");

    // t=2500 -> t=3000
    poller.poll_once();
    clock.advance_ms(500);
    poller.poll_once();
    assert_eq!(sink.current().unwrap().label, "DR");
    assert_eq!(poller.chain().authority(), Some("org-id"));

    // user switches org: storage blanks out briefly, then PROD
    fs::write(&token_file, "").unwrap();
    clock.advance_ms(500);
    poller.poll_once();
    fs::write(&token_file, PROD_TOKEN).unwrap();
    clock.advance_ms(500);
    poller.poll_once();
    for _ in 0..8 {
        clock.advance_ms(500);
        poller.poll_once();
        assert_eq!(sink.current().unwrap().label, "DR", "overlay flickered");
    }

    clock.advance_ms(1000);
    poller.poll_once();
    let overlay = sink.snapshot();
    assert!(overlay.current.is_none());
    assert_eq!((overlay.shows, overlay.hides), (1, 1));
}

/// The DOM org name outranks the storage token once it appears
#[test]
fn test_org_name_outranks_token() {
    let dir = tempfile::tempdir().unwrap();
    let org_name_file = dir.path().join("org-name.txt");
    let token_file = dir.path().join("auth-token.json");
    fs::write(&token_file, DR_TOKEN).unwrap();
    fs::write(&org_name_file, "Wawanesa-Test\n").unwrap();

    let clock = ManualClock::new(None);
    let config = load_default_config().unwrap();
    let sink = MemoryBadgeSink::new();
    let mut poller = BadgePoller::new(
        config.build_chain(clock.now()).unwrap(),
        Box::new(sink.clone()),
        clock.clone(),
        config.poll_interval(),
    );
    poller
        .bind_source("org-name", Box::new(FileSignalSource::new(&org_name_file)))
        .unwrap();
    poller
        .bind_source("org-id", Box::new(FileSignalSource::new(&token_file)))
        .unwrap();

    poller.poll_once();
    clock.advance_ms(3000);
    poller.poll_once();
    let badge = sink.current().unwrap();
    assert_eq!((badge.label.as_str(), badge.color.as_str()), ("TEST", "orange"));
    assert_eq!(poller.chain().authority(), Some("org-name"));
}

/// The hostname lane takes the page URL as-is
#[test]
fn test_hostname_lane_reads_page_url() {
    let clock = ManualClock::new(None);
    let config = load_default_config().unwrap();
    let sink = MemoryBadgeSink::new();
    let mut poller = BadgePoller::new(
        config.build_chain(clock.now()).unwrap(),
        Box::new(sink.clone()),
        clock.clone(),
        config.poll_interval(),
    );
    poller
        .bind_source(
            "hostname",
            Box::new(StaticSignalSource::new(Some(
                "https://dr.mypurecloud.com/directory/#/".to_string(),
            ))),
        )
        .unwrap();

    poller.poll_once();
    clock.advance_ms(3000);
    poller.poll_once();
    let badge = sink.current().unwrap();
    assert_eq!((badge.label.as_str(), badge.color.as_str()), ("DR", "#ff0000"));
    assert_eq!(poller.chain().authority(), Some("hostname"));
}

/// Async loop picks up pushed signals and stops on shutdown
#[tokio::test(start_paused = true)]
async fn test_run_loop_until_shutdown() {
    let _ = env_logger::try_init();

    let config = load_config_from_str(
        r##"{
            "initial_suppress_ms": 0,
            "change_suppress_ms": 0,
            "poll_interval_ms": 100,
            "profiles": [
                { "name": "hostname", "strategy": { "kind": "exact" }, "environments": [
                    { "identifier": "dev.genesys.cloud", "label": "DEV", "color": "#0066cc" }
                ] }
            ]
        }"##,
    )
    .unwrap();

    let clock = ManualClock::new(None);
    let sink = MemoryBadgeSink::new();
    let mut poller = BadgePoller::new(
        config.build_chain(clock.now()).unwrap(),
        Box::new(sink.clone()),
        clock.clone(),
        config.poll_interval(),
    );
    let (signal_tx, source) = WatchSignalSource::channel("location");
    poller.bind_source("hostname", Box::new(source)).unwrap();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(poller.run(shutdown_rx));

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(sink.current().is_none());

    signal_tx.send(Some("dev.genesys.cloud".to_string())).unwrap();
    clock.advance_ms(250);
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(sink.current().unwrap().label, "DEV");

    shutdown_tx.send(true).unwrap();
    let stats = handle.await.unwrap();
    assert!(stats.polls >= 4);
    assert_eq!(stats.shows, 1);
    assert_eq!(stats.source_errors, 0);
}
