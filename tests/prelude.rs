use dater::prelude::*;

fn create_dater() -> Dater<MockRpc> {
    // 12 second blocks from 2021-01-01
    let mut timestamps = vec![0];
    timestamps.extend((0..50_000u64).map(|n| 1_609_459_200 + n * 12));
    Dater::with_defaults(MockRpc::from_timestamps(timestamps))
}

#[tokio::test]
async fn test_locate_through_prelude() {
    let dater = create_dater();

    let block = dater
        .locate("2021-01-02T00:00:00Z", BlockPosition::After)
        .await
        .unwrap();

    assert_eq!(block.height(), 7201);
    assert_eq!(block.timestamp(), 1_609_545_600);
    assert_eq!(block.seconds_from_target, 0);
}

#[tokio::test]
async fn test_resolved_block_json() {
    let dater = create_dater();

    let block = dater
        .locate("2021-01-02T00:00:00Z", BlockPosition::After)
        .await
        .unwrap();
    let json = serde_json::to_value(block).unwrap();

    assert_eq!(json["block"]["number"], 7201);
    assert_eq!(json["block"]["date"], "2021-01-02T00:00:00Z");
    assert_eq!(json["secondsFromTarget"], 0);
    assert!(json["retries"].is_u64());
}

#[tokio::test]
async fn test_errors_through_prelude() {
    let dater = create_dater();

    let err = dater
        .resolve_range("2021-01-02", "2021-01-01", 60, BlockPosition::After)
        .await
        .unwrap_err();

    assert!(matches!(err, DaterError::InvalidRange { .. }));
}
