use common::types::BlockInfo;
use execution::rpc::mock_rpc::MockRpc;
use execution::rpc::ChainRpc;

fn create_rpc() -> MockRpc {
    MockRpc::new("testdata/").unwrap()
}

#[tokio::test]
async fn test_get_block_number() {
    let rpc = create_rpc();
    assert_eq!(rpc.get_block_number().await.unwrap(), 20);
}

#[tokio::test]
async fn test_get_block() {
    let rpc = create_rpc();

    let genesis = rpc.get_block(1).await.unwrap();
    assert_eq!(genesis, BlockInfo::new(1, 1438269989));
    assert_eq!(genesis.date().to_rfc3339(), "2015-07-30T15:26:29+00:00");

    let zero = rpc.get_block(0).await.unwrap();
    assert_eq!(zero.timestamp, 0);
}

#[tokio::test]
async fn test_get_block_out_of_range() {
    let rpc = create_rpc();

    let err = rpc.get_block(21).await.unwrap_err();
    assert!(err.to_string().contains("block 21 not found"));
}

#[tokio::test]
async fn test_request_count() {
    let rpc = create_rpc();

    rpc.get_block_number().await.unwrap();
    rpc.get_block(3).await.unwrap();
    let _ = rpc.get_block(100).await;

    assert_eq!(rpc.request_count(), 3);
}

#[tokio::test]
async fn test_empty_chain() {
    let rpc = MockRpc::from_timestamps(vec![]);
    assert!(rpc.get_block_number().await.is_err());
}
