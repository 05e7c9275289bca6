use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::types::{Address, H256};
use log::info;

use stakeflow::prelude::*;
use stakeflow::{
    FlowConfig, FlowKind, LifecycleTracker, LogNotifier, Network, ReceiveAddress,
    SmartAccountProvider, TokenSelector, TransferIntent, UserOperationHandle,
    UserOperationRequest,
};

const RECIPIENT: &str = "0x1234567890123456789012345678901234567890";

/// In-memory smart account that confirms every operation
struct DemoProvider;

fn pseudo_hash() -> H256 {
    let mut bytes = [0u8; 32];
    bytes[..16].copy_from_slice(uuid::Uuid::new_v4().as_bytes());
    bytes[16..].copy_from_slice(uuid::Uuid::new_v4().as_bytes());
    H256::from(bytes)
}

#[async_trait]
impl SmartAccountProvider for DemoProvider {
    fn is_signed_in(&self) -> bool {
        true
    }

    fn is_ready(&self) -> bool {
        true
    }

    async fn address(&self) -> Result<Address> {
        Ok(Address::from_low_u64_be(0xfeed))
    }

    async fn send_user_operation(
        &self,
        request: UserOperationRequest,
    ) -> Result<UserOperationHandle> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(UserOperationHandle {
            op_hash: pseudo_hash(),
            request,
        })
    }

    async fn wait_for_transaction(&self, _handle: &UserOperationHandle) -> Result<H256> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(pseudo_hash())
    }

    async fn drop_and_replace(
        &self,
        handle: &UserOperationHandle,
    ) -> Result<UserOperationHandle> {
        Ok(UserOperationHandle {
            op_hash: pseudo_hash(),
            request: handle.request.clone(),
        })
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let provider = Arc::new(DemoProvider);

    let receive = ReceiveAddress::resolve(&*provider).await.unwrap();
    info!("deposit address: {} ({})", receive, receive.abbreviated());

    let config = FlowConfig::withdraw(Network::Sepolia).with_cooldown(Duration::from_millis(500));
    let tracker = LifecycleTracker::new(
        FlowKind::Withdraw,
        config,
        provider,
        Arc::new(LogNotifier),
    );

    let eth = tracker
        .submit(TransferIntent::withdraw(TokenSelector::Eth, RECIPIENT, "0.25"))
        .await
        .unwrap();
    println!("{}", serde_json::to_string_pretty(&eth).unwrap());

    // the flow re-arms only after the cooldown
    tokio::time::sleep(Duration::from_millis(600)).await;

    let steth = tracker
        .submit(TransferIntent::withdraw(TokenSelector::Steth, RECIPIENT, "10"))
        .await
        .unwrap();
    println!("{}", serde_json::to_string_pretty(&steth).unwrap());
    info!("track it at {}", steth.explorer_url);
}
