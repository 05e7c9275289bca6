use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use ethers::types::{Address, H256};
use log::info;

use stakeflow::prelude::*;
use stakeflow::{
    BalanceAsset, BalanceUpdate, BalanceView, FlowConfig, FlowKind, LifecycleTracker, LogNotifier,
    Network, SmartAccountProvider, TransferIntent, UserOperationHandle, UserOperationRequest,
};

/// In-memory smart account: confirms everything, but drops the first wait to
/// show the drop-and-replace path.
struct DemoProvider {
    fail_first_wait: AtomicBool,
}

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
        if self.fail_first_wait.swap(false, Ordering::SeqCst) {
            return Err(Error::Provider("bundler dropped the operation".to_string()));
        }
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

    let provider = Arc::new(DemoProvider {
        fail_first_wait: AtomicBool::new(true),
    });
    let config = FlowConfig::stake(Network::Sepolia).with_cooldown(Duration::from_millis(500));
    let tracker = Arc::new(LifecycleTracker::new(
        FlowKind::Stake,
        config,
        provider,
        Arc::new(LogNotifier),
    ));

    let mut status = tracker.subscribe();
    tokio::spawn(async move {
        while status.changed().await.is_ok() {
            info!("status: {}", *status.borrow());
        }
    });

    let mut view = BalanceView::new(Network::Sepolia.steth_address());
    view.apply(&BalanceUpdate {
        asset: BalanceAsset::Native,
        amount: 2.0,
        at: Utc::now(),
    });
    info!("available to stake: {} ETH", view.native_display());

    let result = tracker
        .submit(TransferIntent::stake("1", view.available_native()))
        .await
        .unwrap();

    println!("{}", serde_json::to_string_pretty(&result).unwrap());
    info!("track it at {}", result.explorer_url);

    // let the cooldown pass so the flow re-arms before exiting
    tokio::time::sleep(Duration::from_millis(600)).await;
    info!("flow status: {}", tracker.status());
}
