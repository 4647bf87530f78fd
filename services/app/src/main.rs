use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod screens;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use client::api::{AuthApi, ClientApi, CouponApi};
use client::{ApiClient, ApiConfig, ExpiryNotifier, LoginRedirect, SessionStore};
use common::storage::{FileStore, StorageConfig};

/// Flags a forced logout so the event loop falls back to the login screen
pub struct SessionEnded {
    flag: AtomicBool,
}

impl SessionEnded {
    fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Read and reset the flag
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::SeqCst)
    }
}

impl LoginRedirect for SessionEnded {
    fn reset_to_login(&self) {
        self.flag.store(true, Ordering::SeqCst);
        println!("\nYour session has expired. Please log in again.");
    }
}

/// Application state shared across screens
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub auth: AuthApi,
    pub clients: ClientApi,
    pub coupons: CouponApi,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Keep the terminal clean; RUST_LOG still opens things up when needed
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting RepayKaro client");

    // Local persistence, the device-storage analog
    let storage_config = StorageConfig::from_env()?;
    let store = Arc::new(FileStore::new(&storage_config));
    let session = SessionStore::new(store);

    // Register the forced-logout handle before the first request can fire
    let notifier = ExpiryNotifier::new();
    let session_ended = Arc::new(SessionEnded::new());
    let redirect_handle: Arc<dyn LoginRedirect> = session_ended.clone();
    notifier.register(&redirect_handle);

    let api_config = ApiConfig::from_env()?;
    let api = ApiClient::new(&api_config, session.clone(), notifier)?;

    let state = AppState {
        session: session.clone(),
        auth: AuthApi::new(api.clone()),
        clients: ClientApi::new(api.clone()),
        coupons: CouponApi::new(api),
    };

    println!("RepayKaro — repay your loan, earn rewards");

    loop {
        if state.session.token().await.is_none() {
            if !screens::login(&state).await? {
                break;
            }
        }

        session_ended.take();
        if !screens::menu(&state, &session_ended).await? {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}
