//! Runs `Effect`s off the event loop.
//!
//! Each effect becomes one tokio task that reports back exactly one
//! `Action` over the loop's channel. `Exit` never gets here: the loop
//! handles it itself.

use std::sync::{Arc, mpsc};

use log::{debug, warn};
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect};
use crate::store::ConfigStore;

/// Carries out one effect and returns the action that reports its result.
pub async fn perform(effect: Effect, store: Arc<dyn ConfigStore>) -> Option<Action> {
    match effect {
        Effect::InitSelector => Some(Action::SelectorReady),
        Effect::CheckConfig => Some(Action::ConfigChecked(store.exists().await)),
        Effect::FetchDefaultConfig => Some(Action::ConfigLoaded(store.fetch_default().await)),
        Effect::LoadConfig => Some(Action::ConfigLoaded(store.load().await)),
        Effect::PersistConfig(config) => {
            Some(Action::ConfigPersisted(store.persist(&config).await))
        }
        Effect::Reroll { pool, current } => {
            // ThreadRng is !Send; keep it inside this statement
            let rolled = pool.reroll(current, &mut rand::thread_rng());
            Some(Action::HeadingRolled(rolled))
        }
        Effect::ScheduleExit(delay) => {
            tokio::time::sleep(delay).await;
            Some(Action::ErrorDisplayElapsed)
        }
        Effect::Exit(_) => None,
    }
}

/// Spawns `effect` on the runtime, sending its result to `tx`.
pub fn spawn_effect(
    effect: Effect,
    store: Arc<dyn ConfigStore>,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    debug!("Spawning {:?}", effect);
    let handle = tokio::spawn(async move {
        if let Some(action) = perform(effect, store).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver effect result: receiver dropped");
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::heading::HeadingPool;
    use crate::core::locale::Locale;
    use crate::core::state::Outcome;
    use crate::store::{RcConfig, StoreError};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Store whose every operation fails.
    struct BrokenStore;

    #[async_trait]
    impl ConfigStore for BrokenStore {
        fn path(&self) -> Result<PathBuf, StoreError> {
            Err(StoreError::PathResolution)
        }

        async fn exists(&self) -> Result<bool, StoreError> {
            Err(StoreError::PathResolution)
        }

        async fn fetch_default(&self) -> Result<RcConfig, StoreError> {
            Err(StoreError::Network("unreachable".to_string()))
        }

        async fn load(&self) -> Result<RcConfig, StoreError> {
            Err(StoreError::Parse("bad".to_string()))
        }

        async fn persist(&self, _config: &RcConfig) -> Result<(), StoreError> {
            Err(StoreError::PathResolution)
        }
    }

    fn store() -> Arc<dyn ConfigStore> {
        Arc::new(BrokenStore)
    }

    #[tokio::test]
    async fn test_store_effects_report_their_errors() {
        assert!(matches!(
            perform(Effect::CheckConfig, store()).await,
            Some(Action::ConfigChecked(Err(StoreError::PathResolution)))
        ));
        assert!(matches!(
            perform(Effect::FetchDefaultConfig, store()).await,
            Some(Action::ConfigLoaded(Err(StoreError::Network(_))))
        ));
        assert!(matches!(
            perform(Effect::LoadConfig, store()).await,
            Some(Action::ConfigLoaded(Err(StoreError::Parse(_))))
        ));
        assert!(matches!(
            perform(Effect::PersistConfig(RcConfig::default()), store()).await,
            Some(Action::ConfigPersisted(Err(_)))
        ));
    }

    #[tokio::test]
    async fn test_reroll_effect_excludes_current() {
        let pool = HeadingPool::for_locale(Locale::En);
        for _ in 0..50 {
            let action = perform(Effect::Reroll { pool, current: Some(0) }, store()).await;
            match action {
                Some(Action::HeadingRolled(Ok(index))) => assert_ne!(index, 0),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_init_selector_reports_ready() {
        assert!(matches!(
            perform(Effect::InitSelector, store()).await,
            Some(Action::SelectorReady)
        ));
    }

    #[tokio::test]
    async fn test_schedule_exit_waits_for_delay() {
        let delay = Duration::from_millis(30);
        let started = tokio::time::Instant::now();
        let action = perform(Effect::ScheduleExit(delay), store()).await;
        assert!(matches!(action, Some(Action::ErrorDisplayElapsed)));
        assert!(started.elapsed() >= delay);
    }

    #[tokio::test]
    async fn test_exit_is_not_performed() {
        assert!(perform(Effect::Exit(Outcome::UserQuit), store()).await.is_none());
    }

    #[tokio::test]
    async fn test_spawned_effect_delivers_one_action() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_effect(Effect::InitSelector, store(), tx);
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        assert!(matches!(rx.try_recv(), Ok(Action::SelectorReady)));
        assert!(rx.try_recv().is_err());
    }
}
