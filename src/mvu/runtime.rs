use crate::controller::espn::client::LeaderboardFetcher;
use crate::error::AppError;
use crate::mvu::leaderboard::{Deps, LeaderboardModel, Msg, run_effect, update};

/// Runs one poll cycle: fetch, build, store. Drains effects until none are left.
///
/// # Errors
///
/// Will return `Err` when the fetch or the build fails. The model keeps the
/// previous leaderboard and records the error.
pub async fn run_cycle<F: LeaderboardFetcher>(
    model: &mut LeaderboardModel,
    deps: Deps<'_, F>,
) -> Result<(), AppError> {
    let mut effects = update(model, Msg::Poll);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps).await;
        match msg {
            Msg::Failed(e) => {
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}
