use crate::error::{RostrumResult, TowerSessionSnafu};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tower_sessions::Session;

const FLASH_KEY: &str = "rostrum.flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashLevel {
    Success,
    Danger,
}

///One-shot notice, queued before a redirect and drained by the next rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

pub async fn push_flash(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> RostrumResult<()> {
    let mut pending: Vec<FlashMessage> = session
        .remove(FLASH_KEY)
        .await
        .context(TowerSessionSnafu)?
        .unwrap_or_default();
    pending.push(FlashMessage {
        level,
        message: message.into(),
    });

    session
        .insert(FLASH_KEY, pending)
        .await
        .context(TowerSessionSnafu)
}

pub async fn take_flashes(session: &Session) -> RostrumResult<Vec<FlashMessage>> {
    Ok(session
        .remove(FLASH_KEY)
        .await
        .context(TowerSessionSnafu)?
        .unwrap_or_default())
}
