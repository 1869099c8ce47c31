use super::*;
use crate::ID;
use crate::registry::Player;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

/// Outbound channel of every connected socket.
///
/// Kept apart from the lobby so delivery never happens under the state
/// lock. A send to a closed channel is logged and otherwise ignored; the
/// disconnect event that follows cleans up.
#[derive(Debug, Default)]
pub struct Switchboard {
    players: RwLock<HashMap<ID<Player>, UnboundedSender<Notice>>>,
    commanders: RwLock<HashMap<ID<Commander>, UnboundedSender<Notice>>>,
}

impl Switchboard {
    pub async fn connect(&self, id: ID<Player>, outbox: UnboundedSender<Notice>) {
        self.players.write().await.insert(id, outbox);
        log::debug!("[switch] player {} connected", id.short());
    }
    pub async fn disconnect(&self, id: ID<Player>) {
        self.players.write().await.remove(&id);
        log::debug!("[switch] player {} disconnected", id.short());
    }
    pub async fn attach(&self, outbox: UnboundedSender<Notice>) -> ID<Commander> {
        let id = ID::default();
        self.commanders.write().await.insert(id, outbox);
        log::debug!("[switch] commander {} attached", id.short());
        id
    }
    pub async fn detach(&self, id: ID<Commander>) {
        self.commanders.write().await.remove(&id);
        log::debug!("[switch] commander {} detached", id.short());
    }
    pub async fn connected(&self) -> usize {
        self.players.read().await.len()
    }
}

impl Switchboard {
    /// Send every notice to its recipients, in order.
    pub async fn deliver(&self, notices: Vec<(Recipient, Notice)>) {
        if notices.is_empty() {
            return;
        }
        let players = self.players.read().await;
        let commanders = self.commanders.read().await;
        for (to, notice) in notices {
            log::debug!("[switch] {} <- {}", to, notice.to_json());
            match to {
                Recipient::Player(id) => match players.get(&id).map(|tx| tx.send(notice)) {
                    Some(Ok(())) => {}
                    Some(Err(e)) => log::warn!("[switch] unicast to {} failed: {:?}", id.short(), e),
                    None => log::debug!("[switch] unicast to {}: not connected", id.short()),
                },
                Recipient::Everyone => Self::broadcast(players.iter(), notice),
                Recipient::Commander => Self::broadcast(commanders.iter(), notice),
            }
        }
    }
    /// Direct line to one commander, for the roster on attach.
    pub async fn brief(&self, id: ID<Commander>, notice: Notice) {
        if let Some(Err(e)) = self.commanders.read().await.get(&id).map(|tx| tx.send(notice)) {
            log::warn!("[switch] brief to commander {} failed: {:?}", id.short(), e);
        }
    }
    fn broadcast<'a, T: 'a>(
        outboxes: impl Iterator<Item = (&'a ID<T>, &'a UnboundedSender<Notice>)>,
        notice: Notice,
    ) {
        outboxes.for_each(|(id, tx)| {
            if let Err(e) = tx.send(notice.clone()) {
                log::warn!("[switch] broadcast to {} failed: {:?}", id.short(), e);
            }
        });
    }
}
