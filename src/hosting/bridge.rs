use crate::ID;
use crate::lobby::*;
use crate::registry::Player;
use super::ClientMessage;
use futures::StreamExt;
use tokio::sync::mpsc::unbounded_channel;

/// Pumps one WebSocket to and from the [`Host`].
///
/// Outbound notices arrive on an unbounded channel registered with the
/// switchboard; inbound text is parsed and forwarded as lobby events. The
/// loop ends on close, on a stream error, or when the outbox is dropped,
/// and the disconnect is reported exactly once on the way out.
pub struct Bridge;

impl Bridge {
    /// Player socket. Joins on connect and leaves on close.
    pub async fn player(
        host: Host,
        name: Option<String>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        let id = ID::<Player>::default();
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("player-{}", id.short()));
        let (tx, mut rx) = unbounded_channel::<Notice>();
        host.join(id, &name, tx).await;
        log::info!("[bridge {}] {} connected", id.short(), name);
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    notice = rx.recv() => match notice {
                        Some(notice) => if session.text(notice.to_json()).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => match ClientMessage::try_from(text.to_string().as_str()) {
                            Ok(ClientMessage::Move(choice)) => host.play(id, choice).await,
                            Ok(ClientMessage::Start) => log::debug!("[bridge {}] start ignored from player", id.short()),
                            Err(e) => if session.text(Notice::message(e).to_json()).await.is_err() { break 'sesh },
                        },
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            host.leave(id).await;
            let _ = session.close(None).await;
            log::info!("[bridge {}] {} disconnected", id.short(), name);
        });
    }
    /// Commander socket. Receives the roster on connect; `start` begins
    /// the tournament.
    pub async fn commander(
        host: Host,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        let (tx, mut rx) = unbounded_channel::<Notice>();
        let id = host.attach(tx).await;
        log::info!("[bridge {}] commander connected", id.short());
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    notice = rx.recv() => match notice {
                        Some(notice) => if session.text(notice.to_json()).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => match ClientMessage::try_from(text.to_string().as_str()) {
                            Ok(ClientMessage::Start) => host.start().await,
                            Ok(ClientMessage::Move(_)) => log::debug!("[bridge {}] move ignored from commander", id.short()),
                            Err(e) => if session.text(Notice::message(e).to_json()).await.is_err() { break 'sesh },
                        },
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            host.detach(id).await;
            let _ = session.close(None).await;
            log::info!("[bridge {}] commander disconnected", id.short());
        });
    }
}
