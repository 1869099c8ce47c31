use super::*;
use crate::ID;
use crate::records::*;
use crate::registry::Player;
use crate::session::Choice;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::MutexGuard;
use tokio::sync::mpsc::UnboundedSender;

/// Async shell around the [`Lobby`].
///
/// Each event takes the lobby lock, runs the synchronous handler, and hands
/// its notices to the switchboard before letting go, so every recipient
/// sees notices in the order the lobby produced them. Records are written
/// after the lock is released. Deferred work becomes its own task that
/// sleeps first and then takes the lock fresh, so a pending round pause
/// never blocks player events.
#[derive(Clone)]
pub struct Host {
    lobby: Arc<Mutex<Lobby>>,
    switchboard: Arc<Switchboard>,
    recorder: Arc<dyn Recorder>,
}

impl Host {
    pub fn new(config: Config, recorder: Arc<dyn Recorder>) -> Self {
        log::info!(
            "[host] {} tournament, {} schedule, {} payoffs",
            config.mode,
            config.policy,
            config.escalation
        );
        Self {
            lobby: Arc::new(Mutex::new(Lobby::new(config))),
            switchboard: Arc::new(Switchboard::default()),
            recorder,
        }
    }
    pub fn lobby(&self) -> &Arc<Mutex<Lobby>> {
        &self.lobby
    }
    pub fn switchboard(&self) -> &Arc<Switchboard> {
        &self.switchboard
    }
}

impl Host {
    /// A player socket opened.
    pub async fn join(&self, id: ID<Player>, name: &str, outbox: UnboundedSender<Notice>) {
        self.switchboard.connect(id, outbox).await;
        let mut lobby = self.lobby.lock().await;
        let effects = lobby.join(id, name);
        self.apply(lobby, effects).await;
    }
    /// A player socket closed.
    pub async fn leave(&self, id: ID<Player>) {
        let mut lobby = self.lobby.lock().await;
        let effects = lobby.leave(id);
        self.switchboard.disconnect(id).await;
        self.apply(lobby, effects).await;
    }
    pub async fn play(&self, id: ID<Player>, choice: Choice) {
        let mut lobby = self.lobby.lock().await;
        let effects = lobby.play(id, choice);
        self.apply(lobby, effects).await;
    }
    /// A commander socket opened. It is sent the roster straight away.
    pub async fn attach(&self, outbox: UnboundedSender<Notice>) -> ID<Commander> {
        let lobby = self.lobby.lock().await;
        let id = self.switchboard.attach(outbox).await;
        self.switchboard.brief(id, lobby.roster()).await;
        id
    }
    pub async fn detach(&self, id: ID<Commander>) {
        self.switchboard.detach(id).await;
    }
    pub async fn start(&self) {
        let mut lobby = self.lobby.lock().await;
        let effects = lobby.start();
        self.apply(lobby, effects).await;
    }
}

impl Host {
    /// Deliver under the lobby guard, then release it for the slow work.
    async fn apply(&self, lobby: MutexGuard<'_, Lobby>, effects: Effects) {
        let Effects {
            notices,
            games,
            scores,
            deferred,
        } = effects;
        self.switchboard.deliver(notices).await;
        drop(lobby);
        self.record(games, scores).await;
        deferred.into_iter().for_each(|d| self.schedule(d));
    }
    /// Hand records to the sink on the blocking pool. A failing sink is
    /// logged and the tournament carries on.
    async fn record(&self, games: Vec<GameRecord>, scores: Vec<ScoreRecord>) {
        if games.is_empty() && scores.is_empty() {
            return;
        }
        let recorder = self.recorder.clone();
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            games.iter().try_for_each(|g| recorder.game(g))?;
            recorder.scores(&scores)
        })
        .await
        .map_err(anyhow::Error::from)
        .and_then(|result| result)
        .inspect_err(|e| log::warn!("[host] recording failed: {}", e))
        .ok();
    }
    fn schedule(&self, deferred: Deferred) {
        let host = self.clone();
        log::debug!("[host] deferred {:?}", deferred);
        tokio::spawn(async move {
            if let Deferred::Advance { delay, .. } = deferred {
                tokio::time::sleep(delay).await;
            }
            let mut lobby = host.lobby.lock().await;
            let effects = match deferred {
                Deferred::Advance { from, .. } => lobby.advance(from),
                Deferred::Rematch => lobby.rematch(),
            };
            host.apply(lobby, effects).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::unbounded_channel;

    /// Wait for the first notice matching `f`, skipping the rest.
    async fn expect<F>(rx: &mut UnboundedReceiver<Notice>, f: F) -> Notice
    where
        F: Fn(&Notice) -> bool,
    {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                match rx.recv().await {
                    Some(notice) if f(&notice) => return notice,
                    Some(_) => continue,
                    None => panic!("outbox closed"),
                }
            }
        })
        .await
        .expect("notice within timeout")
    }
    /// Like `expect`, but keeps every notice seen on the way.
    async fn collect<F>(rx: &mut UnboundedReceiver<Notice>, seen: &mut Vec<Notice>, f: F) -> Notice
    where
        F: Fn(&Notice) -> bool,
    {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                match rx.recv().await {
                    Some(notice) => {
                        seen.push(notice.clone());
                        if f(&notice) {
                            return notice;
                        }
                    }
                    None => panic!("outbox closed"),
                }
            }
        })
        .await
        .expect("notice within timeout")
    }

    #[tokio::test]
    async fn concurrent_joins_never_double_pair() {
        let n = 25;
        let config = Config {
            seed: Some(17),
            ..Config::dynamic()
        };
        let host = Host::new(config, Arc::new(Memory::default()));
        let mut inboxes = Vec::new();
        let mut tasks = Vec::new();
        for i in 0..n {
            let (tx, rx) = unbounded_channel();
            let id = ID::<Player>::default();
            inboxes.push((id, rx));
            let host = host.clone();
            tasks.push(tokio::spawn(async move {
                host.join(id, &format!("p{}", i), tx).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        host.start().await;
        let lobby = host.lobby().lock().await;
        let mut seen = HashSet::new();
        for session in lobby.sessions() {
            for id in session.seats() {
                assert!(seen.insert(id), "player in two pairings");
            }
        }
        assert_eq!(lobby.sessions().count(), n / 2);
        assert_eq!(lobby.registry().pool().len(), n % 2);
        drop(lobby);
        assert_eq!(seen.len(), n - n % 2);
        for (id, rx) in inboxes.iter_mut().filter(|(id, _)| seen.contains(id)) {
            let notice = expect(rx, |n| matches!(n, Notice::SessionStarted { .. })).await;
            assert!(matches!(notice, Notice::SessionStarted { round: None, .. }), "{}", id);
        }
    }

    #[tokio::test]
    async fn fixed_tournament_end_to_end() {
        let memory = Arc::new(Memory::default());
        let host = Host::new(Config::instant(23), memory.clone());
        let (a, b) = (ID::<Player>::default(), ID::<Player>::default());
        let (tx_a, mut rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        let (tx_c, mut rx_c) = unbounded_channel();
        host.attach(tx_c).await;
        host.join(a, "alice", tx_a).await;
        host.join(b, "bob", tx_b).await;
        expect(&mut rx_c, |n| matches!(n, Notice::Roster { players } if players.len() == 2)).await;

        host.start().await;
        expect(&mut rx_a, |n| matches!(n, Notice::SessionStarted { .. })).await;
        expect(&mut rx_b, |n| matches!(n, Notice::SessionStarted { .. })).await;
        let (first, second) = {
            let lobby = host.lobby().lock().await;
            let session = lobby.session_of(a).expect("seated");
            (session.seat(Role::First), session.seat(Role::Second))
        };

        host.play(first, Choice::Continue).await;
        host.play(second, Choice::Take).await;
        let over = match first == a {
            true => expect(&mut rx_a, |n| matches!(n, Notice::GameOver { .. })).await,
            false => expect(&mut rx_b, |n| matches!(n, Notice::GameOver { .. })).await,
        };
        assert!(matches!(
            over,
            Notice::GameOver { your_score: 2, opponents_score: 1, total_score: 2, .. }
        ));

        let games = memory.games();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].payoff, crate::payoff::Payoff::from((2, 1)));
        assert_eq!(memory.score(first).map(|s| s.score), Some(2));
        assert_eq!(memory.score(second).map(|s| s.score), Some(1));

        expect(&mut rx_c, |n| {
            matches!(n, Notice::Message { text } if text.starts_with("Tournament complete"))
        })
        .await;
        let lobby = host.lobby().lock().await;
        assert_eq!(lobby.director().index(), None);
        assert_eq!(lobby.registry().pool().len(), 2);
    }

    #[tokio::test]
    async fn disconnect_notifies_survivor() {
        let host = Host::new(Config::instant(5), Arc::new(Memory::default()));
        let (a, b) = (ID::<Player>::default(), ID::<Player>::default());
        let (tx_a, _rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        host.join(a, "alice", tx_a).await;
        host.join(b, "bob", tx_b).await;
        host.start().await;
        host.leave(a).await;
        let text = crate::Rejection::OpponentGone(a).to_string();
        expect(&mut rx_b, |n| *n == Notice::message(text.clone())).await;
        assert_eq!(host.switchboard().connected().await, 1);
        assert!(host.lobby().lock().await.session_of(b).is_none());
    }

    #[tokio::test]
    async fn game_over_precedes_next_round() {
        let host = Host::new(Config::instant(31), Arc::new(Memory::default()));
        let mut players = Vec::new();
        for i in 0..4 {
            let (tx, rx) = unbounded_channel();
            let id = ID::<Player>::default();
            host.join(id, &format!("p{}", i), tx).await;
            players.push((id, rx, Vec::new()));
        }
        host.start().await;
        for round in 0..3 {
            for (id, rx, seen) in players.iter_mut() {
                let started = collect(rx, seen, |n| {
                    matches!(n, Notice::SessionStarted { round: r, .. } if *r == Some(round))
                })
                .await;
                if let Notice::SessionStarted { your_turn: true, .. } = started {
                    host.play(*id, Choice::Take).await;
                }
            }
        }
        for (_, rx, seen) in players.iter_mut() {
            collect(rx, seen, |n| {
                matches!(n, Notice::Message { text } if text.starts_with("All rounds complete"))
            })
            .await;
            let order = seen
                .iter()
                .filter_map(|n| match n {
                    Notice::SessionStarted { .. } => Some('s'),
                    Notice::GameOver { .. } => Some('g'),
                    _ => None,
                })
                .collect::<String>();
            assert_eq!(order, "sgsgsg");
        }
    }
}
