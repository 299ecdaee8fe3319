//! Discord gateway client.
//!
//! Slash command interactions are delivered over the gateway websocket, so
//! the bot keeps one session open for the process lifetime. The client only
//! does what receiving interactions needs: HELLO, IDENTIFY, heartbeats and
//! `INTERACTION_CREATE` dispatches. Sessions are never resumed; after a drop
//! a fresh session is identified following an exponential backoff delay.
//!
//! # Session Lifecycle
//!
//! 1. **Connect**: open the websocket and wait for HELLO (op 10)
//! 2. **Identify**: send IDENTIFY (op 2) with the bot token and intents
//! 3. **Loop**: heartbeat every `heartbeat_interval`, forward interactions
//! 4. **End**: server close, RECONNECT (op 7), INVALID SESSION (op 9), or a
//!    heartbeat still unacknowledged when the next one is due

use std::time::Duration;

use futures_util::{SinkExt, Stream, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio::time::{interval_at, sleep, Instant};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, trace, warn};

use crate::error::{Error, Result};

use super::interaction::Interaction;

/// Default gateway URL (API v10, JSON encoding).
pub const DEFAULT_GATEWAY_URL: &str = "wss://gateway.discord.gg/?v=10&encoding=json";

/// `GUILDS` intent; interactions need no privileged intents.
pub const INTENT_GUILDS: u64 = 1 << 0;

const OP_DISPATCH: u8 = 0;
const OP_HEARTBEAT: u8 = 1;
const OP_IDENTIFY: u8 = 2;
const OP_RECONNECT: u8 = 7;
const OP_INVALID_SESSION: u8 = 9;
const OP_HELLO: u8 = 10;
const OP_HEARTBEAT_ACK: u8 = 11;

/// Close codes after which reconnecting cannot succeed.
const FATAL_CLOSE_CODES: [u16; 6] = [4004, 4010, 4011, 4012, 4013, 4014];

/// A raw gateway payload.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayPayload {
    pub op: u8,
    #[serde(default)]
    pub d: Value,
    #[serde(default)]
    pub s: Option<u64>,
    #[serde(default)]
    pub t: Option<String>,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Transient end; a new session should be started.
    Reconnect,
    /// Permanent failure such as a rejected token.
    Fatal(String),
}

/// Exponential reconnect delay.
#[derive(Debug, Clone)]
pub struct Backoff {
    initial: Duration,
    max: Duration,
    multiplier: f64,
    current: Duration,
}

impl Backoff {
    #[must_use]
    pub fn new(initial: Duration, max: Duration, multiplier: f64) -> Self {
        Self {
            initial,
            max,
            multiplier,
            current: initial,
        }
    }

    /// Delay to wait now; grows the next one, never past `max`.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = Duration::try_from_secs_f64(self.current.as_secs_f64() * self.multiplier)
            .unwrap_or(self.max)
            .min(self.max);
        delay
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(60), 2.0)
    }
}

/// Build the IDENTIFY payload.
#[must_use]
pub fn identify_payload(token: &str, intents: u64) -> Value {
    json!({
        "op": OP_IDENTIFY,
        "d": {
            "token": token,
            "intents": intents,
            "properties": {
                "os": std::env::consts::OS,
                "browser": env!("CARGO_PKG_NAME"),
                "device": env!("CARGO_PKG_NAME"),
            },
        },
    })
}

/// Build a heartbeat carrying the last sequence number seen.
#[must_use]
pub fn heartbeat_payload(last_seq: Option<u64>) -> Value {
    json!({ "op": OP_HEARTBEAT, "d": last_seq })
}

/// Gateway client forwarding interactions into a channel.
pub struct GatewayClient {
    url: String,
    token: String,
    intents: u64,
    backoff: Backoff,
}

impl GatewayClient {
    #[must_use]
    pub fn new(url: impl Into<String>, token: impl Into<String>, backoff: Backoff) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            intents: INTENT_GUILDS,
            backoff,
        }
    }

    /// Keep a session open until a fatal close or until `events` is closed.
    pub async fn run(mut self, events: mpsc::UnboundedSender<Interaction>) {
        loop {
            match self.run_session(&events).await {
                Ok(SessionEnd::Fatal(reason)) => {
                    error!(reason = %reason, "Discord gateway rejected the session, giving up");
                    return;
                }
                Ok(SessionEnd::Reconnect) => {
                    info!("Discord gateway session ended");
                    self.backoff.reset();
                }
                Err(e) => warn!(error = %e, "Discord gateway session failed"),
            }

            if events.is_closed() {
                return;
            }

            let delay = self.backoff.next_delay();
            info!(delay_ms = delay.as_millis() as u64, "Reconnecting to Discord gateway");
            sleep(delay).await;
        }
    }

    /// Run one gateway session.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection, the handshake, or a send fails.
    pub async fn run_session(
        &self,
        events: &mpsc::UnboundedSender<Interaction>,
    ) -> Result<SessionEnd> {
        info!(url = %self.url, "Connecting to Discord gateway");
        let (ws, response) = connect_async(&self.url).await?;
        debug!(status = %response.status(), "Discord gateway connected");

        let (mut write, mut read) = ws.split();

        let period = read_hello(&mut read).await?;
        write
            .send(Message::Text(identify_payload(&self.token, self.intents).to_string()))
            .await?;

        let mut heartbeat = interval_at(Instant::now() + period, period);
        let mut last_seq: Option<u64> = None;
        let mut awaiting_ack = false;

        loop {
            tokio::select! {
                _ = heartbeat.tick() => {
                    if awaiting_ack {
                        warn!("Discord gateway missed a heartbeat ACK, reconnecting");
                        return Ok(SessionEnd::Reconnect);
                    }
                    trace!(?last_seq, "Sending heartbeat");
                    write
                        .send(Message::Text(heartbeat_payload(last_seq).to_string()))
                        .await?;
                    awaiting_ack = true;
                }
                frame = read.next() => {
                    let text = match frame {
                        Some(Ok(Message::Text(text))) => text,
                        Some(Ok(Message::Ping(data))) => {
                            write.send(Message::Pong(data)).await?;
                            continue;
                        }
                        Some(Ok(Message::Close(frame))) => {
                            let code = frame.as_ref().map(|f| u16::from(f.code));
                            let reason = frame
                                .as_ref()
                                .map(|f| f.reason.to_string())
                                .unwrap_or_default();
                            info!(?code, reason = %reason, "Discord gateway closed");
                            return Ok(close_outcome(code, reason));
                        }
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => return Err(e.into()),
                        None => return Ok(SessionEnd::Reconnect),
                    };

                    let payload: GatewayPayload = match serde_json::from_str(&text) {
                        Ok(payload) => payload,
                        Err(e) => {
                            warn!(error = %e, bytes = text.len(), "Failed to parse gateway payload");
                            continue;
                        }
                    };
                    if payload.s.is_some() {
                        last_seq = payload.s;
                    }

                    match payload.op {
                        OP_DISPATCH => forward_dispatch(payload, events),
                        OP_HEARTBEAT => {
                            write
                                .send(Message::Text(heartbeat_payload(last_seq).to_string()))
                                .await?;
                        }
                        OP_HEARTBEAT_ACK => {
                            trace!("Heartbeat acknowledged");
                            awaiting_ack = false;
                        }
                        OP_RECONNECT => {
                            info!("Discord requested a reconnect");
                            return Ok(SessionEnd::Reconnect);
                        }
                        OP_INVALID_SESSION => {
                            warn!("Discord invalidated the session");
                            return Ok(SessionEnd::Reconnect);
                        }
                        other => debug!(op = other, "Ignoring gateway opcode"),
                    }
                }
            }
        }
    }
}

/// Wait for HELLO and return the heartbeat period.
async fn read_hello<S>(read: &mut S) -> Result<Duration>
where
    S: Stream<Item = std::result::Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    while let Some(frame) = read.next().await {
        let Message::Text(text) = frame? else {
            continue;
        };
        let payload: GatewayPayload = serde_json::from_str(&text)?;
        if payload.op != OP_HELLO {
            return Err(Error::Connection(format!(
                "expected HELLO from Discord gateway, got op {}",
                payload.op
            )));
        }
        return heartbeat_interval(&payload.d).map(Duration::from_millis);
    }

    Err(Error::Connection(
        "Discord gateway closed before HELLO".to_string(),
    ))
}

fn heartbeat_interval(hello: &Value) -> Result<u64> {
    hello
        .get("heartbeat_interval")
        .and_then(Value::as_u64)
        .filter(|ms| *ms > 0)
        .ok_or_else(|| Error::Parse(format!("HELLO without heartbeat_interval: {hello}")))
}

fn close_outcome(code: Option<u16>, reason: String) -> SessionEnd {
    match code {
        Some(code) if FATAL_CLOSE_CODES.contains(&code) => {
            SessionEnd::Fatal(format!("close code {code}: {reason}"))
        }
        _ => SessionEnd::Reconnect,
    }
}

fn forward_dispatch(payload: GatewayPayload, events: &mpsc::UnboundedSender<Interaction>) {
    match payload.t.as_deref() {
        Some("READY") => {
            let user = payload
                .d
                .pointer("/user/username")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            info!(user, "Logged in to Discord");
        }
        Some("INTERACTION_CREATE") => match serde_json::from_value::<Interaction>(payload.d) {
            Ok(interaction) => {
                if events.send(interaction).is_err() {
                    warn!("Discord interaction channel closed");
                }
            }
            Err(e) => warn!(error = %e, "Failed to parse interaction"),
        },
        Some(other) => trace!(event = other, "Ignoring gateway dispatch"),
        None => {}
    }
}
