//! Push-update channel transport
//!
//! Keeps a WebSocket open to the backend, decodes its frames into
//! [`PushEvent`]s and forwards them to the event loop. Reconnection is
//! handled here; the controller only sees `PushConnected` /
//! `PushDisconnected` notifications and resynchronises on its own.

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::config::{AppConfig, PushProtocol};
use crate::errors::{RaceDeckError, Result};
use crate::models::{AppEvent, PushEvent};

/// Event names understood by the dashboard
const KNOWN_EVENTS: [&str; 3] = ["console_update", "server_status_update", "players_update"];

/// A decoded push channel frame
#[derive(Debug, Clone, PartialEq)]
pub enum PushFrame {
    Event(PushEvent),
    /// Engine.IO handshake, answered with a namespace connect
    Open,
    /// Namespace joined; the channel is live
    Connected,
    /// Engine.IO heartbeat, answered with a pong
    Ping,
    /// Namespace connection refused by the backend
    Refused(String),
    Close,
    Ignored,
}

/// Decode one text frame according to the configured framing
pub fn decode_frame(protocol: PushProtocol, text: &str) -> Result<PushFrame> {
    match protocol {
        PushProtocol::Json => decode_json_envelope(text),
        PushProtocol::Socketio => decode_socketio(text),
    }
}

fn decode_json_envelope(text: &str) -> Result<PushFrame> {
    let value: Value = serde_json::from_str(text)?;
    let name = value
        .get("event")
        .and_then(Value::as_str)
        .ok_or_else(|| RaceDeckError::PushChannel("frame has no event name".to_string()))?
        .to_string();
    let data = value.get("data").cloned().unwrap_or(Value::Null);
    event_frame(&name, data)
}

fn decode_socketio(text: &str) -> Result<PushFrame> {
    let mut chars = text.chars();
    let engine_type = chars
        .next()
        .ok_or_else(|| RaceDeckError::PushChannel("empty frame".to_string()))?;
    let rest = chars.as_str();

    match engine_type {
        '0' => Ok(PushFrame::Open),
        '1' => Ok(PushFrame::Close),
        '2' => Ok(PushFrame::Ping),
        '3' | '6' => Ok(PushFrame::Ignored),
        '4' => decode_socketio_packet(rest),
        other => Err(RaceDeckError::PushChannel(format!(
            "unknown engine packet type '{}'",
            other
        ))),
    }
}

fn decode_socketio_packet(packet: &str) -> Result<PushFrame> {
    let mut chars = packet.chars();
    let packet_type = chars
        .next()
        .ok_or_else(|| RaceDeckError::PushChannel("empty socket.io packet".to_string()))?;
    let rest = chars.as_str();

    match packet_type {
        '0' => Ok(PushFrame::Connected),
        '1' => Ok(PushFrame::Close),
        '2' => {
            // Optional ack id precedes the payload array
            let payload = rest.trim_start_matches(|c: char| c.is_ascii_digit());
            let mut items: Vec<Value> = match serde_json::from_str(payload)? {
                Value::Array(items) => items,
                _ => {
                    return Err(RaceDeckError::PushChannel(
                        "event payload is not an array".to_string(),
                    ));
                }
            };
            if items.is_empty() {
                return Err(RaceDeckError::PushChannel("event without name".to_string()));
            }
            let data = if items.len() > 1 {
                items.swap_remove(1)
            } else {
                Value::Null
            };
            let name = items[0]
                .as_str()
                .ok_or_else(|| RaceDeckError::PushChannel("event name is not a string".to_string()))?
                .to_string();
            event_frame(&name, data)
        }
        '4' => Ok(PushFrame::Refused(rest.to_string())),
        _ => Ok(PushFrame::Ignored),
    }
}

fn event_frame(name: &str, data: Value) -> Result<PushFrame> {
    if !KNOWN_EVENTS.contains(&name) {
        log::trace!("Ignoring push event '{}'", name);
        return Ok(PushFrame::Ignored);
    }
    let envelope = serde_json::json!({ "event": name, "data": data });
    Ok(PushFrame::Event(serde_json::from_value(envelope)?))
}

/// Long-lived push channel connection with automatic reconnect
#[derive(Debug, Clone)]
pub struct PushChannel {
    url: String,
    protocol: PushProtocol,
    reconnect_delay: Duration,
}

impl PushChannel {
    pub fn new(url: impl Into<String>, protocol: PushProtocol, reconnect_delay: Duration) -> Self {
        Self {
            url: url.into(),
            protocol,
            reconnect_delay,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            config.push_url()?,
            config.push.protocol,
            config.reconnect_delay(),
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run the channel on its own task until the event receiver is dropped
    pub fn spawn(self, tx: mpsc::UnboundedSender<AppEvent>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(tx).await })
    }

    pub async fn run(self, tx: mpsc::UnboundedSender<AppEvent>) {
        loop {
            let mut connected = false;
            match self.session(&tx, &mut connected).await {
                Ok(()) => log::info!("Push channel {} closed", self.url),
                Err(e) => log::warn!("Push channel {}: {}", self.url, e),
            }

            if tx.is_closed() {
                return;
            }
            if connected && tx.send(AppEvent::PushDisconnected).is_err() {
                return;
            }

            tokio::time::sleep(self.reconnect_delay).await;
        }
    }

    async fn session(
        &self,
        tx: &mpsc::UnboundedSender<AppEvent>,
        connected: &mut bool,
    ) -> Result<()> {
        log::debug!("Connecting push channel to {}", self.url);
        let (ws_stream, _) = connect_async(self.url.as_str()).await?;
        let (mut ws_sender, mut ws_receiver) = ws_stream.split();

        if self.protocol == PushProtocol::Json {
            *connected = true;
            log::info!("Push channel connected");
            if tx.send(AppEvent::PushConnected).is_err() {
                return Ok(());
            }
        }

        while let Some(message) = ws_receiver.next().await {
            let text = match message? {
                Message::Text(text) => text,
                Message::Close(_) => return Ok(()),
                _ => continue,
            };

            let frame = match decode_frame(self.protocol, &text) {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!("Skipping malformed push frame {:?}: {}", text, e);
                    continue;
                }
            };

            let forwarded = match frame {
                PushFrame::Event(event) => tx.send(AppEvent::Push(event)).is_ok(),
                PushFrame::Open => {
                    ws_sender.send(Message::Text("40".to_string())).await?;
                    true
                }
                PushFrame::Connected => {
                    *connected = true;
                    log::info!("Push channel connected");
                    tx.send(AppEvent::PushConnected).is_ok()
                }
                PushFrame::Ping => {
                    ws_sender.send(Message::Text("3".to_string())).await?;
                    true
                }
                PushFrame::Refused(reason) => {
                    return Err(RaceDeckError::PushChannel(format!(
                        "namespace connection refused: {}",
                        reason
                    )));
                }
                PushFrame::Close => return Ok(()),
                PushFrame::Ignored => true,
            };

            if !forwarded {
                return Ok(());
            }
        }

        Ok(())
    }
}
