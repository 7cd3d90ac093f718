//! API response models for the game server backend

use serde::{Deserialize, Serialize};

use super::server::{PlayerEntry, ServerStatus};

/// `GET /api/server/{id}/console`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleResponse {
    pub logs: Vec<String>,
}

/// `GET /api/server/{id}/players`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<PlayerEntry>,
}

/// `GET /api/server/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: ServerStatus,
    /// Player count, only sent by backends that track it
    #[serde(default)]
    pub players: Option<usize>,
    #[serde(default)]
    pub uptime: Option<String>,
}

/// `POST /api/server/{id}/start` and `/stop`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_optional_fields() {
        let minimal: StatusResponse = serde_json::from_str(r#"{"status":"stopped"}"#).unwrap();
        assert_eq!(minimal.status, ServerStatus::Stopped);
        assert!(minimal.players.is_none());

        let full: StatusResponse =
            serde_json::from_str(r#"{"status":"running","players":3,"uptime":null}"#).unwrap();
        assert_eq!(full.players, Some(3));
        assert!(full.uptime.is_none());
    }

    #[test]
    fn test_players_response_keeps_order() {
        let body = r#"{"players":[
            {"name":"Kei","car":"ks_toyota_ae86","laptime":"--:--:---"},
            {"name":"Ryo","car":"wdts_s13","laptime":"1:02:345"}
        ]}"#;
        let parsed: PlayersResponse = serde_json::from_str(body).unwrap();
        let names: Vec<_> = parsed.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Kei", "Ryo"]);
    }
}
