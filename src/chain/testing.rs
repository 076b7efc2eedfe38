//! Minimal JSON-RPC node for adapter and end-to-end tests.

use alloy::primitives::{Address, hex};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Serves `eth_blockNumber` and the sequencer/job `eth_call`s.
///
/// `workable` lists `(job, block)` pairs at which the job reports `canWork`.
/// Unpinned calls are answered as of `head`.
pub struct MockNode {
    pub head: u64,
    pub sequencer: Address,
    pub jobs: Vec<Address>,
    pub workable: Vec<(Address, u64)>,
}

impl MockNode {
    /// Mounts the node at `/` of `server`.
    pub async fn mount(self, server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(self)
            .mount(server)
            .await;
    }

    fn eth_call(&self, params: &Value) -> Result<String, String> {
        let tx = &params[0];
        let to: Address = tx["to"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .ok_or("missing call target")?;
        let input = tx["input"]
            .as_str()
            .or_else(|| tx["data"].as_str())
            .ok_or("missing calldata")?;
        let block = match params[1].as_str() {
            Some(tag) if tag.starts_with("0x") => {
                u64::from_str_radix(&tag[2..], 16).map_err(|e| e.to_string())?
            }
            _ => self.head,
        };

        if to == self.sequencer {
            // numJobs() has no arguments; jobAt(uint256) carries one word
            if input.len() == 10 {
                return Ok(word(self.jobs.len() as u64));
            }
            let index = u64::from_str_radix(&input[input.len() - 16..], 16)
                .map_err(|e| e.to_string())?;
            return self
                .jobs
                .get(index as usize)
                .map(|job| format!("{:0>64}", hex::encode(job)))
                .ok_or_else(|| "execution reverted: index out of range".to_string());
        }

        if self.jobs.contains(&to) {
            let can_work = self.workable.contains(&(to, block));
            return Ok(format!("{}{}{}", word(can_work as u64), word(64), word(0)));
        }

        Err(format!("no contract at {to}"))
    }
}

impl Respond for MockNode {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let id = body["id"].clone();
        let result = match body["method"].as_str().unwrap_or_default() {
            "eth_blockNumber" => Ok(format!("{:#x}", self.head)),
            "eth_chainId" => Ok("0x1".to_string()),
            "eth_call" => self.eth_call(&body["params"]).map(|data| format!("0x{data}")),
            other => Err(format!("method {other} not found")),
        };
        let reply = match result {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err(message) => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": 3, "message": message }
            }),
        };
        ResponseTemplate::new(200).set_body_json(reply)
    }
}

fn word(value: u64) -> String {
    format!("{value:064x}")
}
