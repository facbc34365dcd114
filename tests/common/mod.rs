use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("firstsat").expect("binary builds");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn add_agent(&self, name: &str, faction: &str) -> String {
        let out = self.run_json(&["agent", "add", name, "--faction", faction]);
        out["data"]["id"].as_str().expect("agent id").to_string()
    }

    pub fn add_item(&self, agent_id: &str, name: &str, qty: &str, direction: &str) {
        self.run_json(&[
            "item",
            "add",
            name,
            "--agent",
            agent_id,
            "--qty",
            qty,
            "--direction",
            direction,
        ]);
    }

    pub fn add_prize(&self, name: &str, qty: &str) -> String {
        let out = self.run_json(&["prize", "add", name, "--qty", qty]);
        out["data"]["id"].as_str().expect("prize id").to_string()
    }

    pub fn board(&self) -> Vec<Value> {
        self.run_json(&["exchange", "board"])["data"]
            .as_array()
            .expect("match array")
            .clone()
    }

    pub fn prizes(&self) -> Vec<Value> {
        self.run_json(&["prize", "list"])["data"]
            .as_array()
            .expect("prize array")
            .clone()
    }
}
