use poker_ledger_cli::run;
use std::path::PathBuf;

/// Scratch directory for one test, removed on drop
struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "poker-ledger-cli-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    /// Run one command against this workspace, returning (code, stdout, stderr)
    fn run(&self, args: &[&str]) -> (i32, String, String) {
        let config = self.dir.join("poker-ledger.toml");
        let data = self.dir.join("data");
        let mut argv: Vec<String> = vec![
            "poker-ledger".to_string(),
            "--config".to_string(),
            config.display().to_string(),
            "--data-dir".to_string(),
            data.display().to_string(),
        ];
        argv.extend(args.iter().map(|s| s.to_string()));

        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let code = run(argv, &mut out, &mut err);
        (
            code,
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
        )
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn help_lists_screen_commands() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["poker-ledger", "--help"], &mut out, &mut err);

    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    for cmd in ["players", "buy-ins", "chips", "summary", "new-game"] {
        assert!(stdout.contains(cmd), "help should list subcommand `{}`", cmd);
    }
}

#[test]
fn first_run_writes_default_config() {
    let ws = Workspace::new("config");
    let (code, stdout, _) = ws.run(&["buy-ins", "amount"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Buy-In Amount: $10.00"));
    assert!(ws.dir.join("poker-ledger.toml").exists());
}

#[test]
fn players_add_and_list() {
    let ws = Workspace::new("players");
    assert_eq!(ws.run(&["players", "add", "Alice"]).0, 0);
    assert_eq!(ws.run(&["players", "add", "Bob"]).0, 0);

    let (code, stdout, _) = ws.run(&["players", "list"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Alice\nBob\n");
}

#[test]
fn duplicate_player_is_rejected() {
    let ws = Workspace::new("duplicate");
    ws.run(&["players", "add", "alice"]);

    let (code, _, stderr) = ws.run(&["players", "add", "Alice"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Player already exists"));

    let (_, stdout, _) = ws.run(&["players", "list"]);
    assert_eq!(stdout, "alice\n");
}

#[test]
fn invalid_amount_is_rejected() {
    let ws = Workspace::new("invalid-amount");
    ws.run(&["players", "add", "Alice"]);

    let (code, _, stderr) = ws.run(&["chips", "set", "Alice", ".5"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid amount"));

    let (code, _, _) = ws.run(&["buy-ins", "amount", "-5"]);
    assert_ne!(code, 0);
    let (_, stdout, _) = ws.run(&["buy-ins", "amount"]);
    assert!(stdout.contains("$10.00"));
}

#[test]
fn game_night_summary() {
    let ws = Workspace::new("summary");
    ws.run(&["players", "add", "Alice"]);
    ws.run(&["players", "add", "Bob"]);
    ws.run(&["buy-ins", "amount", "20"]);
    ws.run(&["buy-ins", "add", "Bob"]);
    ws.run(&["chips", "set", "Alice", "45.5"]);
    ws.run(&["chips", "set", "Bob", "14.5"]);

    let (code, stdout, _) = ws.run(&["summary", "--copy"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Alice: +25.50\nBob: -25.50\n");

    let (_, stdout, _) = ws.run(&["summary"]);
    assert!(stdout.contains("PENDING"));
    assert!(stdout.contains("(settled)"));

    let (_, stdout, _) = ws.run(&["summary", "check", "alice"]);
    assert!(stdout.contains("PAID"));
}

#[test]
fn summary_json_output() {
    let ws = Workspace::new("json");
    ws.run(&["players", "add", "Alice"]);
    ws.run(&["chips", "set", "Alice", "7"]);

    let (code, stdout, _) = ws.run(&["--json", "summary"]);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total_balance_in_cents"], -300);
    assert_eq!(value["players"][0]["diff_in_cents"], -300);
}

#[test]
fn buy_in_remove_floors_at_one() {
    let ws = Workspace::new("floor");
    ws.run(&["players", "add", "Alice"]);

    let (code, stdout, _) = ws.run(&["buy-ins", "remove", "Alice"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("x1"));
}

#[test]
fn new_game_keeps_players() {
    let ws = Workspace::new("new-game");
    ws.run(&["players", "add", "Alice"]);
    ws.run(&["buy-ins", "add", "Alice"]);
    ws.run(&["chips", "set", "Alice", "30"]);

    let (code, stdout, _) = ws.run(&["new-game"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Kept 1 player(s)"));

    let (_, stdout, _) = ws.run(&["chips", "list"]);
    assert!(stdout.contains("$0.00"));
    let (_, stdout, _) = ws.run(&["buy-ins", "list"]);
    assert!(stdout.contains("x1"));
}
