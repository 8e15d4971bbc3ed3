use std::io;

use stockledger_cli::{CliConfig, Session};
use stockledger_inventory::Ledger;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    stockledger_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Ledger::new(), config, stdin.lock(), stdout.lock());

    session.autoload()?;
    session.run()
}
