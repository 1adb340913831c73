mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use w2w_core::rpc::Service;
use w2w_core::{CoreError, MessagesQuery, RpcError, SendOptions, Transfer, W2wClient};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let client = W2wClient::new(
        &args.host,
        args.wallet_port,
        args.daemon_port,
        Some(args.timeout_ms),
    )
    .context("configure RPC client")?;

    let config = client.config();
    tracing::debug!(
        scheme = %config.scheme(),
        host = config.host(),
        wallet_port = config.port(Service::Wallet),
        daemon_port = config.port(Service::Daemon),
        timeout_ms = config.timeout().as_millis() as u64,
        "client configured"
    );

    let reply = run(&client, args.command).await.map_err(|err| {
        let message = format_rpc_error(&args.host, &err);
        eyre!(message)
    })?;

    println!(
        "{}",
        serde_json::to_string_pretty(&reply).context("render reply as JSON")?
    );
    Ok(())
}

async fn run(client: &W2wClient, command: Command) -> Result<Value, CoreError> {
    match command {
        Command::Balance => client.balance().await,
        Command::Height => client.height().await,
        Command::Outputs => client.outputs().await,
        Command::Transfers => client.transfers().await,
        Command::Payments { payment_id } => client.payments(&payment_id).await,
        Command::Messages {
            first_tx_id,
            tx_limit,
        } => {
            client
                .messages(&MessagesQuery {
                    first_tx_id,
                    tx_limit,
                })
                .await
        }
        Command::Store => client.store().await,
        Command::Reset => client.reset().await,
        Command::Optimize => client.optimize().await,
        Command::Send {
            transfers,
            payment_id,
            mix_in,
            unlock_height,
            fee,
        } => {
            let transfers = transfers
                .iter()
                .map(|arg| parse_transfer(arg))
                .collect::<Result<Vec<_>, _>>()?;
            let options = SendOptions {
                transfers,
                payment_id,
                mix_in,
                unlock_height,
                fee,
            };
            client.send(&options).await
        }
        Command::Status => client.status().await,
        Command::Addresses => client.get_addresses().await,
        Command::CreateAddress => client.create_address().await,
        Command::DeleteAddress { address } => client.delete_address(&address).await,
        Command::ViewKey => client.get_view_secret_key().await,
        Command::SpendKeys { address } => client.get_spend_keys(&address).await,
        Command::Tx { hash } => client.get_transaction(&hash).await,
        Command::Count => client.count().await,
        Command::Info => client.info().await,
        Command::Index => client.index().await,
        Command::LastHeader => client.last_block_header().await,
        Command::Header { height } => client.block_header_by_height(height).await,
        Command::Block { hash } => client.block(&hash).await,
        Command::Pool => client.transaction_pool().await,
    }
}

/// Parse `ADDRESS:AMOUNT[:MESSAGE]`. The message may itself contain `:`.
fn parse_transfer(arg: &str) -> Result<Transfer, CoreError> {
    let mut parts = arg.splitn(3, ':');
    let (Some(address), Some(amount)) = (parts.next(), parts.next()) else {
        return Err(CoreError::Validation(format!(
            "transfer `{arg}` must be ADDRESS:AMOUNT[:MESSAGE]"
        )));
    };
    let amount = amount.parse::<u64>().map_err(|e| {
        CoreError::Validation(format!("transfer amount `{amount}` must be a raw integer: {e}"))
    })?;

    let transfer = Transfer::new(address, amount);
    Ok(match parts.next() {
        Some(message) => transfer.with_message(message),
        None => transfer,
    })
}

fn format_rpc_error(host: &str, err: &CoreError) -> String {
    let mut lines = vec![err.to_string()];

    match err {
        CoreError::Rpc(RpcError::Transport(source)) => {
            lines.push(format!("cause: {source}"));
            lines.push(format!(
                "hint: could not reach `{host}`; verify the host, ports, and that the daemon is running"
            ));
        }
        CoreError::Rpc(RpcError::Timeout) => {
            lines.push("hint: the daemon did not answer in time; raise --timeout-ms or check its load".into());
        }
        CoreError::Rpc(RpcError::InvalidResponse(_)) => {
            lines.push(
                "hint: the reply was not JSON; verify the port belongs to the expected service"
                    .into(),
            );
        }
        _ => {}
    }

    lines.join("\n")
}
