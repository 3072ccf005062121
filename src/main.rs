#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use wordle_client::{
    cli::{parse_line, pick_index, Command, HELP},
    init_logging, ui, GameClient, GameSession, HttpService, DEFAULT_PAGE_LIMIT,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against a remote word-evaluation server.
    Play {
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        server: String,
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT, help = "Suggestions fetched per page")]
        page_size: usize,
        #[arg(long, default_value_t = 30, help = "Per-request timeout in seconds")]
        timeout_secs: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            server,
            page_size,
            timeout_secs,
        } => {
            log::info!("connecting to {}", server);
            let service = HttpService::with_timeout(server, Duration::from_secs(timeout_secs))?;
            let mut client = GameClient::new(service, GameSession::with_page_limit(page_size));
            client.start_new_game().await;
            println!("{}", HELP);
            play(&mut client).await?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn play(client: &mut GameClient<HttpService>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("\n{}", ui::render(client.session()));
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_line(&line) {
            Ok(Command::Keys(keys)) => {
                for key in keys {
                    client.press(key).await;
                }
            }
            Ok(Command::Guess(word)) => client.submit_guess(&word).await,
            Ok(Command::Pick(n)) => {
                match pick_index(n, client.session().suggestions().words().len()) {
                    Ok(index) => client.select_suggestion(index).await,
                    Err(msg) => println!("{}", msg),
                }
            }
            Ok(Command::More) => client.load_more().await,
            Ok(Command::NewGame) => client.start_new_game().await,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(msg) => println!("{}", msg),
        }
    }
    Ok(())
}
