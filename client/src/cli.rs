use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Quoridor Client")]
#[clap(about = "Replays and plays Quoridor games from move notation", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Replay(ReplayCommand),
    Play(PlayCommand),
}

#[derive(Args)]
#[clap(about = "Replays a game from its moves and prints the resulting position.", long_about = None)]
pub struct ReplayCommand {
    /// Moves such as `e2 e8 e5h`. Either as separate arguments or a single quoted string.
    #[clap(required = true)]
    pub moves: Vec<String>,

    /// Number of moves to show the position after. Defaults to all of them.
    #[clap(long)]
    pub cursor: Option<usize>,

    /// Print the position as JSON instead of a board.
    #[clap(long)]
    pub json: bool,

    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}

#[derive(Args)]
#[clap(about = "Reads moves and commands from stdin, one per line.", long_about = None)]
pub struct PlayCommand {
    /// Moves to start the game from.
    #[clap(long)]
    pub moves: Option<String>,

    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}
