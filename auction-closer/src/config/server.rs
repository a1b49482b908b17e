use clap::Args;

const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Server Options")]
#[group(id = "Server")]
pub struct Options {
    /// database url for persistent storage. Auctions are kept in memory when unset.
    #[arg(long = "database-url")]
    #[arg(env = "DATABASE_URL")]
    pub database_url:             Option<String>,
    /// Maximum number of connections kept in the database pool.
    #[arg(long = "database-max-connections")]
    #[arg(default_value_t = DEFAULT_DATABASE_MAX_CONNECTIONS)]
    #[arg(env = "DATABASE_MAX_CONNECTIONS")]
    pub database_max_connections: u32,
}
