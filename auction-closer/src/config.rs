use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Args,
    Parser,
};

pub mod auction;
pub mod server;

// `Options` is a structup definition to provide clean command-line args for the closer.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction closer service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub auction: auction::Options,
}

#[cfg(test)]
mod tests {
    use {
        super::Options,
        clap::Parser,
    };

    #[test]
    fn test_parse_run_options() {
        let Options::Run(options) = Options::try_parse_from([
            "auction-closer",
            "run",
            "--auction-duration",
            "2s",
            "--database-max-connections",
            "4",
        ])
        .unwrap();
        assert_eq!(options.auction.auction_duration.as_deref(), Some("2s"));
        assert_eq!(options.server.database_max_connections, 4);
    }

    #[test]
    fn test_parse_run_options_keeps_malformed_duration() {
        let Options::Run(options) =
            Options::try_parse_from(["auction-closer", "run", "--auction-duration", "soon"])
                .unwrap();
        assert_eq!(options.auction.auction_duration.as_deref(), Some("soon"));
    }
}
