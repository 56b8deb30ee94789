use clap::Parser;
use dice_roller::adapters::slack::{SlackMessage, SlackReply};
use dice_roller::config::slack::IN_CHANNEL;
use dice_roller::utils::{logger, validation::Validate};
use dice_roller::{CliConfig, DiceRoller, RollReply};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let roller = DiceRoller::new();
    let reply = match config.seed {
        Some(seed) => {
            tracing::debug!("Using seeded generator ({})", seed);
            roller.handle_with(&config.actor, &config.notation, &mut StdRng::seed_from_u64(seed))
        }
        None => roller.handle(&config.actor, &config.notation),
    };

    match reply {
        RollReply::Rolled(response) => {
            if config.json {
                let message = SlackReply::Message(SlackMessage::from_response(response, IN_CHANNEL));
                println!("{}", message.to_json()?);
            } else {
                println!("{}", response);
            }
        }
        RollReply::Rejected(message) => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    }

    Ok(())
}
