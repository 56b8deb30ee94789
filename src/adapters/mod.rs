// Adapters layer: transports that feed commands into the roller.

pub mod slack;
