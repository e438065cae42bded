/// Seed data (teachers, records, weekend) loaded from config.toml
pub mod seed;

/// Runtime settings read from environment variables
pub mod settings;
