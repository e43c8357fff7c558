/*
[INPUT]:  Parsed CLI subcommands
[OUTPUT]: Command handlers and interactive config setup
[POS]:    CLI layer for the guildboard-admin binary
[UPDATE]: When adding subcommands
*/

pub mod commands;
pub mod init;
