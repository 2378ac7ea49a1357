//! `ukhuwa code` — mint and check human-shareable codes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use uuid::Uuid;

use ukhuwa_codes::{parse_code, reserve_case_code, reserve_user_code};
use ukhuwa_core::{CaseId, UserId};

use crate::file_store::FileStore;

/// Arguments for the `code` subcommand.
#[derive(Args, Debug)]
pub struct CodeArgs {
    #[command(subcommand)]
    command: CodeCommands,
}

#[derive(Subcommand, Debug)]
enum CodeCommands {
    /// Mint a fresh code and reserve it in the store.
    Mint {
        /// Which namespace to mint in.
        #[arg(long, value_enum)]
        kind: CodeKind,

        /// UUID of the owning user or case.
        #[arg(long)]
        owner: Uuid,

        /// Path of the reservation index file.
        #[arg(long, default_value = "ukhuwa-codes.json")]
        store: PathBuf,
    },

    /// Check whether a presented code is structurally valid.
    Check {
        /// The code to check, e.g. `UKU-202608-K7PM`.
        code: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CodeKind {
    User,
    Case,
}

/// Dispatch the `code` subcommand.
pub fn run_code(args: &CodeArgs) -> Result<u8> {
    match &args.command {
        CodeCommands::Mint { kind, owner, store } => run_mint(*kind, *owner, store),
        CodeCommands::Check { code } => run_check(code),
    }
}

fn run_mint(kind: CodeKind, owner: Uuid, store_path: &PathBuf) -> Result<u8> {
    let store = FileStore::open(store_path)
        .with_context(|| format!("opening store {}", store_path.display()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let record = runtime
        .block_on(async {
            match kind {
                CodeKind::User => reserve_user_code(&store, UserId::from_uuid(owner)).await,
                CodeKind::Case => reserve_case_code(&store, CaseId::from_uuid(owner)).await,
            }
        })
        .context("reserving code")?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(0)
}

fn run_check(code: &str) -> Result<u8> {
    match parse_code(code) {
        Some((namespace, _)) => {
            println!("{namespace}");
            Ok(0)
        }
        None => {
            tracing::error!("not a valid ukhuwa code: {code:?}");
            Ok(1)
        }
    }
}
