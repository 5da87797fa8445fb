//! Login and logout.

use anyhow::{Context as _, Result};
use hudstats_core::{Notice, StoredSession};

use super::print_notice;
use crate::context::Context;

pub fn login(ctx: &Context, token: &str) -> Result<()> {
    StoredSession::load(ctx.storage())
        .login(token)
        .context("Failed to store token")?;
    print_notice(&Notice::done("Logged in"));
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    StoredSession::load(ctx.storage())
        .logout()
        .context("Failed to clear token")?;
    print_notice(&Notice::done("Logged out"));
    Ok(())
}
